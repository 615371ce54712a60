use super::super::attack_tables::{ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use super::super::{Board, Color, Move, MoveList, Position};
use super::Landing;

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Position,
        color: Color,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, df) in slider.directions() {
            self.walk_ray(from, color, dr, df, &mut moves);
        }
        moves
    }

    /// Walk outward from `from` until the edge or the first occupied square.
    /// An enemy on that square is included as a capture.
    fn walk_ray(&self, from: Position, color: Color, dr: i8, df: i8, moves: &mut MoveList) {
        let mut current = from;
        while let Some(to) = current.offset(dr, df) {
            match self.landing(to, color) {
                Landing::Empty => moves.push(Move::new(from, to)),
                Landing::Capture => {
                    moves.push(Move::new(from, to));
                    break;
                }
                Landing::Blocked => break,
            }
            current = to;
        }
    }
}
