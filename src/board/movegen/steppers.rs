use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Board, Color, Move, MoveList, Position};
use super::Landing;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Position, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KING_TARGETS[from.as_index()])
    }

    pub(crate) fn generate_knight_moves(&self, from: Position, color: Color) -> MoveList {
        self.generate_step_moves(from, color, &KNIGHT_TARGETS[from.as_index()])
    }

    /// One move per on-board target that is empty or holds an enemy piece.
    fn generate_step_moves(&self, from: Position, color: Color, targets: &[Position]) -> MoveList {
        let mut moves = MoveList::new();
        for &to in targets {
            if self.landing(to, color) != Landing::Blocked {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
