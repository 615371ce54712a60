use super::super::{Board, Color, Move, MoveList, PieceType, Position};
use super::Landing;

impl Board {
    /// Pawn pushes and diagonal captures. No en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Position, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        // A pawn already on its farthest rank has nowhere to go.
        let Some(forward) = from.offset(dir, 0) else {
            return moves;
        };

        if self.is_empty(forward) {
            push_pawn_move(&mut moves, from, forward, color);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::new(from, double));
                    }
                }
            }
        }

        // File increases to the right from White's side of the board; both
        // colors capture on both forward diagonals.
        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.landing(target, color) == Landing::Capture {
                    push_pawn_move(&mut moves, from, target, color);
                }
            }
        }

        moves
    }
}

/// Push `from -> to`, expanded into one move per promotion type when `to`
/// is on the color's farthest rank.
fn push_pawn_move(moves: &mut MoveList, from: Position, to: Position, color: Color) {
    if to.rank() == color.promotion_rank() {
        for promo in PieceType::PROMOTION_TYPES {
            moves.push(Move::with_promotion(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
