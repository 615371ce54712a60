//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `layout.rs` - Placement, standard layout and structural equality
//! - `movegen.rs` - King, knight and sliding piece generation
//! - `pawns.rs` - Pawn pushes, captures and promotions for both colors
//! - `proptest.rs` - Property-based tests over random boards

use crate::board::{Board, Move, MoveList, Position};

mod movegen;

pub(crate) fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}

pub(crate) fn board(placement: &str) -> Board {
    placement.parse().expect("valid placement")
}

pub(crate) fn destinations(moves: &MoveList) -> Vec<String> {
    let mut out: Vec<String> = moves.destinations().map(|p| p.to_string()).collect();
    out.sort();
    out
}

pub(crate) fn moves_from(board: &Board, from: &str) -> MoveList {
    board.generate_moves(sq(from)).expect("piece on square")
}

pub(crate) fn quiet(from: &str, to: &str) -> Move {
    Move::new(sq(from), sq(to))
}
