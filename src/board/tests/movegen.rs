//! Move generation tests for kings, knights and sliding pieces.

use super::{board, destinations, moves_from, quiet, sq};
use crate::board::{generate_moves, Board, Color, MoveGenError, Piece, PieceType};

fn lone(color: Color, kind: PieceType, at: &str) -> Board {
    let mut board = Board::new();
    board.place(sq(at), Piece::new(color, kind));
    board
}

#[test]
fn test_empty_square_is_an_error() {
    let board = Board::standard();
    assert_eq!(
        board.generate_moves(sq("e4")),
        Err(MoveGenError::EmptySquare { position: sq("e4") })
    );
}

#[test]
fn test_free_function_matches_method() {
    let board = Board::standard();
    assert_eq!(
        generate_moves(&board, sq("b1")),
        board.generate_moves(sq("b1"))
    );
}

#[test]
fn test_knight_in_corner() {
    let board = lone(Color::White, PieceType::Knight, "a1");
    let moves = moves_from(&board, "a1");
    assert_eq!(destinations(&moves), ["b3", "c2"]);
    assert!(moves.contains(&quiet("a1", "c2")));
}

#[test]
fn test_knight_in_center_skips_own_pieces() {
    // White knight d4, own pawns on e6 and b3, black pawn on c6.
    let board = board("8/8/2p1P3/8/3N4/1P6/8/8");
    let moves = moves_from(&board, "d4");
    assert_eq!(
        destinations(&moves),
        ["b5", "c2", "c6", "e2", "f3", "f5"]
    );
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::standard();
    let moves = moves_from(&board, "g1");
    assert_eq!(destinations(&moves), ["f3", "h3"]);
}

#[test]
fn test_king_in_center() {
    let board = lone(Color::Black, PieceType::King, "d4");
    let moves = moves_from(&board, "d4");
    assert_eq!(moves.len(), 8);
    assert_eq!(
        destinations(&moves),
        ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"]
    );
}

#[test]
fn test_king_blocked_and_capturing() {
    // White king e1, own pawn e2, black pawn d2.
    let board = board("8/8/8/8/8/8/3pP3/4K3");
    let moves = moves_from(&board, "e1");
    assert_eq!(destinations(&moves), ["d1", "d2", "f1", "f2"]);
}

#[test]
fn test_king_in_starting_position_has_no_moves() {
    let board = Board::standard();
    assert!(moves_from(&board, "e1").is_empty());
    assert!(moves_from(&board, "e8").is_empty());
}

#[test]
fn test_rook_on_empty_board() {
    let board = lone(Color::White, PieceType::Rook, "a1");
    let moves = moves_from(&board, "a1");
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| m.to().rank() == 1 || m.to().file() == 1));
}

#[test]
fn test_rook_stops_at_own_piece_and_captures_enemy() {
    // White rook d4, own pawn d6, black knight f4.
    let board = board("8/8/3P4/8/3R1n2/8/8/8");
    let moves = moves_from(&board, "d4");
    assert_eq!(
        destinations(&moves),
        ["a4", "b4", "c4", "d1", "d2", "d3", "d5", "e4", "f4"]
    );
}

#[test]
fn test_bishop_from_back_rank() {
    let board = lone(Color::Black, PieceType::Bishop, "c1");
    let moves = moves_from(&board, "c1");
    assert_eq!(
        destinations(&moves),
        ["a3", "b2", "d2", "e3", "f4", "g5", "h6"]
    );
}

#[test]
fn test_bishop_capture_ends_ray() {
    // Black bishop a8, white pawn c6, white rook d5 behind it.
    let board = board("b7/8/2P5/3R4/8/8/8/8");
    let moves = moves_from(&board, "a8");
    assert_eq!(destinations(&moves), ["b7", "c6"]);
}

#[test]
fn test_queen_on_empty_board() {
    let board = lone(Color::White, PieceType::Queen, "d4");
    assert_eq!(moves_from(&board, "d4").len(), 27);

    let corner = lone(Color::White, PieceType::Queen, "h8");
    assert_eq!(moves_from(&corner, "h8").len(), 21);
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let placement = "8/1p6/8/3Q1P2/8/8/6n1/8";
    let queen = moves_from(&board(placement), "d5");
    let rook = moves_from(&board(&placement.replace('Q', "R")), "d5");
    let bishop = moves_from(&board(&placement.replace('Q', "B")), "d5");

    assert_eq!(queen.len(), rook.len() + bishop.len());
    for mv in rook.iter().chain(bishop.iter()) {
        assert!(queen.contains(mv), "queen should reach {}", mv.to());
    }
}

#[test]
fn test_sliders_boxed_in_at_start() {
    let board = Board::standard();
    for from in ["a1", "c1", "d1", "f1", "h1", "a8", "c8", "d8", "f8", "h8"] {
        assert!(moves_from(&board, from).is_empty(), "{from} should be blocked");
    }
}

#[test]
fn test_moves_for_color_in_starting_position() {
    let board = Board::standard();
    assert_eq!(board.generate_moves_for_color(Color::White).len(), 20);
    assert_eq!(board.generate_moves_for_color(Color::Black).len(), 20);
    assert!(Board::new().generate_moves_for_color(Color::White).is_empty());
}

#[test]
fn test_generation_leaves_board_untouched() {
    let board = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
    let before = board.clone();
    let _ = board.generate_moves_for_color(Color::White);
    let _ = board.generate_moves_for_color(Color::Black);
    assert_eq!(board, before);
}
