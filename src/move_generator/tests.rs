use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::*;
use crate::chess_position;
use crate::position::castle_rights::*;
use crate::position::piece::{Piece, PieceKind};
use crate::position::square::*;
use crate::std_move;

fn sorted(moves: ChessMoveList) -> Vec<ChessMove> {
    let mut moves = moves.into_vec();
    moves.sort();
    moves
}

fn count_positions(position: &Position, color: Color, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    legal_moves(position, color)
        .iter()
        .map(|&chess_move| {
            let mut next = position.clone();
            next.apply_move(chess_move);
            count_positions(&next, color.opposite(), depth - 1)
        })
        .sum()
}

#[test]
fn test_starting_position_has_twenty_moves_for_white() {
    let position = Position::starting_position();
    let moves = legal_moves(&position, Color::White);
    assert_eq!(moves.len(), 20);

    let knight_moves = moves
        .iter()
        .filter(|m| position.get(m.from_square()).map(|p| p.kind) == Some(PieceKind::Knight))
        .count();
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_black_has_twenty_replies_to_first_move() {
    let mut position = Position::starting_position();
    position.apply_move(std_move!(E2, E4));
    assert_eq!(legal_moves(&position, Color::Black).len(), 20);
}

#[test]
fn test_count_positions_from_start() {
    let position = Position::starting_position();
    assert_eq!(count_positions(&position, Color::White, 1), 20);
    assert_eq!(count_positions(&position, Color::White, 2), 400);
    assert_eq!(count_positions(&position, Color::White, 3), 8902);
}

#[test]
fn test_legal_moves_never_leave_own_king_in_check() {
    let mut rng = StdRng::seed_from_u64(7);
    for _game in 0..8 {
        let mut position = Position::starting_position();
        let mut turn = Color::White;
        for _ply in 0..60 {
            let moves = legal_moves(&position, turn);
            for &chess_move in moves.iter() {
                let mut simulated = position.clone();
                simulated.apply_move(chess_move);
                assert!(
                    !simulated.is_king_in_check(turn),
                    "{} leaves the {} king in check in\n{}",
                    chess_move,
                    turn,
                    position
                );
            }
            let chess_move = match moves.choose(&mut rng) {
                Some(&chess_move) => chess_move,
                None => break,
            };
            position.apply_move(chess_move);
            turn = turn.opposite();
        }
    }
}

#[test]
fn test_pawn_moves() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ..n.....
        ...P...P
        ....K..b
    };
    let moves = sorted(pseudo_legal_moves(&position, D2));
    assert_eq!(
        moves,
        sorted(ChessMoveList::from_slice(&[
            std_move!(D2, D3),
            std_move!(D2, D4),
            std_move!(D2, C3),
        ]))
    );

    // the h-pawn cannot capture straight ahead or backwards
    let h_moves = sorted(pseudo_legal_moves(&position, H2));
    assert_eq!(
        h_moves,
        sorted(ChessMoveList::from_slice(&[std_move!(H2, H3), std_move!(H2, H4)]))
    );
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let blocked_near = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ....n...
        ....P...
        ....K...
    };
    assert!(pseudo_legal_moves(&blocked_near, E2).is_empty());

    let blocked_far = chess_position! {
        ....k...
        ........
        ........
        ........
        ....n...
        ........
        ....P...
        ....K...
    };
    assert_eq!(
        sorted(pseudo_legal_moves(&blocked_far, E2)),
        vec![std_move!(E2, E3)]
    );
}

#[test]
fn test_pawn_double_step_only_from_start_row() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ...P....
        ........
        ....K...
    };
    assert_eq!(
        sorted(pseudo_legal_moves(&position, D3)),
        vec![std_move!(D3, D4)]
    );
}

#[test]
fn test_no_en_passant() {
    let mut position = chess_position! {
        ....k...
        ...p....
        ........
        ....P...
        ........
        ........
        ........
        ....K...
    };
    position.apply_move(std_move!(D7, D5));
    let moves = legal_moves(&position, Color::White);
    assert!(!moves.contains(&std_move!(E5, D6)));
}

#[test]
fn test_knight_moves_from_corner() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        .p......
        ..P.....
        N...K...
    };
    assert_eq!(
        sorted(pseudo_legal_moves(&position, A1)),
        vec![std_move!(A1, B3)]
    );
}

#[test]
fn test_sliding_moves_stop_at_pieces() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ...p....
        ........
        ..P.....
        R..BK...
    };
    let rook_moves = sorted(pseudo_legal_moves(&position, A1));
    assert_eq!(rook_moves.len(), 9);
    assert!(rook_moves.contains(&std_move!(A1, C1)));
    assert!(!rook_moves.contains(&std_move!(A1, D1)));

    let bishop_moves = sorted(pseudo_legal_moves(&position, D1));
    assert!(bishop_moves.contains(&std_move!(D1, E2)));
    assert!(!bishop_moves.contains(&std_move!(D1, C2)));
    assert!(!bishop_moves.contains(&std_move!(D1, B3)));
    assert!(bishop_moves.contains(&std_move!(D1, H5)));
}

#[test]
fn test_queen_in_open_board() {
    let position = chess_position! {
        ........
        ........
        ........
        ........
        ...Q....
        ........
        ........
        ........
    };
    assert_eq!(pseudo_legal_moves(&position, D4).len(), 27);
    assert!(pseudo_legal_moves(&position, E4).is_empty());
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ....r...
        ........
        ....N...
        ....K...
    };
    let knight_moves = legal_moves_from(&position, E2);
    assert!(knight_moves.is_empty());
    assert!(!pseudo_legal_moves(&position, E2).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        r.......
        ....K...
    };
    let moves = legal_moves(&position, Color::White);
    for chess_move in moves.iter() {
        assert_eq!(chess_move.to_square().row(), 7, "{} walks into the rook", chess_move);
    }
    assert!(!moves.is_empty());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut position = Position::starting_position();
    for chess_move in &[
        std_move!(F2, F3),
        std_move!(E7, E5),
        std_move!(G2, G4),
        std_move!(D8, H4),
    ] {
        position.apply_move(*chess_move);
    }
    assert!(legal_moves(&position, Color::White).is_empty());
    assert!(position.is_king_in_check(Color::White));
}

#[test]
fn test_corner_mate() {
    let position = chess_position! {
        k.......
        Q.......
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    assert!(legal_moves(&position, Color::Black).is_empty());
    assert!(position.is_king_in_check(Color::Black));
}

#[test]
fn test_corner_stalemate() {
    let position = chess_position! {
        k.......
        ........
        .Q......
        ........
        ........
        ........
        ........
        ....K...
    };
    assert!(legal_moves(&position, Color::Black).is_empty());
    assert!(!position.is_king_in_check(Color::Black));
}

fn castling_position() -> Position {
    chess_position! {
        r...k..r
        pppppppp
        ........
        ........
        ........
        ........
        PPPPPPPP
        R...K..R
    }
}

#[test]
fn test_both_castles_available() {
    let position = castling_position();
    let white = legal_moves(&position, Color::White);
    assert!(white.contains(&std_move!(E1, G1)));
    assert!(white.contains(&std_move!(E1, C1)));

    let black = legal_moves(&position, Color::Black);
    assert!(black.contains(&std_move!(E8, G8)));
    assert!(black.contains(&std_move!(E8, C8)));
}

#[test]
fn test_king_move_disables_both_castles_for_good() {
    let mut position = castling_position();
    position.apply_move(std_move!(E1, F1));
    position.apply_move(std_move!(F1, E1));
    let moves = legal_moves(&position, Color::White);
    assert!(!moves.contains(&std_move!(E1, G1)));
    assert!(!moves.contains(&std_move!(E1, C1)));
    assert!(position.has_moved(WHITE_KING_MOVED));

    // black is unaffected
    assert_eq!(castle_moves(&position, Color::Black).len(), 2);
}

#[test]
fn test_rook_move_disables_only_that_side() {
    let mut position = castling_position();
    position.apply_move(std_move!(H1, G1));
    position.apply_move(std_move!(G1, H1));
    let moves = castle_moves(&position, Color::White);
    assert_eq!(moves.into_vec(), vec![std_move!(E1, C1)]);
}

#[test]
fn test_moved_flag_outlives_a_rook_back_in_the_corner() {
    let mut position = castling_position();
    position.remove(A8);
    position
        .put(A8, Piece::new(PieceKind::Rook, Color::Black))
        .unwrap();
    position.mark_moved(BLACK_QUEENSIDE_ROOK_MOVED);
    assert_eq!(
        castle_moves(&position, Color::Black).into_vec(),
        vec![std_move!(E8, G8)]
    );
}

#[test]
fn test_occupied_transit_square_disables_that_side_only() {
    let mut position = castling_position();
    position
        .put(B1, Piece::new(PieceKind::Knight, Color::White))
        .unwrap();
    assert_eq!(
        castle_moves(&position, Color::White).into_vec(),
        vec![std_move!(E1, G1)]
    );

    let mut position = castling_position();
    position
        .put(F1, Piece::new(PieceKind::Bishop, Color::White))
        .unwrap();
    assert_eq!(
        castle_moves(&position, Color::White).into_vec(),
        vec![std_move!(E1, C1)]
    );
}

#[test]
fn test_attacked_transit_square_disables_that_side_only() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        .....r..
        PPPPP..P
        R...K..R
    };
    assert_eq!(
        castle_moves(&position, Color::White).into_vec(),
        vec![std_move!(E1, C1)]
    );

    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ...r....
        PPP..PPP
        R...K..R
    };
    assert_eq!(
        castle_moves(&position, Color::White).into_vec(),
        vec![std_move!(E1, G1)]
    );
}

#[test]
fn test_attacked_b_file_does_not_block_queenside() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        .r......
        P.PPPPPP
        R...K..R
    };
    let moves = castle_moves(&position, Color::White);
    assert!(moves.contains(&std_move!(E1, C1)));
}

#[test]
fn test_no_castling_out_of_check() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ....r...
        ........
        PPPP.PPP
        R...K..R
    };
    assert!(castle_moves(&position, Color::White).is_empty());
}

#[test]
fn test_no_castling_without_rook_in_corner() {
    let position = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        PPPPPPPP
        ....K..N
    };
    assert!(castle_moves(&position, Color::White).is_empty());
}
