use lib::chess::{moves, Board, Color};
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(board: &Board, turn: Color, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => moves(board, turn).count(),
        d => moves(board, turn)
            .par_bridge()
            .map(|m| {
                let mut next = *board;
                next.apply(m);
                perft(&next, !turn, d - 1)
            })
            .sum(),
    }
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // No checks are possible this early, so these match the legal move counts.
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    assert_eq!(perft(&Board::initial(), Color::White, 1), 20);
    assert_eq!(perft(&Board::initial(), Color::White, 2), 400);
    assert_eq!(perft(&Board::initial(), Color::White, 3), 8902);
}

#[proptest(cases = 1)]
fn perft_is_symmetric_between_colors() {
    let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse()?;
    assert_eq!(
        perft(&board, Color::White, 3),
        perft(&board, Color::Black, 3)
    );
}

#[proptest(cases = 1)]
fn lone_kings_have_a_fixed_number_of_moves() {
    let board: Board = "k7/8/8/8/8/8/8/7K".parse()?;
    assert_eq!(perft(&board, Color::White, 1), 3);
    assert_eq!(perft(&board, Color::Black, 1), 3);
    assert_eq!(perft(&board, Color::White, 2), 9);
}
