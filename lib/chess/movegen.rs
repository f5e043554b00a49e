use crate::chess::{Bitboard, Board, Color, Move, Piece, Role, Square};

const KNIGHT: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The squares the piece on `whence` may move to.
///
/// Moves are generated according to each [`Role`]'s movement pattern only,
/// whether the mover's king is left in check is not taken into account.
/// Returns the empty set if `whence` is not occupied.
pub fn moves_from(board: &Board, whence: Square) -> Bitboard {
    let Some(piece) = board[whence] else {
        return Bitboard::empty();
    };

    match piece.role() {
        Role::Pawn => pawn(board, whence, piece.color()),
        Role::Knight => leaps(board, whence, piece.color(), &KNIGHT),
        Role::King => leaps(board, whence, piece.color(), &KING),
        Role::Bishop => rays(board, whence, piece.color(), &DIAGONAL),
        Role::Rook => rays(board, whence, piece.color(), &ORTHOGONAL),
        Role::Queen => {
            rays(board, whence, piece.color(), &ORTHOGONAL)
                | rays(board, whence, piece.color(), &DIAGONAL)
        }
    }
}

/// An iterator over every [`Move`] available to one side.
pub fn moves(board: &Board, side: Color) -> impl Iterator<Item = Move> + '_ {
    board
        .iter()
        .filter(move |(_, p)| p.color() == side)
        .flat_map(move |(whence, _)| {
            moves_from(board, whence)
                .into_iter()
                .map(move |whither| Move::new(whence, whither))
        })
}

#[inline(always)]
fn is_opponent(p: Option<Piece>, side: Color) -> bool {
    p.is_some_and(|p| p.color() != side)
}

fn pawn(board: &Board, whence: Square, side: Color) -> Bitboard {
    let mut moves = Bitboard::empty();
    let forward = side.forward();

    if let Some(push) = whence.offset(forward, 0).filter(|&s| board[s].is_none()) {
        moves.insert(push);

        if whence.rank() == side.pawn_rank() {
            if let Some(double) = push.offset(forward, 0).filter(|&s| board[s].is_none()) {
                moves.insert(double);
            }
        }
    }

    for df in [-1, 1] {
        if let Some(capture) = whence.offset(forward, df) {
            if is_opponent(board[capture], side) {
                moves.insert(capture);
            }
        }
    }

    moves
}

fn leaps(board: &Board, whence: Square, side: Color, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, df)| whence.offset(dr, df))
        .filter(|&s| board[s].map_or(true, |p| p.color() != side))
        .collect()
}

fn rays(board: &Board, whence: Square, side: Color, directions: &[(i8, i8)]) -> Bitboard {
    let mut moves = Bitboard::empty();

    for &(dr, df) in directions {
        let mut next = whence.offset(dr, df);
        while let Some(s) = next {
            match board[s] {
                None => {
                    moves.insert(s);
                    next = s.offset(dr, df);
                }

                Some(p) => {
                    if p.color() != side {
                        moves.insert(s);
                    }

                    break;
                }
            }
        }
    }

    moves
}
