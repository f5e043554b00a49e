use crate::chess::{Color, File, Move, Piece, Rank, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;
use std::str::FromStr;

/// The piece placement on the board.
///
/// This type does not validate whether the placement it holds makes sense
/// according to any set of chess rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(proptest::option::weighted(0.5, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                for (s, p) in Square::iter().zip(v) {
                    board.place(s, p);
                }

                board
            })
            .boxed()
    }
}

/// The standard initial position.
impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    const BACK_RANK: [Role; 8] = [
        Role::Rook,
        Role::Knight,
        Role::Bishop,
        Role::Queen,
        Role::King,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
    ];

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// The standard initial position.
    ///
    /// Black occupies ranks `0` and `1`, White occupies ranks `6` and `7`.
    pub fn initial() -> Self {
        let mut board = Board::empty();

        for c in [Color::White, Color::Black] {
            for (f, role) in File::iter().zip(Self::BACK_RANK) {
                board.place(Square::new(c.back_rank(), f), Some(Piece::new(role, c)));
                board.place(Square::new(c.pawn_rank(), f), Some(Piece::new(Role::Pawn, c)));
            }
        }

        board
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.grid[s.rank().index() as usize][s.file().index() as usize]
    }

    /// Overwrites whatever occupies a [`Square`].
    #[inline(always)]
    pub fn place(&mut self, s: Square, p: Option<Piece>) {
        self.grid[s.rank().index() as usize][s.file().index() as usize] = p;
    }

    /// Moves whatever occupies the source [`Square`] to the destination.
    ///
    /// The source is left empty and whatever occupied the destination is
    /// discarded and returned. No legality checking is performed.
    pub fn apply(&mut self, m: Move) -> Option<Piece> {
        let captured = self.piece_at(m.whither());
        self.place(m.whither(), self.piece_at(m.whence()));
        self.place(m.whence(), None);
        captured
    }

    /// An iterator over all pieces on the board, ordered by [`Square`].
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|s| Some((s, self.piece_at(s)?)))
    }

    /// The piece placement in FEN notation.
    pub fn placement(&self) -> Placement<'_> {
        Placement(self)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, s: Square) -> &Self::Output {
        &self.grid[s.rank().index() as usize][s.file().index() as usize]
    }
}

/// Draws a diagram of the board, rank `0` at the top.
///
/// The alternate form `{:#}` draws pieces as Unicode glyphs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;

        for rank in Rank::iter() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self[Square::new(rank, file)] {
                    Some(p) if f.alternate() => write!(f, " {:#} |", p)?,
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        Ok(())
    }
}

/// Displays the piece placement of a [`Board`] in FEN notation.
#[derive(Debug, Copy, Clone)]
pub struct Placement<'a>(&'a Board);

impl fmt::Display for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter() {
            if rank.index() > 0 {
                f.write_char('/')?;
            }

            let mut skip = 0;
            for file in File::iter() {
                match self.0[Square::new(rank, file)] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing the piece placement failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[error(ignore)]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 ranks separated by `/`")]
    WrongNumberOfRanks,
    #[display(fmt = "expected 8 squares on rank `{}`", _0)]
    WrongNumberOfSquares(Rank),
    #[display(fmt = "unexpected character `{}` on rank `{}`", _0, _1)]
    InvalidCharacter(char, Rank),
}

/// Parses the piece placement field of FEN notation.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<_> = s.split('/').collect();
        if segments.len() != 8 {
            return Err(ParseBoardError::WrongNumberOfRanks);
        }

        let mut board = Board::empty();
        for (rank, segment) in Rank::iter().zip(segments) {
            let mut file = 0;
            for c in segment.chars() {
                let mut buffer = [0; 4];

                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip;
                } else if let Ok(p) = c.encode_utf8(&mut buffer).parse::<Piece>() {
                    if file >= 8 {
                        return Err(ParseBoardError::WrongNumberOfSquares(rank));
                    }

                    board.place(Square::new(rank, File::new(file as _)), Some(p));
                    file += 1;
                } else {
                    return Err(ParseBoardError::InvalidCharacter(c, rank));
                }
            }

            if file != 8 {
                return Err(ParseBoardError::WrongNumberOfSquares(rank));
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn initial_board_has_the_standard_placement() {
        assert_eq!(
            Board::initial().placement().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn initial_board_has_sixteen_pieces_of_each_color() {
        let board = Board::initial();
        for c in [Color::White, Color::Black] {
            assert_eq!(board.iter().filter(|(_, p)| p.color() == c).count(), 16);
        }
    }

    #[proptest]
    fn initial_board_leaves_middle_ranks_empty(#[strategy(2u8..6)] r: u8, f: File) {
        assert_eq!(Board::initial()[Square::new(Rank::new(r), f)], None);
    }

    #[proptest]
    fn empty_board_has_no_pieces(s: Square) {
        assert_eq!(Board::empty().piece_at(s), None);
    }

    #[proptest]
    fn board_can_be_indexed_by_square(b: Board, s: Square) {
        assert_eq!(b[s], b.piece_at(s));
    }

    #[proptest]
    fn place_overwrites_square(mut b: Board, s: Square, p: Option<Piece>) {
        b.place(s, p);
        assert_eq!(b[s], p);
    }

    #[proptest]
    fn place_does_not_affect_other_squares(
        mut b: Board,
        s: Square,
        #[filter(#t != #s)] t: Square,
        p: Option<Piece>,
    ) {
        let before = b[t];
        b.place(s, p);
        assert_eq!(b[t], before);
    }

    #[proptest]
    fn apply_moves_piece_and_clears_source(mut b: Board, #[filter(#m.whence() != #m.whither())] m: Move) {
        let p = b[m.whence()];
        let q = b[m.whither()];
        assert_eq!(b.apply(m), q);
        assert_eq!(b[m.whither()], p);
        assert_eq!(b[m.whence()], None);
    }

    #[proptest]
    fn captures_are_not_undone_by_the_reverse_move(
        mut b: Board,
        #[filter(#m.whence() != #m.whither())] m: Move,
        p: Piece,
        q: Piece,
    ) {
        b.place(m.whence(), Some(p));
        b.place(m.whither(), Some(q));
        b.apply(m);
        b.apply(Move::new(m.whither(), m.whence()));
        assert_eq!(b[m.whence()], Some(p));
        assert_eq!(b[m.whither()], None);
    }

    #[proptest]
    fn iter_returns_squares_and_pieces(b: Board) {
        for (s, p) in b.iter() {
            assert_eq!(b[s], Some(p));
        }

        assert_eq!(b.iter().count(), Square::iter().filter(|&s| b[s].is_some()).count());
    }

    #[proptest]
    fn parsing_printed_placement_is_an_identity(b: Board) {
        assert_eq!(b.placement().to_string().parse(), Ok(b));
    }

    #[proptest]
    fn parsing_placement_fails_for_wrong_number_of_ranks(#[filter(#n != 8)] #[strategy(0usize..16)] n: usize) {
        let s = vec!["8"; n].join("/");
        assert_eq!(s.parse::<Board>(), Err(ParseBoardError::WrongNumberOfRanks));
    }

    #[proptest]
    fn parsing_placement_fails_for_invalid_characters(
        b: Board,
        #[strategy(..=#b.placement().to_string().len())] n: usize,
        #[strategy("[^[:ascii:]]")] r: String,
    ) {
        let s = b.placement().to_string();
        assert!([&s[..n], &r, &s[n..]].concat().parse::<Board>().is_err());
    }

    #[test]
    fn parsing_placement_fails_for_overfull_rank() {
        assert_eq!(
            "rnbqkbnrr/8/8/8/8/8/8/8".parse::<Board>(),
            Err(ParseBoardError::WrongNumberOfSquares(Rank::new(0)))
        );
    }

    #[test]
    fn board_is_drawn_with_rank_zero_at_the_top() {
        let diagram = Board::initial().to_string();
        let lines: Vec<_> = diagram.lines().collect();
        assert_eq!(lines[2], " 8 | r | n | b | q | k | b | n | r | 8");
        assert_eq!(lines[16], " 1 | R | N | B | Q | K | B | N | R | 1");
    }

    #[test]
    fn board_can_be_drawn_with_glyphs() {
        let diagram = format!("{:#}", Board::initial());
        assert!(diagram.contains(" ♜ | ♞ | ♝ | ♛ | ♚ | ♝ | ♞ | ♜ "));
        assert!(diagram.contains(" ♙ | ♙ | ♙ | ♙ | ♙ | ♙ | ♙ | ♙ "));
    }
}
