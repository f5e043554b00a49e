use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{DebugCustom, Display, Error, From};
use std::str::FromStr;

/// A square on the chess board.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`Rank`] and [`File`].
    #[inline(always)]
    pub const fn new(rank: Rank, file: File) -> Self {
        Square { rank, file }
    }

    /// Constructs [`Square`] from its [index][`Square::index`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=63).
    #[inline(always)]
    pub const fn from_index(i: u8) -> Self {
        assert!(i < 64, "square index out of range");
        Square::new(Rank::new(i / 8), File::new(i % 8))
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// This square's [`File`].
    #[inline(always)]
    pub const fn file(&self) -> File {
        self.file
    }

    /// This square's index in the range (0..=63), ordered by rank then file.
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        self.rank.index() * 8 + self.file.index()
    }

    /// The square `dr` ranks and `df` files away, unless that falls off the board.
    #[inline(always)]
    pub fn offset(&self, dr: i8, df: i8) -> Option<Self> {
        let r = self.rank.index() as i8 + dr;
        let f = self.file.index() as i8 + df;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            Some(Square::new(Rank::new(r as u8), File::new(f as u8)))
        } else {
            None
        }
    }

    /// Returns an iterator over [`Square`]s ordered by [index][`Square::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Square::from_index)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square")]
pub enum ParseSquareError {
    InvalidFile(ParseFileError),
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        let file = s[..i].parse()?;
        Ok(Square::new(s[i..].parse()?, file))
    }
}
