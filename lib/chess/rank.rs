use derive_more::{DebugCustom, Display, Error, From};
use std::convert::{TryFrom, TryInto};
use std::{char::ParseCharError, ops::Sub, str::FromStr};

/// Denotes a row on the chess board.
///
/// Ranks are indexed from `0`, Black's back rank, to `7`, White's back rank.
/// In algebraic notation that is the digit `8` down to the digit `1`.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}", "char::from(*self)")]
pub struct Rank(#[cfg_attr(test, strategy(0u8..8))] u8);

impl Rank {
    /// Constructs [`Rank`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    #[inline(always)]
    pub const fn new(i: u8) -> Self {
        assert!(i < 8, "rank index out of range");
        Rank(i)
    }

    /// This rank's index in the range (0..=7).
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..8).map(Rank)
    }
}

impl Sub for Rank {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rank")]
pub enum ParseRankError {
    ParseCharError(ParseCharError),
    InvalidRank(InvalidRank),
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`Rank`] from a digit failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected digit in the range `('1'..='8')`")]
pub struct InvalidRank;

impl TryFrom<char> for Rank {
    type Error = InvalidRank;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(Rank(b'8' - c as u8)),
            _ => Err(InvalidRank),
        }
    }
}

impl From<Rank> for char {
    fn from(r: Rank) -> Self {
        char::from(b'8' - r.index())
    }
}

/// The reason why converting [`Rank`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct RankOutOfRange;

impl TryFrom<u8> for Rank {
    type Error = RankOutOfRange;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        if i < 8 {
            Ok(Rank(i))
        } else {
            Err(RankOutOfRange)
        }
    }
}

impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.index()
    }
}
