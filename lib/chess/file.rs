use derive_more::{DebugCustom, Display, Error, From};
use std::convert::{TryFrom, TryInto};
use std::{char::ParseCharError, ops::Sub, str::FromStr};

/// Denotes a column on the chess board.
///
/// Files are indexed from `0` to `7`, printed as the letters `a` to `h`.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}", "char::from(*self)")]
pub struct File(#[cfg_attr(test, strategy(0u8..8))] u8);

impl File {
    /// Constructs [`File`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    #[inline(always)]
    pub const fn new(i: u8) -> Self {
        assert!(i < 8, "file index out of range");
        File(i)
    }

    /// This file's index in the range (0..=7).
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..8).map(File)
    }
}

impl Sub for File {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse file")]
pub enum ParseFileError {
    ParseCharError(ParseCharError),
    InvalidFile(InvalidFile),
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<char>()?.try_into()?)
    }
}

/// The reason why converting [`File`] from a letter failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected lower case letter in the range `('a'..='h')`")]
pub struct InvalidFile;

impl TryFrom<char> for File {
    type Error = InvalidFile;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(File(c as u8 - b'a')),
            _ => Err(InvalidFile),
        }
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        char::from(b'a' + f.index())
    }
}

/// The reason why converting [`File`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct FileOutOfRange;

impl TryFrom<u8> for File {
    type Error = FileOutOfRange;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        if i < 8 {
            Ok(File(i))
        } else {
            Err(FileOutOfRange)
        }
    }
}

impl From<File> for u8 {
    fn from(f: File) -> u8 {
        f.index()
    }
}
