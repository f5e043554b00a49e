use crate::chess::Square;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, DebugCustom, Not};
use std::fmt::{self, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

/// A set of [`Square`]s represented by a bit array.
///
/// Bits are ordered by [`Square::index`].
#[derive(
    DebugCustom,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Not,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "Bitboard({:#018x})", _0)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Constructs a set from its raw bit array.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Constructs an empty set.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// The raw bit array.
    #[inline(always)]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Returns the number of [`Square`]s in the set.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the set is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether this [`Square`] is present.
    #[inline(always)]
    pub fn contains(&self, s: Square) -> bool {
        *self & Bitboard::from(s) != Bitboard::empty()
    }

    /// Add this [`Square`] to the set.
    ///
    /// Returns `false` if it was already present.
    #[inline(always)]
    pub fn insert(&mut self, s: Square) -> bool {
        let bb = *self;
        *self |= Bitboard::from(s);
        *self != bb
    }

    /// Remove this [`Square`] from the set.
    ///
    /// Returns `false` if it was already absent.
    #[inline(always)]
    pub fn remove(&mut self, s: Square) -> bool {
        let bb = *self;
        *self &= !Bitboard::from(s);
        *self != bb
    }
}

/// Lists the squares in the set, e.g. `{e3 e4}`.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (i, s) in self.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{}", s)?;
        }

        f.write_str("}")
    }
}

impl Index<Square> for Bitboard {
    type Output = bool;

    fn index(&self, s: Square) -> &Self::Output {
        match self.contains(s) {
            true => &true,
            false => &false,
        }
    }
}

/// Constructs a unit set.
impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(s: Square) -> Self {
        Bitboard(1 << s.index())
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter()
            .map(Bitboard::from)
            .fold(Bitboard::empty(), |a, b| a | b)
    }
}

impl Extend<Square> for Bitboard {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        *self |= iter.into_iter().collect::<Bitboard>()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Self::IntoIter {
        Squares(self.0)
    }
}

/// Iterator over the [`Square`]s of a [`Bitboard`].
#[derive(Debug, Clone)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let s = Square::from_index(self.0.trailing_zeros() as _);
            self.0 &= self.0 - 1;
            Some(s)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as _;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Squares {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let i = 63 - self.0.leading_zeros();
            self.0 ^= 1 << i;
            Some(Square::from_index(i as _))
        }
    }
}

impl ExactSizeIterator for Squares {}

impl FusedIterator for Squares {}
