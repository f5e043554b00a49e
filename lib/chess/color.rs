use crate::chess::Rank;
use derive_more::{Display, Error};
use std::{ops::Not, str::FromStr};

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The direction pawns of this color advance in, as a [`Rank`] step.
    ///
    /// White starts on the highest ranks and moves toward rank index 0.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The [`Rank`] pawns of this color start on.
    #[inline(always)]
    pub const fn pawn_rank(&self) -> Rank {
        match self {
            Color::White => Rank::new(6),
            Color::Black => Rank::new(1),
        }
    }

    /// The [`Rank`] the other pieces of this color start on.
    #[inline(always)]
    pub const fn back_rank(&self) -> Rank {
        match self {
            Color::White => Rank::new(7),
            Color::Black => Rank::new(0),
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected either `white` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn pawns_advance_away_from_their_own_back_rank(c: Color) {
        let step = c.pawn_rank().index() as i8 - c.back_rank().index() as i8;
        assert_eq!(step, c.forward());
    }

    #[proptest]
    fn opposing_pawns_advance_in_opposite_directions(c: Color) {
        assert_eq!(c.forward(), -(!c).forward());
    }

    #[proptest]
    fn parsing_printed_color_is_an_identity(c: Color) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_color_fails_for_other_strings(
        #[filter(!["white", "black", "w", "b"].contains(&#s.as_str()))] s: String,
    ) {
        assert_eq!(s.parse::<Color>(), Err(ParseColorError));
    }
}
