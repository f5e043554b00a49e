use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline(always)]
    pub const fn new(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    fn glyph(&self) -> char {
        match (self.role, self.color) {
            (Role::Pawn, Color::White) => '♙',
            (Role::Knight, Color::White) => '♘',
            (Role::Bishop, Color::White) => '♗',
            (Role::Rook, Color::White) => '♖',
            (Role::Queen, Color::White) => '♕',
            (Role::King, Color::White) => '♔',
            (Role::Pawn, Color::Black) => '♟',
            (Role::Knight, Color::Black) => '♞',
            (Role::Bishop, Color::Black) => '♝',
            (Role::Rook, Color::Black) => '♜',
            (Role::Queen, Color::Black) => '♛',
            (Role::King, Color::Black) => '♚',
        }
    }
}

/// Prints the piece as a letter, upper case for White and lower case for Black.
///
/// The alternate form `{:#}` prints a Unicode chess glyph instead.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_char(self.glyph());
        }

        match self.color {
            Color::White => write!(f, "{}", self.role.to_string().to_ascii_uppercase()),
            Color::Black => write!(f, "{}", self.role),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = s.to_ascii_lowercase().parse().map_err(|_| ParsePieceError)?;

        if s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Piece::new(role, Color::White))
        } else {
            Ok(Piece::new(role, Color::Black))
        }
    }
}
