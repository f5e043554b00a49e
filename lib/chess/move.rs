use crate::chess::{ParseSquareError, Square};
use derive_more::{Constructor, DebugCustom, Display, Error};
use std::str::FromStr;

/// A chess move.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[debug(fmt = "{}", self)]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    whence: Square,
    whither: Square,
}

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move")]
pub enum ParseMoveError {
    InvalidFromSquare(ParseSquareError),
    InvalidToSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Move::new(
            s[..i].parse().map_err(InvalidFromSquare)?,
            s[i..].parse().map_err(InvalidToSquare)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_has_a_source_and_a_destination(whence: Square, whither: Square) {
        let m = Move::new(whence, whither);
        assert_eq!((m.whence(), m.whither()), (whence, whither));
    }

    #[proptest]
    fn move_serializes_to_pure_coordinate_notation(m: Move) {
        assert_eq!(m.to_string(), format!("{}{}", m.whence(), m.whither()));
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_if_from_square_is_invalid(
        #[strategy("[^a-h]{2}|[a-h][^1-8]")] f: String,
        t: Square,
    ) {
        use ParseMoveError::*;
        let s = [f.clone(), t.to_string()].concat();
        assert_eq!(
            s.parse::<Move>().err(),
            f.parse::<Square>().err().map(InvalidFromSquare)
        );
    }

    #[proptest]
    fn parsing_move_fails_if_to_square_is_invalid(
        f: Square,
        #[strategy("[^a-h]{2}|[a-h][^1-8]")] t: String,
    ) {
        use ParseMoveError::*;
        let s = [f.to_string(), t.clone()].concat();
        assert_eq!(
            s.parse::<Move>().err(),
            t.parse::<Square>().err().map(InvalidToSquare)
        );
    }
}
