use crate::chess::{Bitboard, Square};
use derive_more::Display;

/// Which [`Square`], if any, is currently chosen.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Selection {
    /// No square is selected.
    #[default]
    #[display(fmt = "idle")]
    Idle,

    /// A piece was selected along with its legal destinations.
    #[display(fmt = "{} -> {}", whence, destinations)]
    Active {
        whence: Square,
        destinations: Bitboard,
    },
}

impl Selection {
    /// The selected [`Square`], if any.
    pub fn whence(&self) -> Option<Square> {
        match *self {
            Selection::Idle => None,
            Selection::Active { whence, .. } => Some(whence),
        }
    }

    /// The cached legal destinations, empty if idle.
    pub fn destinations(&self) -> Bitboard {
        match *self {
            Selection::Idle => Bitboard::empty(),
            Selection::Active { destinations, .. } => destinations,
        }
    }
}
