use crate::chess::{Bitboard, Board, Square};

/// Trait for types that render the state of a [`Game`][`crate::game::Game`].
#[cfg_attr(test, mockall::automock)]
pub trait Observer {
    /// Called after a move was applied to the [`Board`].
    fn board_changed(&mut self, _board: &Board) {}

    /// Called after a [`Square`] was selected or the selection was cleared.
    ///
    /// The destinations are the squares to highlight, empty if nothing is selected.
    fn selection_changed(&mut self, _whence: Option<Square>, _destinations: Bitboard) {}
}

/// Ignores all notifications.
impl Observer for () {}
