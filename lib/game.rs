use crate::chess::{moves_from, Bitboard, Board, Color, Move, Piece, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

mod observer;
mod selection;

pub use observer::*;
pub use selection::*;

/// What a click on a [`Square`] did.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Click {
    /// A piece of the side to move was selected.
    #[display(fmt = "selected {}", _0)]
    Selected(Square),

    /// The selected piece was clicked again and released.
    #[display(fmt = "deselected {}", _0)]
    Deselected(Square),

    /// The selected piece was moved.
    #[display(fmt = "played {}", _0)]
    Moved(Move),

    /// Nothing happened.
    #[display(fmt = "ignored")]
    Ignored,
}

/// A game of chess between two players taking turns on the same [`Board`].
///
/// Moves are made by clicking squares: first the piece to move, then its
/// destination. The [`Observer`] is notified whenever something changes.
#[derive(Debug)]
pub struct Game<O: Observer = ()> {
    board: Board,
    selection: Selection,
    turn: Color,
    observer: O,
}

impl<O: Observer + Default> Default for Game<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: Observer> Game<O> {
    /// Starts a game from the initial position with White to move.
    pub fn new(observer: O) -> Self {
        Self::with_board(Board::initial(), Color::White, observer)
    }

    /// Starts a game from an arbitrary [`Board`].
    pub fn with_board(board: Board, turn: Color, observer: O) -> Self {
        Game {
            board,
            selection: Selection::Idle,
            turn,
            observer,
        }
    }

    /// The current [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.board[s]
    }

    /// The current [`Selection`].
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The [`Observer`].
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The [`Observer`], mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Restores the initial position with White to move.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.selection = Selection::Idle;
        self.turn = Color::White;

        info!(player = %self.turn, "new game");
        self.observer.board_changed(&self.board);
        self.observer.selection_changed(None, Bitboard::empty());
    }

    /// Handles a click on a [`Square`].
    ///
    /// * With nothing selected, clicking a piece of the side to move selects it.
    /// * Clicking the selected piece again releases it.
    /// * Clicking one of the selected piece's legal destinations plays the move
    ///   and passes the turn to the opponent.
    ///
    /// Any other click is ignored, in particular a selection is never switched
    /// over to another piece without first releasing it.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn), ret)]
    pub fn click(&mut self, s: Square) -> Click {
        match self.selection {
            Selection::Idle => match self.board[s] {
                Some(p) if p.color() == self.turn => {
                    let destinations = moves_from(&self.board, s);
                    self.selection = Selection::Active {
                        whence: s,
                        destinations,
                    };

                    self.observer.selection_changed(Some(s), destinations);
                    Click::Selected(s)
                }

                p => {
                    debug!(piece = ?p, "nothing to select");
                    Click::Ignored
                }
            },

            Selection::Active { whence, .. } if whence == s => {
                self.selection = Selection::Idle;
                self.observer.selection_changed(None, Bitboard::empty());
                Click::Deselected(s)
            }

            Selection::Active {
                whence,
                destinations,
            } if destinations.contains(s) => {
                let m = Move::new(whence, s);
                let captured = self.board.apply(m);

                self.selection = Selection::Idle;
                self.turn = !self.turn;

                info!(%m, ?captured, "move played");
                info!(player = %self.turn, "current player");

                self.observer.board_changed(&self.board);
                self.observer.selection_changed(None, Bitboard::empty());
                Click::Moved(m)
            }

            Selection::Active { destinations, .. } => {
                debug!(%destinations, "not a legal destination");
                Click::Ignored
            }
        }
    }
}
