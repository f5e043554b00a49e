use crate::options::Options;
use lib::chess::{Bitboard, Board, File, Rank, Square};
use lib::game::Observer;
use std::fmt::{self, Write};
use tracing::trace;

/// Draws the board on the terminal whenever the game changes.
#[derive(Debug)]
pub struct Renderer {
    options: Options,
    board: Board,
    whence: Option<Square>,
    destinations: Bitboard,
    dirty: bool,
}

impl Renderer {
    pub fn new(options: Options, board: Board) -> Self {
        Renderer {
            options,
            board,
            whence: None,
            destinations: Bitboard::empty(),
            dirty: true,
        }
    }

    /// Returns a fresh drawing if anything changed since the last call.
    pub fn take(&mut self) -> Option<String> {
        if std::mem::take(&mut self.dirty) {
            Some(self.render())
        } else {
            None
        }
    }

    /// Draws the board regardless of whether anything changed.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        // Writing to a String never fails.
        let _ = self.draw(&mut buffer);
        buffer
    }

    fn draw<W: Write>(&self, w: &mut W) -> fmt::Result {
        let border = "   +---+---+---+---+---+---+---+---+";

        write!(w, "   ")?;
        for file in File::iter() {
            write!(w, "  {} ", file)?;
        }

        writeln!(w)?;
        writeln!(w, "{}", border)?;

        for rank in Rank::iter() {
            write!(w, " {} |", rank)?;

            for file in File::iter() {
                let s = Square::new(rank, file);
                let hint = self.options.hints && self.destinations.contains(s);

                let piece = match self.board[s] {
                    None if hint => "·".to_string(),
                    None => " ".to_string(),
                    Some(p) if self.options.glyphs => format!("{:#}", p),
                    Some(p) => p.to_string(),
                };

                match (self.whence == Some(s), hint) {
                    (true, _) => write!(w, "[{}]|", piece)?,
                    (false, true) if self.board[s].is_some() => write!(w, "({})|", piece)?,
                    _ => write!(w, " {} |", piece)?,
                }
            }

            writeln!(w, " {}", rank)?;
            writeln!(w, "{}", border)?;
        }

        write!(w, "   ")?;
        for file in File::iter() {
            write!(w, "  {} ", file)?;
        }

        Ok(())
    }
}

impl Observer for Renderer {
    fn board_changed(&mut self, board: &Board) {
        trace!(placement = %board.placement(), "board changed");
        self.board = *board;
        self.dirty = true;
    }

    fn selection_changed(&mut self, whence: Option<Square>, destinations: Bitboard) {
        trace!(?whence, %destinations, "selection changed");
        self.whence = whence;
        self.destinations = destinations;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::moves_from;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[proptest]
    fn renders_like_the_board_diagram_when_nothing_is_selected(hints: bool) {
        let options = Options {
            glyphs: false,
            hints,
        };

        let renderer = Renderer::new(options, Board::initial());
        assert_eq!(renderer.render(), Board::initial().to_string());
    }

    #[proptest]
    fn renders_glyphs_like_the_alternate_board_diagram(hints: bool) {
        let options = Options { glyphs: true, hints };
        let renderer = Renderer::new(options, Board::initial());
        assert_eq!(renderer.render(), format!("{:#}", Board::initial()));
    }

    #[test]
    fn take_returns_a_drawing_only_after_changes() {
        let mut renderer = Renderer::new(Options::default(), Board::initial());
        assert!(renderer.take().is_some());
        assert!(renderer.take().is_none());

        renderer.selection_changed(None, Bitboard::empty());
        assert!(renderer.take().is_some());
        assert!(renderer.take().is_none());

        renderer.board_changed(&Board::empty());
        assert_eq!(renderer.take(), Some(renderer.render()));
    }

    #[test]
    fn selected_square_and_destinations_are_marked() {
        let options = Options {
            glyphs: false,
            hints: true,
        };

        let board = Board::initial();
        let mut renderer = Renderer::new(options, board);
        renderer.selection_changed(Some(sq("e2")), moves_from(&board, sq("e2")));

        let drawing = renderer.render();
        let lines: Vec<_> = drawing.lines().collect();
        assert_eq!(lines[10], " 4 |   |   |   |   | · |   |   |   | 4");
        assert_eq!(lines[12], " 3 |   |   |   |   | · |   |   |   | 3");
        assert_eq!(lines[14], " 2 | P | P | P | P |[P]| P | P | P | 2");
    }

    #[test]
    fn capturable_pieces_are_marked() {
        let options = Options {
            glyphs: false,
            hints: true,
        };

        let board: Board = "8/8/8/8/3p4/4P3/8/8".parse().unwrap();
        let mut renderer = Renderer::new(options, board);
        renderer.selection_changed(Some(sq("e3")), moves_from(&board, sq("e3")));

        let drawing = renderer.render();
        let lines: Vec<_> = drawing.lines().collect();
        assert_eq!(lines[10], " 4 |   |   |   |(p)| · |   |   |   | 4");
    }

    #[test]
    fn hints_can_be_disabled() {
        let options = Options {
            glyphs: false,
            hints: false,
        };

        let board = Board::initial();
        let mut renderer = Renderer::new(options, board);
        renderer.selection_changed(Some(sq("e2")), moves_from(&board, sq("e2")));

        let drawing = renderer.render();
        assert!(!drawing.contains('·'));
        assert!(drawing.contains("[P]"));
    }
}
