use crate::io::{Io, Pipe};
use crate::{options::Options, render::Renderer};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Move, Square};
use lib::game::Game;
use std::io::ErrorKind::UnexpectedEof;
use tokio::io::{stdin, stdout};
use tracing::{info, instrument, warn};

/// Two players taking turns on the same board.
///
/// Each line read from the standard input is one of:
///
/// * a square, e.g. `e2`, which clicks it;
/// * a move, e.g. `e2e4`, which clicks the origin then the destination;
/// * `new`, which starts over from the initial position;
/// * `show`, which draws the board again;
/// * `quit`, which ends the session.
#[derive(Debug, Default, Parser)]
pub struct Play {
    /// How the board is drawn, in RON notation, e.g. `(glyphs: false)`.
    #[clap(short, long, default_value_t)]
    options: Options,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let io = Pipe::new(stdout(), stdin());
        Server::new(io, self.options).run().await
    }
}

struct Server<T: Io> {
    game: Game<Renderer>,
    io: T,
}

impl<T: Io> Server<T> {
    fn new(io: T, options: Options) -> Self {
        Server {
            game: Game::new(Renderer::new(options, Board::initial())),
            io,
        }
    }

    async fn run(&mut self) -> Result<(), Anyhow> {
        loop {
            self.refresh().await?;
            self.io.flush().await.context("failed to flush the standard output")?;

            let line = match self.io.recv().await {
                Ok(line) => line,
                Err(e) if e.kind() == UnexpectedEof => {
                    info!("end of input");
                    break Ok(());
                }
                Err(e) => return Err(Anyhow::new(e).context("failed to read the standard input")),
            };

            match line.trim() {
                "" => continue,
                "quit" => break Ok(()),
                "new" => self.game.reset(),
                "show" => {
                    let frame = self.game.observer().render();
                    self.draw(frame).await?;
                }

                cmd => {
                    if let Ok(s) = cmd.parse::<Square>() {
                        self.game.click(s);
                    } else if let Ok(m) = cmd.parse::<Move>() {
                        self.game.click(m.whence());
                        self.game.click(m.whither());
                    } else {
                        warn!(cmd, "ignored unrecognized command");
                    }
                }
            }
        }
    }

    /// Sends the board if it changed.
    async fn refresh(&mut self) -> Result<(), Anyhow> {
        match self.game.observer_mut().take() {
            Some(frame) => self.draw(frame).await,
            None => Ok(()),
        }
    }

    async fn draw(&mut self, frame: String) -> Result<(), Anyhow> {
        self.io.send(&frame).await?;
        self.io.send(&format!("{} to move", self.game.turn())).await?;
        Ok(())
    }
}
