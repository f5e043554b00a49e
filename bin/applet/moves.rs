use crate::io::{Io, Pipe};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{moves, Board, Color};
use tokio::io::{empty, stdout};
use tracing::{info, instrument};

/// Lists the moves available to one side.
#[derive(Debug, Parser)]
pub struct Moves {
    /// The side to move.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,

    /// The piece placement in FEN notation [default: the initial position].
    placement: Option<Board>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let mut io = Pipe::new(stdout(), empty());
        let count = list(&mut io, &self.placement.unwrap_or_default(), self.turn).await?;
        info!(count, turn = %self.turn, "listed moves");
        Ok(())
    }
}

async fn list<T: Io>(io: &mut T, board: &Board, turn: Color) -> Result<usize, Anyhow> {
    let mut count = 0;

    for m in moves(board, turn) {
        io.send(&m.to_string()).await?;
        count += 1;
    }

    io.flush().await?;
    Ok(count)
}
