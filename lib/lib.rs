/// Chess domain types.
pub mod chess;
/// Click-driven game controller.
pub mod game;
