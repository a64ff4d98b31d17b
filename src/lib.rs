//! A small and simple library for perfect-play tic-tac-toe.
//!
//! The engine is two pure functions over a 9-cell board snapshot:
//! [`outcome::evaluate`] classifies a position as won, drawn, or still in
//! progress, and [`search::best_move`] runs an exhaustive minimax over every
//! legal continuation and answers a move that provably never loses. Around
//! them, [`session::Session`] sequences turns, keeps the score tally, and
//! drives the engine as the `O` side, while [`score::ScoreStore`] persists
//! the tally between runs.
//!
//! # Example
//!
//! ```rust
//! use xo_minimax::board::{Board, Player};
//! use xo_minimax::outcome::{Outcome, evaluate};
//! use xo_minimax::search::best_move;
//!
//! let mut board = Board::new();
//! board.place(0, Player::X).unwrap();
//!
//! // Moving second against a free center, the engine takes it.
//! let reply = best_move(&board, Player::O).unwrap();
//! assert_eq!(reply, 4);
//!
//! board.place(reply, Player::O).unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! ```

/// Contains the board representation, the player marks, and the line table.
pub mod board;
/// Contains the outcome evaluator that classifies a board snapshot.
pub mod outcome;
/// Contains the score tally and its durable storage.
pub mod score;
/// The core module of the library: exhaustive minimax move selection.
pub mod search;
/// Contains the session controller that sequences turns over the engine.
pub mod session;
