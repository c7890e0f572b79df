//! GoBotGo: a rules engine for two remote players taking turns at Go.
//!
//! The crate enforces legality, captures, turn order, finite stone
//! supplies and single-step repetition, scores finished (or unfinished)
//! boards, and serialises access to a match between concurrent players.
//!
//! ## Modules
//!
//! - [`constants`] - Match defaults and display characters
//! - [`board`] - Colors, positions, the board and group flood fill
//! - [`scoring`] - Territory attribution and board scores
//! - [`game`] - Per-match state machine for moves and passes
//! - [`turn`] - Turn gate granting alternating exclusive access
//! - [`snapshot`] - JSON view of a match
//! - [`wire`] - Decoding of `[x, y]` / `[]` move bodies
//! - [`registry`] - Pairing players into matches
//! - [`console`] - Text console for local play
//! - [`bot`] - Random player for demos
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use gobotgo::board::{Color, Move};
//! use gobotgo::game::GameState;
//!
//! let mut game = GameState::new(9, 40);
//! game.play(Move::new(Color::Black, 2, 2)).unwrap();
//! game.pass(Color::White).unwrap();
//!
//! let score = game.score();
//! println!("Black {} White {}", score.black, score.white);
//! ```

pub mod board;
pub mod bot;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod registry;
pub mod scoring;
pub mod snapshot;
pub mod turn;
pub mod wire;
