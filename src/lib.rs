//! Othello-Rust: an Othello (Reversi) rule engine and alpha-beta player.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, directions, weights and defaults
//! - [`board`] - Bordered board representation and coordinates
//! - [`rules`] - Move legality and move application
//! - [`game`] - Turn sequencing, passes and game end
//! - [`eval`] - Positional heuristic and final scoring
//! - [`search`] - Negamax with alpha-beta pruning
//! - [`playout`] - Seeded random play
//! - [`protocol`] - Text protocol front end
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::{Player, str_coord};
//! use othello_rust::game::Game;
//!
//! // Create a new game
//! let mut game = Game::new();
//!
//! // Ask the engine for Black's move and play it
//! let mv = game.request_ai_move(Player::Black, 3).unwrap();
//! game.make_move(mv, Player::Black).unwrap();
//! println!("Black played {}", str_coord(mv));
//! assert_eq!(game.current_player(), Some(Player::White));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod playout;
pub mod protocol;
pub mod rules;
pub mod search;

pub use error::GameError;
