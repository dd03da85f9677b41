//! gogrid: a minimal Go board engine.
//!
//! This crate tracks stone placement on a square board, alternates turns
//! between White and Black, and captures liberty-less groups after each move.
//! Captured stones are recolored to the capturing player's color rather than
//! removed from the board.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and notation characters
//! - [`grid`] - Points, colors and the square grid
//! - [`group`] - Group discovery and liberty checks
//! - [`game`] - Turn-taking and capture resolution
//! - [`notation`] - Text rendering and parsing of boards
//! - [`error`] - Error type shared by all of the above
//!
//! ## Example
//!
//! ```
//! use gogrid::game::Game;
//! use gogrid::grid::Color;
//!
//! let mut game = Game::new(11);
//! game.play(5, 5).unwrap();
//! assert_eq!(game.active_player(), Color::Black);
//! println!("{game}");
//! ```

pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod group;
pub mod notation;
