//! Board size defaults and notation characters.
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9`: 9x9 board
//! - `board11x11` (default): 11x11 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! ```sh
//! cargo build                                              # 11x11 (default)
//! cargo build --no-default-features --features board19x19  # 19x19
//! ```
//!
//! Any size can still be requested at runtime through [`Grid::new`](crate::grid::Grid::new);
//! the feature only picks the size used by `Game::with_default_size`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board11x11")]
pub const N: usize = 11;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(feature = "board19x19")]
pub const N: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board11x11"),
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board11x11", feature = "board13x13"),
    all(feature = "board11x11", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of the 'board9x9', 'board11x11', 'board13x13', 'board19x19' features");

#[cfg(not(any(
    feature = "board9x9",
    feature = "board11x11",
    feature = "board13x13",
    feature = "board19x19",
)))]
compile_error!("Must enable exactly one board size feature, e.g. 'board11x11'");

/// Largest board size accepted on the command line.
pub const MAX_N: usize = 64;

// =============================================================================
// Notation
// =============================================================================

/// White stone.
pub const CHAR_WHITE: char = 'W';

/// Black stone.
pub const CHAR_BLACK: char = 'B';

/// Empty point.
pub const CHAR_EMPTY: char = ' ';

/// Left border written before every rendered row.
pub const ROW_PREFIX: &str = "| ";

/// Right border written after every rendered row.
pub const ROW_SUFFIX: &str = " |";
