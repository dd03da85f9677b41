//! Text notation for boards.
//!
//! A board is written one line per row, each row framed as `| ... |` with one
//! character per point: `W` for White, `B` for Black and a space for an
//! empty point. An 11x11 board with a single White stone in the center:
//!
//! ```text
//! |             |
//! |             |
//! |             |
//! |             |
//! |             |
//! |      W      |
//! |             |
//! |             |
//! |             |
//! |             |
//! |             |
//! ```

use std::fmt;

use crate::constants::{CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE, ROW_PREFIX, ROW_SUFFIX};
use crate::error::GoError;
use crate::game::Game;
use crate::grid::{Color, Grid};

/// Notation character for a point's content.
pub fn color_char(color: Option<Color>) -> char {
    match color {
        Some(Color::White) => CHAR_WHITE,
        Some(Color::Black) => CHAR_BLACK,
        None => CHAR_EMPTY,
    }
}

/// Point content for a notation character, `None` if the character is not
/// part of the notation.
pub fn parse_char(ch: char) -> Option<Option<Color>> {
    match ch {
        CHAR_WHITE => Some(Some(Color::White)),
        CHAR_BLACK => Some(Some(Color::Black)),
        CHAR_EMPTY => Some(None),
        _ => None,
    }
}

/// Render the grid, rows joined by newlines, without a trailing newline.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(ROW_PREFIX)?;
            for point in row {
                write!(f, "{}", color_char(point.color()))?;
            }
            f.write_str(ROW_SUFFIX)?;
        }
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.grid(), f)
    }
}

/// Parse a board from newline-separated rows. See [`parse_rows`].
pub fn parse_board(text: &str) -> Result<Game, GoError> {
    let rows: Vec<&str> = text.lines().collect();
    parse_rows(&rows)
}

/// Parse a board from already split rows.
///
/// The `| ` and ` |` frame is optional on either side. The board must be
/// square. The player to move is the one with fewer stones on the board,
/// White on a tie. Captures are not resolved.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Game, GoError> {
    let size = rows.len();
    if size == 0 {
        return Err(GoError::MalformedBoard("no rows".to_string()));
    }

    let mut grid = Grid::new(size);
    for (r, raw) in rows.iter().enumerate() {
        let row = strip_frame(raw.as_ref());
        let len = row.chars().count();
        if len != size {
            return Err(GoError::MalformedBoard(format!(
                "row {r} has {len} columns, expected {size}"
            )));
        }
        for (c, ch) in row.chars().enumerate() {
            let color =
                parse_char(ch).ok_or(GoError::InvalidBoardCharacter { row: r, col: c, ch })?;
            grid.set(r, c, color)?;
        }
    }

    let white = grid.stone_count(Color::White);
    let black = grid.stone_count(Color::Black);
    let active = if white <= black { Color::White } else { Color::Black };
    tracing::debug!(size, white, black, %active, "parsed board");
    Ok(Game::from_grid(grid, active))
}

fn strip_frame(row: &str) -> &str {
    let row = row.strip_prefix(ROW_PREFIX).unwrap_or(row);
    row.strip_suffix(ROW_SUFFIX).unwrap_or(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let grid = Grid::new(3);
        assert_eq!(render(&grid), "|     |\n|     |\n|     |");
    }

    #[test]
    fn test_render_stones() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, Some(Color::White)).unwrap();
        grid.set(1, 2, Some(Color::Black)).unwrap();
        assert_eq!(render(&grid), "| W   |\n|   B |\n|     |");
    }

    #[test]
    fn test_parse_unframed_rows() {
        let game = parse_rows(&["W  ", " B ", "   "]).unwrap();
        assert_eq!(game.grid().get(0, 0).unwrap().color(), Some(Color::White));
        assert_eq!(game.grid().get(1, 1).unwrap().color(), Some(Color::Black));
        assert_eq!(game.grid().get(2, 2).unwrap().color(), None);
    }

    #[test]
    fn test_parse_half_framed_rows() {
        let game = parse_rows(&["| WB", "BW |"]).unwrap();
        assert_eq!(game.to_string(), "| WB |\n| BW |");
    }

    #[test]
    fn test_parse_render_is_stable() {
        let text = ["W B  ", " B   ", "     ", "WW   ", "    B"]
            .iter()
            .map(|row| format!("| {row} |"))
            .collect::<Vec<_>>()
            .join("\n");
        let game = parse_board(&text).unwrap();
        assert_eq!(game.to_string(), text);
    }

    #[test]
    fn test_parse_line_endings() {
        let game = parse_board("| W |\r\n").unwrap();
        assert_eq!(game.size(), 1);
        assert_eq!(game.grid().get(0, 0).unwrap().color(), Some(Color::White));

        let game = parse_board("| WB |\r\n|    |\n").unwrap();
        assert_eq!(game.to_string(), "| WB |\n|    |");
    }

    #[test]
    fn test_parse_unequal_rows() {
        let err = parse_board("| W   |\n| B  |\n|     |").unwrap_err();
        assert!(matches!(err, GoError::MalformedBoard(_)));
    }

    #[test]
    fn test_parse_not_square() {
        let err = parse_rows(&["WB", "BW", "  "]).unwrap_err();
        assert!(matches!(err, GoError::MalformedBoard(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_board("").unwrap_err(),
            GoError::MalformedBoard(_)
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = parse_rows(&["W ", " x"]).unwrap_err();
        assert_eq!(
            err,
            GoError::InvalidBoardCharacter {
                row: 1,
                col: 1,
                ch: 'x'
            }
        );
    }

    #[test]
    fn test_active_player_inference() {
        assert_eq!(
            parse_rows(&["WW ", "WB ", "   "]).unwrap().active_player(),
            Color::Black
        );
        assert_eq!(
            parse_rows(&["WB", "  "]).unwrap().active_player(),
            Color::White
        );
        assert_eq!(
            parse_rows(&["BB", "W "]).unwrap().active_player(),
            Color::White
        );
        assert_eq!(parse_rows(&["  ", "  "]).unwrap().active_player(), Color::White);
    }

    #[test]
    fn test_parse_does_not_capture() {
        let game = parse_rows(&[" B ", "BWB", " B "]).unwrap();
        assert_eq!(game.grid().get(1, 1).unwrap().color(), Some(Color::White));
        assert!(game.is_captured(1, 1).unwrap());
    }
}
