//! Plain-text board files
//!
//! One line per board row. `.` or `1` marks an allowed cell and `#`, `x`, `X`
//! or `0` a forbidden one; spaces and tabs are ignored. Blank lines and lines
//! starting with `//` are skipped.

use std::path::Path;

use ndarray::Array2;

use crate::io::configuration::{ALLOWED_GLYPHS, COMMENT_PREFIX, FORBIDDEN_GLYPHS};
use crate::io::error::{Result, RookError, board_format_error};
use crate::spatial::board::BitBoard;

/// Parse a board from its text representation
///
/// # Errors
///
/// Returns `BoardFormat` for unknown glyphs, ragged rows or an empty file,
/// and `InvalidConfiguration` if the board exceeds the supported size
pub fn parse_board(text: &str) -> Result<BitBoard> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut height = 0;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let row = parse_row(line, line_number)?;
        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(board_format_error(
                    line_number,
                    &format!("expected {expected} cells, found {}", row.len()),
                ));
            }
            Some(_) => {}
        }
        cells.extend(row);
        height += 1;
    }

    let Some(width) = width else {
        return Err(board_format_error(0, &"board file contains no rows"));
    };

    let mask = Array2::from_shape_vec((height, width), cells)
        .map_err(|error| board_format_error(0, &error))?;
    BitBoard::from_mask(&mask)
}

/// Read and parse a board file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise any error of
/// [`parse_board`]
pub fn load_board(path: &Path) -> Result<BitBoard> {
    let text = std::fs::read_to_string(path).map_err(|source| RookError::FileSystem {
        path: path.to_path_buf(),
        operation: "read board",
        source,
    })?;
    parse_board(&text)
}

/// Render a board in the file format accepted by [`parse_board`]
pub fn render_board(board: &BitBoard) -> String {
    let mask = board.to_mask();
    let mut text = String::with_capacity(board.height() * (board.width() + 1));
    for row in mask.rows() {
        text.extend(row.iter().map(|&allowed| if allowed { '.' } else { '#' }));
        text.push('\n');
    }
    text
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .filter(|glyph| !glyph.is_whitespace())
        .map(|glyph| {
            if ALLOWED_GLYPHS.contains(&glyph) {
                Ok(true)
            } else if FORBIDDEN_GLYPHS.contains(&glyph) {
                Ok(false)
            } else {
                Err(board_format_error(
                    line_number,
                    &format!("unknown cell glyph '{glyph}'"),
                ))
            }
        })
        .collect()
}
