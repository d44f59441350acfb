//! Detection of boards whose allowed cells form one solid rectangle

use crate::algorithm::bits::{find_lsb, find_msb, is_contiguous_block};
use crate::spatial::board::BitBoard;

/// Axis-aligned block of allowed cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    /// Number of columns in the block
    pub width: usize,
    /// Number of rows in the block
    pub height: usize,
}

/// Find the rectangle formed by all allowed cells, if they form one
///
/// Every non-empty row must carry the same contiguous span and the
/// non-empty rows must be consecutive. Fully forbidden rows may surround
/// the block.
pub fn find_rectangle(board: &BitBoard) -> Option<Rectangle> {
    let rows = board.rows();
    let first = rows.iter().position(|&row| row != 0)?;
    let last = rows.iter().rposition(|&row| row != 0)?;
    let span = *rows.get(first)?;

    if !is_contiguous_block(span) {
        return None;
    }
    if rows.get(first..=last)?.iter().any(|&row| row != span) {
        return None;
    }

    Some(Rectangle {
        width: (find_msb(span) - find_lsb(span) + 1) as usize,
        height: last - first + 1,
    })
}
