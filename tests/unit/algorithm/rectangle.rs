//! Tests for solid rectangle detection on row masks

#[cfg(test)]
mod tests {
    use rookpoly::Result;
    use rookpoly::algorithm::rectangle::{Rectangle, find_rectangle};
    use rookpoly::spatial::board::BitBoard;

    fn frame_cells(height: usize, width: usize) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..height {
            for col in 0..width {
                if row == 0 || row == height - 1 || col == 0 || col == width - 1 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    // Tests a full board is one rectangle of its own size
    // Verified by swapping width and height in the result
    #[test]
    fn test_full_board() -> Result<()> {
        let board = BitBoard::new(2, 5, [])?;
        assert_eq!(
            find_rectangle(&board),
            Some(Rectangle {
                width: 5,
                height: 2
            })
        );
        Ok(())
    }

    // Tests a block surrounded by forbidden rows and columns is detected
    // Verified by measuring height from row 0 instead of the first non-empty row
    #[test]
    fn test_embedded_block() -> Result<()> {
        let board = BitBoard::new(4, 5, frame_cells(4, 5))?;
        assert_eq!(
            find_rectangle(&board),
            Some(Rectangle {
                width: 3,
                height: 2
            })
        );
        Ok(())
    }

    // Tests a row with a gap is rejected
    // Verified by skipping the contiguity check
    #[test]
    fn test_gapped_row_rejected() -> Result<()> {
        let board = BitBoard::new(2, 3, [(0, 1), (1, 1)])?;
        assert_eq!(find_rectangle(&board), None);
        Ok(())
    }

    // Tests identical spans separated by an empty row are rejected
    // Verified by only comparing the distinct non-zero row values
    #[test]
    fn test_split_rows_rejected() -> Result<()> {
        let board = BitBoard::new(3, 2, [(1, 0), (1, 1)])?;
        assert_eq!(find_rectangle(&board), None);
        Ok(())
    }

    // Tests rows with different spans are rejected
    // Verified by comparing only popcounts of rows
    #[test]
    fn test_different_spans_rejected() -> Result<()> {
        let board = BitBoard::new(2, 3, [(0, 0), (1, 2)])?;
        assert_eq!(find_rectangle(&board), None);
        Ok(())
    }

    // Tests a fully forbidden board has no rectangle
    // Verified by reporting a zero-sized rectangle
    #[test]
    fn test_empty_board() -> Result<()> {
        let board = BitBoard::new(2, 2, [(0, 0), (0, 1), (1, 0), (1, 1)])?;
        assert_eq!(find_rectangle(&board), None);
        Ok(())
    }

    // Tests a single column strip is a rectangle of width one
    // Verified by computing width from popcount of the whole board
    #[test]
    fn test_column_strip() -> Result<()> {
        let board = BitBoard::new(3, 3, [(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)])?;
        assert_eq!(
            find_rectangle(&board),
            Some(Rectangle {
                width: 1,
                height: 3
            })
        );
        Ok(())
    }
}
