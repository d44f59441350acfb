//! Tests for board file parsing, rendering and loading

#[cfg(test)]
mod tests {
    use rookpoly::io::board_file::{load_board, parse_board, render_board};
    use rookpoly::spatial::board::BitBoard;
    use rookpoly::{Result, RookError};
    use std::io::Write;

    // Tests glyphs, whitespace and comment lines are handled
    // Verified by treating comment lines as rows
    #[test]
    fn test_parse_board() -> Result<()> {
        let text = "// staircase\n. . #\n1 x .\n\n0 . .\n";
        let board = parse_board(text)?;
        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 3);
        assert_eq!(board, BitBoard::new(3, 3, [(0, 2), (1, 1), (2, 0)])?);
        Ok(())
    }

    // Tests ragged rows report the offending line
    // Verified by counting lines from zero
    #[test]
    fn test_ragged_rows() {
        let result = parse_board("...\n// note\n..\n");
        assert!(matches!(result, Err(RookError::BoardFormat { line: 3, .. })));
    }

    // Tests unknown glyphs are rejected
    // Verified by treating unknown glyphs as forbidden
    #[test]
    fn test_unknown_glyph() {
        let result = parse_board(".?.\n");
        match result {
            Err(RookError::BoardFormat { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains('?'));
            }
            _ => unreachable!("Expected BoardFormat error type"),
        }
    }

    // Tests files without rows are rejected
    // Verified by returning a 0x0 board
    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_board("// nothing here\n\n"),
            Err(RookError::BoardFormat { .. })
        ));
    }

    // Tests rendered boards parse back to the same board
    // Verified by swapping the glyphs in render_board
    #[test]
    fn test_render_board() -> Result<()> {
        let board = BitBoard::new(2, 3, [(0, 1), (1, 2)])?;
        let text = render_board(&board);
        assert_eq!(text, ".#.\n..#\n");
        assert_eq!(parse_board(&text)?, board);
        Ok(())
    }

    // Tests boards load from disk
    // Verified by ignoring the file contents
    #[test]
    fn test_load_board() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "#..")?;
        writeln!(file, "...")?;
        let board = load_board(file.path())?;
        assert_eq!(board, BitBoard::new(2, 3, [(0, 0)])?);
        Ok(())
    }

    // Tests missing files surface a file system error
    // Verified by mapping read failures to format errors
    #[test]
    fn test_missing_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let result = load_board(&dir.path().join("missing.txt"));
        assert!(matches!(
            result,
            Err(RookError::FileSystem {
                operation: "read board",
                ..
            })
        ));
        Ok(())
    }
}
