//! Row-bitmask board of allowed and forbidden cells
//!
//! Cell `(row, col)` lives at bit `width - 1 - col` of `rows[row]`, so the
//! leftmost column is the most significant bit of each row.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{Result, invalid_configuration};

/// Canonical board state used as the memoization key
///
/// Dimensions are fixed within one solve, so the row masks alone identify a board.
pub type BoardKey = Box<[u128]>;

/// Immutable grid of allowed cells, one bitmask per row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitBoard {
    height: usize,
    width: usize,
    rows: Vec<u128>,
}

impl BitBoard {
    /// Build a board with every cell allowed except the forbidden ones
    ///
    /// Forbidden cells have set semantics: duplicates and ordering do not matter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a dimension is zero or exceeds
    /// `MAX_BOARD_DIMENSION`, or if a forbidden cell lies outside the board
    pub fn new<I>(height: usize, width: usize, forbidden: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        let full = full_row(width);
        let mut rows = vec![full; height];

        for (row, col) in forbidden {
            if col >= width {
                return Err(invalid_configuration(
                    "forbidden",
                    &format!("({row}, {col})"),
                    &format!("column must be below width {width}"),
                ));
            }
            let Some(mask) = rows.get_mut(row) else {
                return Err(invalid_configuration(
                    "forbidden",
                    &format!("({row}, {col})"),
                    &format!("row must be below height {height}"),
                ));
            };
            *mask &= !column_bit(width, col);
        }

        Ok(Self {
            height,
            width,
            rows,
        })
    }

    /// Build a board from a mask where `true` marks an allowed cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the mask is empty along either axis
    /// or larger than `MAX_BOARD_DIMENSION`
    pub fn from_mask(mask: &Array2<bool>) -> Result<Self> {
        let (height, width) = mask.dim();
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        let rows = mask
            .rows()
            .into_iter()
            .map(|cells| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|&(_, &allowed)| allowed)
                    .fold(0, |acc, (col, _)| acc | column_bit(width, col))
            })
            .collect();

        Ok(Self {
            height,
            width,
            rows,
        })
    }

    /// Expand the board into a mask where `true` marks an allowed cell
    pub fn to_mask(&self) -> Array2<bool> {
        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            self.is_allowed(row, col)
        })
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Row bitmasks from top to bottom
    pub fn rows(&self) -> &[u128] {
        &self.rows
    }

    /// Test whether a cell is allowed; cells outside the board are not
    pub fn is_allowed(&self, row: usize, col: usize) -> bool {
        col < self.width
            && self
                .rows
                .get(row)
                .is_some_and(|&mask| mask & column_bit(self.width, col) != 0)
    }

    /// Number of allowed cells
    pub fn allowed_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Test whether no cell is allowed
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Coordinates of all allowed cells in row-major order
    pub fn allowed_cells(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_allowed(row, col))
            .collect()
    }

    /// Canonical memoization key
    pub fn key(&self) -> BoardKey {
        self.rows.clone().into_boxed_slice()
    }

    /// Copy of this board with a single cell forbidden
    ///
    /// `bit` is the 0-based bit index within the row mask.
    pub(crate) fn without_cell(&self, row: usize, bit: u32) -> Self {
        let mut derived = self.clone();
        if let Some(mask) = derived.rows.get_mut(row) {
            *mask &= !(1u128 << bit);
        }
        derived
    }

    /// Copy of this board with a whole row and a whole column forbidden
    ///
    /// Models a rook placed at `(row, bit)`.
    pub(crate) fn without_row_and_column(&self, row: usize, bit: u32) -> Self {
        let column = !(1u128 << bit);
        let mut derived = self.clone();
        for mask in &mut derived.rows {
            *mask &= column;
        }
        if let Some(mask) = derived.rows.get_mut(row) {
            *mask = 0;
        }
        derived
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", u8::from(self.is_allowed(row, col)))?;
            }
        }
        Ok(())
    }
}

/// Build a board from dimensions and a set of forbidden cells
///
/// # Errors
///
/// Returns `InvalidConfiguration` on invalid dimensions or out-of-range cells
pub fn build_board<I>(height: usize, width: usize, forbidden: I) -> Result<BitBoard>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    BitBoard::new(height, width, forbidden)
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_configuration(
            parameter,
            &value,
            &"must be positive",
        ));
    }
    if value > MAX_BOARD_DIMENSION {
        return Err(invalid_configuration(
            parameter,
            &value,
            &format!("must not exceed {MAX_BOARD_DIMENSION}"),
        ));
    }
    Ok(())
}

const fn full_row(width: usize) -> u128 {
    if width >= MAX_BOARD_DIMENSION {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

const fn column_bit(width: usize, col: usize) -> u128 {
    1u128 << (width - 1 - col)
}
