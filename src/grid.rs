//! Fixed-size 10×12 cell grid.

use core::fmt;

use crate::common::BoardError;
use crate::config::{COLS, COLUMN_LETTERS, ROWS};
use crate::ship::ShipKind;

/// Truth-grid cell: empty water or part of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship(ShipKind),
}

/// Visible-grid cell as the player sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unknown,
    Hit,
    Miss,
}

/// Character used when a grid is drawn.
pub trait GridSymbol {
    fn symbol(&self) -> char;
}

impl GridSymbol for Cell {
    fn symbol(&self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship(kind) => kind.symbol(),
        }
    }
}

impl GridSymbol for Mark {
    fn symbol(&self) -> char {
        match self {
            Mark::Unknown => '~',
            Mark::Hit => 'x',
            Mark::Miss => 'o',
        }
    }
}

/// Row-major `ROWS × COLS` grid with bounds-checked access.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [[T; COLS]; ROWS],
}

impl<T: Copy + Default> Grid<T> {
    /// Grid with every cell set to `T::default()`.
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); COLS]; ROWS],
        }
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Grid<T> {
    /// Grid whose cell `(row, col)` is `f(row, col)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            cells: core::array::from_fn(|r| core::array::from_fn(|c| f(r, c))),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, BoardError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), BoardError> {
        check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    /// Iterate `((row, col), value)` over every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &value)| ((r, c), value))
        })
    }
}

impl Grid<Cell> {
    /// Number of cells owned by `kind`.
    pub fn count(&self, kind: ShipKind) -> usize {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Ship(kind))
            .count()
    }
}

pub(crate) fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= ROWS || col >= COLS {
        Err(BoardError::OutOfBounds { row, col })
    } else {
        Ok(())
    }
}

/// Column header and one numbered line per row, cells two spaces apart.
impl<T: GridSymbol> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for letter in COLUMN_LETTERS {
            write!(f, "  {}", letter)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, "  {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: GridSymbol> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
