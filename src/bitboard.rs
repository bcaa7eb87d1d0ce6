//! Rectangular bitboards sized by const generics.
//!
//! Cells are packed row-major into an unsigned integer `T`: cell `(r, c)`
//! lives at bit `r * C + c`. The 10×12 game board needs 120 bits and so
//! uses `u128`. Nothing here allocates, so the module works under `no_std`.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// `R * C` does not fit in the backing integer.
    SizeTooLarge { cells: usize, capacity: usize },
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => write!(
                f,
                "board of {} cells does not fit in {} bits",
                cells, capacity
            ),
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// Set of cells on an `R`×`C` board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const R: usize, const C: usize> BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = R * C;

    fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// All cells of the board set.
    fn full_mask() -> T {
        if Self::CELLS >= Self::capacity() {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row < R && col < C {
            Ok(row * C + col)
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    fn bit(&self, idx: usize) -> bool {
        (self.bits >> idx) & T::one() == T::one()
    }

    /// Empty board. Does not check that `R * C` fits; see [`Self::try_new`].
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty board, or `SizeTooLarge` when `T` is too narrow for `R * C` cells.
    pub fn try_new() -> Result<Self, BitBoardError> {
        if Self::CELLS > Self::capacity() {
            return Err(BitBoardError::SizeTooLarge {
                cells: Self::CELLS,
                capacity: Self::capacity(),
            });
        }
        Ok(Self::new())
    }

    /// Board with exactly the given cells set.
    pub fn from_iter<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        cells.into_iter().try_fold(Self::new(), |mut board, (r, c)| {
            board.set(r, c)?;
            Ok(board)
        })
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(row, col)` is set; cells off the board never are.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        Self::index(row, col).is_ok_and(|idx| self.bit(idx))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(self.bit(Self::index(row, col)?))
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Set cells in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_, T, R, C> {
        SetBits {
            board: self,
            next: 0,
        }
    }
}

impl<T, const R: usize, const C: usize> Default for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row, `#` for set cells and `.` for clear ones.
impl<T, const R: usize, const C: usize> fmt::Display for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..C {
                let ch = if self.bit(r * C + c) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}> ({} set)", R, C, self.count_ones())?;
        fmt::Display::fmt(self, f)
    }
}

/// Iterator returned by [`BitBoard::iter_set_bits`].
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, R, C>,
    next: usize,
}

impl<T, const R: usize, const C: usize> Iterator for SetBits<'_, T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let cells = BitBoard::<T, R, C>::CELLS;
        let idx = (self.next..cells).find(|&i| self.board.bit(i))?;
        self.next = idx + 1;
        Some((idx / C, idx % C))
    }
}

impl<T, const R: usize, const C: usize> BitAnd for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const R: usize, const C: usize> BitOr for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl<T, const R: usize, const C: usize> BitOrAssign for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the board; bits past `R * C` stay clear.
impl<T, const R: usize, const C: usize> Not for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;

    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::full_mask(),
        }
    }
}
