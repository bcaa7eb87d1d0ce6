//! Ship kinds, their shape templates, and placements on the board.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BB, COLS, ROWS};

/// Relative `(Δrow, Δcol)` from a ship's anchor cell.
pub type Offset = (isize, isize);

const MOTHERSHIP: [Offset; 5] = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];
const BATTLESHIP: [Offset; 4] = [(0, 0), (0, 1), (1, 1), (1, 0)];
const DESTROYER_RIGHT: [Offset; 3] = [(0, 0), (1, 1), (2, 0)];
const DESTROYER_DOWN: [Offset; 3] = [(0, 0), (0, 2), (1, 1)];
const DESTROYER_LEFT: [Offset; 3] = [(0, 0), (1, -1), (2, 0)];
const DESTROYER_UP: [Offset; 3] = [(0, 0), (-1, 1), (0, 2)];
const STEALTH_HORIZONTAL: [Offset; 3] = [(0, 0), (0, 1), (0, 2)];
const STEALTH_VERTICAL: [Offset; 3] = [(0, 0), (1, 0), (2, 0)];
const PATROL_HORIZONTAL: [Offset; 2] = [(0, 0), (0, 1)];
const PATROL_VERTICAL: [Offset; 2] = [(0, 0), (1, 0)];

/// Orientation of a ship template.
///
/// Mothership and Battleship only come in `Fixed`. The Destroyer's bent
/// shape points `Right`, `Down`, `Left` or `Up`; the straight ships are
/// `Horizontal` or `Vertical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Fixed,
    Right,
    Down,
    Left,
    Up,
    Horizontal,
    Vertical,
}

/// One of the five fixed fleet classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Mothership,
    Battleship,
    Destroyer,
    StealthShip,
    PatrolShip,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Mothership => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::StealthShip => 3,
            ShipKind::PatrolShip => 2,
        }
    }

    /// Position of the kind in placement order.
    pub const fn index(self) -> usize {
        match self {
            ShipKind::Mothership => 0,
            ShipKind::Battleship => 1,
            ShipKind::Destroyer => 2,
            ShipKind::StealthShip => 3,
            ShipKind::PatrolShip => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Mothership => "Mothership",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::StealthShip => "Stealth Ship",
            ShipKind::PatrolShip => "Patrol Ship",
        }
    }

    /// Single-letter marker used on the truth grid.
    pub const fn symbol(self) -> char {
        match self {
            ShipKind::Mothership => 'M',
            ShipKind::Battleship => 'B',
            ShipKind::Destroyer => 'D',
            ShipKind::StealthShip => 'S',
            ShipKind::PatrolShip => 'P',
        }
    }

    /// Orientations the kind may be placed in.
    pub const fn orientations(self) -> &'static [Orientation] {
        match self {
            ShipKind::Mothership | ShipKind::Battleship => &[Orientation::Fixed],
            ShipKind::Destroyer => &[
                Orientation::Right,
                Orientation::Down,
                Orientation::Left,
                Orientation::Up,
            ],
            ShipKind::StealthShip | ShipKind::PatrolShip => {
                &[Orientation::Horizontal, Orientation::Vertical]
            }
        }
    }

    /// Cell offsets of the kind in `orientation`, or `None` if the kind
    /// cannot take that orientation.
    pub fn template(self, orientation: Orientation) -> Option<&'static [Offset]> {
        use Orientation::*;
        let offsets: &'static [Offset] = match (self, orientation) {
            (ShipKind::Mothership, Fixed) => &MOTHERSHIP,
            (ShipKind::Battleship, Fixed) => &BATTLESHIP,
            (ShipKind::Destroyer, Right) => &DESTROYER_RIGHT,
            (ShipKind::Destroyer, Down) => &DESTROYER_DOWN,
            (ShipKind::Destroyer, Left) => &DESTROYER_LEFT,
            (ShipKind::Destroyer, Up) => &DESTROYER_UP,
            (ShipKind::StealthShip, Horizontal) => &STEALTH_HORIZONTAL,
            (ShipKind::StealthShip, Vertical) => &STEALTH_VERTICAL,
            (ShipKind::PatrolShip, Horizontal) => &PATROL_HORIZONTAL,
            (ShipKind::PatrolShip, Vertical) => &PATROL_VERTICAL,
            _ => return None,
        };
        Some(offsets)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship kind stamped at an anchor cell in a given orientation.
///
/// Construction guarantees every cell lies on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    kind: ShipKind,
    orientation: Orientation,
    row: usize,
    col: usize,
    offsets: &'static [Offset],
    mask: BB,
}

impl Placement {
    /// Anchor `kind` at (`row`, `col`) with `orientation`.
    pub fn new(
        kind: ShipKind,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let offsets = kind
            .template(orientation)
            .ok_or(BoardError::UnsupportedOrientation)?;
        let fits = offsets.iter().all(|&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            (0..ROWS as isize).contains(&r) && (0..COLS as isize).contains(&c)
        });
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut placement = Placement {
            kind,
            orientation,
            row,
            col,
            offsets,
            mask: BB::new(),
        };
        placement.mask = BB::from_iter(placement.cells())?;
        Ok(placement)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor cell (row, col) the offsets are measured from.
    pub fn anchor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Board cells covered by the ship, in template order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + 'static {
        let (row, col) = (self.row as isize, self.col as isize);
        self.offsets
            .iter()
            .map(move |&(dr, dc)| ((row + dr) as usize, (col + dc) as usize))
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ kind: {:?}, anchor: ({}, {}), orientation: {:?} }}",
            self.kind, self.row, self.col, self.orientation,
        )
    }
}
