//! Random ship placement by rejection sampling.
//!
//! Every attempt draws a fresh orientation and anchor, discards the
//! candidate if any cell falls off the board or is already occupied, and
//! otherwise stamps the ship onto the truth grid. Attempts are capped so a
//! pathological board surfaces as `PlacementFailed` instead of spinning.

use log::debug;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{COLS, MAX_PLACEMENT_ATTEMPTS, ROWS};
use crate::grid::{Cell, Grid};
use crate::ship::{Placement, ShipKind};

/// Sample a non-overlapping placement for `kind` on `grid`.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid<Cell>,
    kind: ShipKind,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    random_placement_with_budget(grid, kind, rng, MAX_PLACEMENT_ATTEMPTS)
}

/// Like [`random_placement`] but gives up after `max_attempts` draws.
pub fn random_placement_with_budget<R: Rng + ?Sized>(
    grid: &Grid<Cell>,
    kind: ShipKind,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Placement, BoardError> {
    let orientations = kind.orientations();
    for attempt in 1..=max_attempts {
        let orientation = if orientations.len() > 1 {
            orientations[rng.random_range(0..orientations.len())]
        } else {
            orientations[0]
        };
        let col = rng.random_range(0..COLS);
        let row = rng.random_range(0..ROWS);

        let placement = match Placement::new(kind, orientation, row, col) {
            Ok(p) => p,
            Err(BoardError::ShipOutOfBounds) => continue,
            Err(e) => return Err(e),
        };
        if is_clear(grid, &placement)? {
            debug!(
                "placed {} at ({}, {}) {:?} after {} attempt(s)",
                kind, row, col, orientation, attempt
            );
            return Ok(placement);
        }
    }
    Err(BoardError::PlacementFailed {
        kind,
        attempts: max_attempts,
    })
}

/// True when every cell of `placement` is still empty water.
pub fn is_clear(grid: &Grid<Cell>, placement: &Placement) -> Result<bool, BoardError> {
    for (r, c) in placement.cells() {
        if grid.get(r, c)? != Cell::Empty {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Mark every cell of `placement` with its ship kind.
pub fn stamp(grid: &mut Grid<Cell>, placement: &Placement) -> Result<(), BoardError> {
    for (r, c) in placement.cells() {
        grid.set(r, c, Cell::Ship(placement.kind()))?;
    }
    Ok(())
}

/// Sample a placement for `kind` and stamp it onto `grid`.
pub fn place_ship<R: Rng + ?Sized>(
    grid: &mut Grid<Cell>,
    kind: ShipKind,
    rng: &mut R,
) -> Result<Placement, BoardError> {
    let placement = random_placement(grid, kind, rng)?;
    stamp(grid, &placement)?;
    Ok(placement)
}
