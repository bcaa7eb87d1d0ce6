//! The hidden "truth" board holding the enemy fleet.

use log::info;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BB, NUM_SHIPS, SHIP_KINDS};
use crate::grid::{Cell, Grid};
use crate::placement::{is_clear, place_ship, stamp};
use crate::ship::{Placement, ShipKind};

/// Truth grid plus the placement of every ship on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FleetBoard {
    grid: Grid<Cell>,
    placements: [Placement; NUM_SHIPS],
}

impl FleetBoard {
    /// Place the five ships at random, Mothership first and Patrol Ship
    /// last, each against the cells left free by the ones before it.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut grid = Grid::new();
        let mothership = place_ship(&mut grid, ShipKind::Mothership, rng)?;
        let battleship = place_ship(&mut grid, ShipKind::Battleship, rng)?;
        let destroyer = place_ship(&mut grid, ShipKind::Destroyer, rng)?;
        let stealth = place_ship(&mut grid, ShipKind::StealthShip, rng)?;
        let patrol = place_ship(&mut grid, ShipKind::PatrolShip, rng)?;
        info!("enemy fleet generated");
        Ok(Self {
            grid,
            placements: [mothership, battleship, destroyer, stealth, patrol],
        })
    }

    /// Build a board from an explicit layout, one placement per kind in
    /// any order.
    pub fn from_placements(placements: [Placement; NUM_SHIPS]) -> Result<Self, BoardError> {
        let mut ordered = placements;
        ordered.sort_unstable_by_key(|p| p.kind().index());
        if let Some(pair) = ordered.windows(2).find(|w| w[0].kind() == w[1].kind()) {
            return Err(BoardError::DuplicateShip(pair[0].kind()));
        }

        let mut grid = Grid::new();
        for placement in &ordered {
            if !is_clear(&grid, placement)? {
                return Err(BoardError::ShipOverlaps);
            }
            stamp(&mut grid, placement)?;
        }
        Ok(Self {
            grid,
            placements: ordered,
        })
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<ShipKind>, BoardError> {
        Ok(match self.grid.get(row, col)? {
            Cell::Empty => None,
            Cell::Ship(kind) => Some(kind),
        })
    }

    pub fn placement(&self, kind: ShipKind) -> &Placement {
        &self.placements[kind.index()]
    }

    /// Placements in fleet order.
    pub fn placements(&self) -> &[Placement; NUM_SHIPS] {
        &self.placements
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        SHIP_KINDS
            .iter()
            .fold(BB::new(), |acc, &kind| acc | self.placement(kind).mask())
    }
}
