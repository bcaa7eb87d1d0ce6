use log::{debug, info};
use rand::Rng;

use crate::{
    common::BoardError,
    config::{BB, NUM_SHIPS, SHIP_KINDS, TOTAL_HITS},
    fleet::FleetBoard,
    grid::{self, Grid, Mark},
    ship::ShipKind,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// What a single shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell was already hit or missed; nothing changed except the
    /// attempt counter.
    AlreadyTargeted,
    Miss,
    Hit(ShipKind),
}

/// Full result of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub target: (usize, usize),
    pub outcome: ShotOutcome,
    /// Set on the shot that lands the last hit on a ship.
    pub destroyed: Option<ShipKind>,
    /// True once every ship is destroyed.
    pub fleet_destroyed: bool,
}

/// Single-player game against a hidden fleet.
///
/// Holds the truth board, the player's hits and misses (the visible grid),
/// the attempt count and one hit counter per ship kind.
pub struct GameEngine {
    fleet: FleetBoard,
    shot_hits: BB,
    shot_misses: BB,
    attempts: usize,
    hit_counts: [usize; NUM_SHIPS],
    status: GameStatus,
}

impl GameEngine {
    /// Start a game against `fleet` with nothing targeted yet.
    pub fn new(fleet: FleetBoard) -> Self {
        Self {
            fleet,
            shot_hits: BB::new(),
            shot_misses: BB::new(),
            attempts: 0,
            hit_counts: [0; NUM_SHIPS],
            status: GameStatus::InProgress,
        }
    }

    /// Start a game against a freshly generated fleet.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        FleetBoard::generate(rng).map(Self::new)
    }

    /// Fire at (row, col).
    ///
    /// Every in-bounds call counts as an attempt, including repeats of a
    /// cell already targeted. Out-of-bounds coordinates are rejected
    /// without touching any state.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotReport, BoardError> {
        grid::check_bounds(row, col)?;
        self.attempts += 1;

        let mut destroyed = None;
        let outcome = if (self.shot_hits | self.shot_misses).get(row, col)? {
            ShotOutcome::AlreadyTargeted
        } else {
            match self.fleet.ship_at(row, col)? {
                None => {
                    self.shot_misses.set(row, col)?;
                    ShotOutcome::Miss
                }
                Some(kind) => {
                    self.shot_hits.set(row, col)?;
                    let count = &mut self.hit_counts[kind.index()];
                    *count += 1;
                    if *count == kind.size() {
                        destroyed = Some(kind);
                    }
                    ShotOutcome::Hit(kind)
                }
            }
        };

        let fleet_destroyed = self.fleet_destroyed();
        if fleet_destroyed && self.status == GameStatus::InProgress {
            self.status = GameStatus::Won;
            info!("fleet destroyed after {} attempts", self.attempts);
        }
        debug!(
            "shot #{} at ({}, {}): {:?}, destroyed {:?}",
            self.attempts, row, col, outcome, destroyed
        );

        Ok(ShotReport {
            target: (row, col),
            outcome,
            destroyed,
            fleet_destroyed,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Shots fired so far, repeats included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Hits landed on `kind`.
    pub fn hits(&self, kind: ShipKind) -> usize {
        self.hit_counts[kind.index()]
    }

    /// Hit counters in fleet order.
    pub fn hit_counts(&self) -> [usize; NUM_SHIPS] {
        self.hit_counts
    }

    pub fn is_destroyed(&self, kind: ShipKind) -> bool {
        self.hits(kind) == kind.size()
    }

    /// True when every ship has taken as many hits as it has cells.
    pub fn fleet_destroyed(&self) -> bool {
        SHIP_KINDS.iter().all(|&kind| self.is_destroyed(kind))
    }

    pub fn total_hits(&self) -> usize {
        self.hit_counts.iter().sum()
    }

    /// Attempts that did not land a new hit.
    pub fn misses(&self) -> usize {
        self.attempts - self.total_hits()
    }

    /// Fraction of the fleet's cells needed per attempt so far, in `0..=1`.
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            TOTAL_HITS as f64 / self.attempts as f64
        }
    }

    /// What the player sees at (row, col).
    pub fn visible(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        grid::check_bounds(row, col)?;
        Ok(self.mark_at(row, col))
    }

    fn mark_at(&self, row: usize, col: usize) -> Mark {
        if self.shot_hits.contains(row, col) {
            Mark::Hit
        } else if self.shot_misses.contains(row, col) {
            Mark::Miss
        } else {
            Mark::Unknown
        }
    }

    /// Snapshot of the visible grid for rendering.
    pub fn visible_grid(&self) -> Grid<Mark> {
        Grid::from_fn(|r, c| self.mark_at(r, c))
    }

    /// Bitboard of cells hit so far.
    pub fn shot_hits(&self) -> BB {
        self.shot_hits
    }

    /// Bitboard of cells missed so far.
    pub fn shot_misses(&self) -> BB {
        self.shot_misses
    }

    /// The hidden fleet.
    pub fn fleet(&self) -> &FleetBoard {
        &self.fleet
    }
}
