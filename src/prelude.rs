//! Commonly used types and utilities for ease of import.

pub use crate::{
    FleetBoard, GameEngine, GameStatus, Leaderboard, LeaderboardStore, Player, Session,
    ShipKind, ShotOutcome, ShotReport,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, FileStore};
