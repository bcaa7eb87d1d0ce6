#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
pub mod coord;
mod fleet;
mod game;
mod grid;
mod leaderboard;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod store;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use coord::{column_index, column_letter, parse_target};
pub use fleet::*;
pub use game::*;
pub use grid::{Cell, Grid, GridSymbol, Mark};
pub use leaderboard::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from, DEFAULT_LOG_LEVEL, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use store::FileStore;
