use crate::bitboard::BitBoard;
use crate::ship::ShipKind;

pub const ROWS: usize = 10;
pub const COLS: usize = 12;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order. Later ships are packed around earlier ones.
pub const SHIP_KINDS: [ShipKind; NUM_SHIPS] = [
    ShipKind::Mothership,
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::StealthShip,
    ShipKind::PatrolShip,
];

/// Number of hits needed to destroy the whole fleet.
pub const TOTAL_HITS: usize = 5 + 4 + 3 + 3 + 2;

/// Maximum number of hall-of-fame entries kept.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Rejection-sampling budget for a single ship placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Column labels, index = column.
pub const COLUMN_LETTERS: [char; COLS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L'];

#[cfg(feature = "std")]
pub const DEFAULT_HOF_FILE: &str = "battleship_hof.txt";

/// Bitboard covering the whole game board.
pub type BB = BitBoard<u128, ROWS, COLS>;

