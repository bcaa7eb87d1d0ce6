//! Hall of fame: the ten best games ranked by fewest misses.

use alloc::string::String;
use alloc::vec::Vec;

use log::info;

use crate::config::{LEADERBOARD_CAPACITY, TOTAL_HITS};

/// One hall-of-fame line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub misses: u32,
    pub name: String,
}

impl Entry {
    pub fn new(misses: u32, name: impl Into<String>) -> Self {
        Self {
            misses,
            name: name.into(),
        }
    }

    /// Hits over attempts for the recorded game, in `0..=1`.
    pub fn accuracy(&self) -> f64 {
        TOTAL_HITS as f64 / (TOTAL_HITS as f64 + self.misses as f64)
    }
}

/// Misses scored by a won game, or `None` if `attempts` is below the
/// number of hits needed to sink the fleet.
pub fn misses_for_attempts(attempts: usize) -> Option<u32> {
    attempts
        .checked_sub(TOTAL_HITS)
        .and_then(|misses| u32::try_from(misses).ok())
}

/// Entries kept in ascending order of misses, oldest first among ties,
/// never more than [`LEADERBOARD_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank arbitrary entries, keeping the best ten. Equal misses keep
    /// their given order.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.misses);
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= LEADERBOARD_CAPACITY
    }

    /// Whether a game with `misses` would earn a place.
    pub fn would_accept(&self, misses: u32) -> bool {
        match self.entries.last() {
            Some(worst) if self.is_full() => worst.misses > misses,
            _ => true,
        }
    }

    /// Insert `entry` at its rank, returning the 0-based rank, or `None`
    /// when the board is full and the entry does not beat the worst one.
    ///
    /// A full board drops its worst entry to make room. Among equal
    /// misses the newcomer ranks last.
    pub fn insert(&mut self, entry: Entry) -> Option<usize> {
        if !self.would_accept(entry.misses) {
            return None;
        }
        if self.is_full() {
            self.entries.truncate(LEADERBOARD_CAPACITY - 1);
        }
        let rank = self.entries.partition_point(|e| e.misses <= entry.misses);
        info!("{} enters the hall of fame at rank {}", entry.name, rank + 1);
        self.entries.insert(rank, entry);
        Some(rank)
    }
}

/// Load/save boundary for the hall of fame.
pub trait LeaderboardStore {
    /// Entries in rank order; an empty list when nothing was saved yet.
    fn load(&mut self) -> anyhow::Result<Vec<Entry>>;

    /// Replace whatever was stored with `entries`.
    fn save(&mut self, entries: &[Entry]) -> anyhow::Result<()>;
}

/// Store kept in memory, for tests and `no_std` targets.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries, saves: 0 }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&mut self) -> anyhow::Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> anyhow::Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}
