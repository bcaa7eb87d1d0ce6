//! One process worth of play: the hall of fame loaded once, and games
//! played against it.

use alloc::string::String;

use anyhow::anyhow;
use log::{info, warn};
use rand::Rng;

use crate::{
    game::{GameEngine, GameStatus},
    leaderboard::{misses_for_attempts, Entry, Leaderboard, LeaderboardStore},
    player::Player,
};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// `InProgress` when the player quit before sinking the fleet.
    pub status: GameStatus,
    pub attempts: usize,
    /// Leaderboard score; set only for won games.
    pub misses: Option<u32>,
    /// 0-based hall-of-fame rank, when the game earned one.
    pub rank: Option<usize>,
}

/// Hall of fame plus the store it was loaded from.
pub struct Session<S: LeaderboardStore> {
    leaderboard: Leaderboard,
    store: S,
}

impl<S: LeaderboardStore> Session<S> {
    /// Load the hall of fame from `store`. Unreadable data is logged and
    /// replaced by an empty board.
    pub fn open(mut store: S) -> Self {
        let leaderboard = match store.load() {
            Ok(entries) => Leaderboard::from_entries(entries),
            Err(e) => {
                warn!("could not load hall of fame, starting empty: {:#}", e);
                Leaderboard::new()
            }
        };
        Self { leaderboard, store }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether winning in `attempts` shots earns a hall-of-fame place.
    pub fn qualifies(&self, attempts: usize) -> bool {
        misses_for_attempts(attempts).is_some_and(|m| self.leaderboard.would_accept(m))
    }

    /// Record a won game of `attempts` shots. `name` is only called when
    /// the game earns a place; the board is saved straight after.
    pub fn submit<F>(&mut self, attempts: usize, name: F) -> anyhow::Result<Option<usize>>
    where
        F: FnOnce() -> String,
    {
        let Some(misses) = misses_for_attempts(attempts) else {
            return Ok(None);
        };
        if !self.leaderboard.would_accept(misses) {
            return Ok(None);
        }
        let rank = self.leaderboard.insert(Entry::new(misses, name()));
        if rank.is_some() {
            self.store.save(self.leaderboard.entries())?;
        }
        Ok(rank)
    }

    /// Play one game against a freshly generated fleet.
    pub fn play<P, R>(&mut self, player: &mut P, rng: &mut R) -> anyhow::Result<GameSummary>
    where
        P: Player + ?Sized,
        R: Rng + ?Sized,
    {
        let engine = GameEngine::random(rng).map_err(|e| anyhow!(e))?;
        self.play_against(player, engine)
    }

    /// Play one game against a prepared engine until the fleet is
    /// destroyed or the player quits.
    pub fn play_against<P>(
        &mut self,
        player: &mut P,
        mut engine: GameEngine,
    ) -> anyhow::Result<GameSummary>
    where
        P: Player + ?Sized,
    {
        loop {
            player.show_board(&engine.visible_grid());
            let Some((row, col)) = player.select_target() else {
                info!("game abandoned after {} attempts", engine.attempts());
                return Ok(GameSummary {
                    status: engine.status(),
                    attempts: engine.attempts(),
                    misses: None,
                    rank: None,
                });
            };
            let report = engine.resolve_shot(row, col).map_err(|e| anyhow!(e))?;
            player.handle_shot_result(&report);
            if report.fleet_destroyed {
                break;
            }
        }

        let attempts = engine.attempts();
        player.announce_victory(attempts, engine.accuracy(), self.qualifies(attempts));
        let rank = self.submit(attempts, || player.player_name())?;
        if rank.is_some() {
            player.show_hall_of_fame(self.leaderboard.entries());
        }
        Ok(GameSummary {
            status: engine.status(),
            attempts,
            misses: misses_for_attempts(attempts),
            rank,
        })
    }
}
