use alloc::string::String;

use crate::{
    game::ShotReport,
    grid::{Grid, Mark},
    leaderboard::Entry,
};

/// Interface implemented by whoever is doing the shooting: the console
/// front end, or a scripted player in tests and simulations.
pub trait Player {
    /// Choose the next target, or `None` to abandon the game.
    fn select_target(&mut self) -> Option<(usize, usize)>;

    /// Called before each target is selected with the visible grid.
    fn show_board(&mut self, _view: &Grid<Mark>) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _report: &ShotReport) {}

    /// The fleet is gone. `earned_place` tells whether the hall of fame
    /// will ask for a name next.
    fn announce_victory(&mut self, _attempts: usize, _accuracy: f64, _earned_place: bool) {}

    /// Name for the hall of fame; only asked when a place is earned.
    fn player_name(&mut self) -> String;

    /// Show the updated hall of fame after an insertion.
    fn show_hall_of_fame(&mut self, _entries: &[Entry]) {}
}
