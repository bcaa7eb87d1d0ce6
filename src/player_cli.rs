#![cfg(feature = "std")]

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};

use crate::{
    coord::parse_target,
    game::{ShotOutcome, ShotReport},
    grid::{Grid, Mark},
    leaderboard::Entry,
    player::Player,
};

const INSTRUCTIONS: &str = "\
Instructions

Ships are positioned at fixed locations in a 10-by-12 grid.  \
The rows of the grid are labeled 0 through 9, and the columns are labeled A through L.  \
Use menu option \"2\" to see an example.  \
Target the ships by entering the row and column of the location you wish to shoot.  \
A ship is destroyed when all of the spaces it fills have been hit.  \
Try to destroy the fleet with as few shots as possible.  \
The fleet consists of the following 5 ships:

Size : Type
   5 : Mothership
   4 : Battleship
   3 : Destroyer
   3 : Stealth Ship
   2 : Patrol Ship
";

/// How to play, as shown from the main menu.
pub fn instructions() -> &'static str {
    INSTRUCTIONS
}

/// Hall-of-fame table with rank, centred name and accuracy.
pub fn hall_of_fame_table(entries: &[Entry]) -> String {
    const RULE: &str = "+------+-------------+----------+";
    let mut out = String::new();
    let _ = writeln!(out, "\nHall of Fame:\n{RULE}\n| Rank | Player Name | Accuracy |\n{RULE}");
    for (rank, entry) in entries.iter().enumerate() {
        let accuracy = format!("{:.2}", entry.accuracy() * 100.0);
        let _ = writeln!(out, "|{:>4}  |{:^13}|{:>8}% |", rank + 1, entry.name, accuracy);
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Print a grid with its row and column labels.
pub fn print_grid<T: crate::grid::GridSymbol>(grid: &Grid<T>) {
    println!("\n{}", grid);
}

pub fn print_instructions() {
    println!("{}", instructions());
}

pub fn print_hall_of_fame(entries: &[Entry]) {
    println!("{}", hall_of_fame_table(entries));
}

/// Human player on a text console. Reads from any `BufRead` so scripted
/// input works in tests.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    /// Prompt and read one trimmed line; `None` at end of input or on a
    /// failed read. A line that is not valid UTF-8 has already been
    /// consumed and comes back empty, so callers ask again.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.say(format_args!("{}", prompt));
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Some(String::new()),
            Err(e) => {
                log::warn!("reading input failed: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self) -> Option<(usize, usize)> {
        loop {
            let line = self.prompt("Where should we target next (q to quit)? ")?;
            if line.eq_ignore_ascii_case("q") {
                self.say(format_args!("\n"));
                return None;
            }
            match parse_target(&line) {
                Ok(target) => return Some(target),
                Err(e) => self.say(format_args!("{} Enter a location like \"6G\".\n\n", e)),
            }
        }
    }

    fn show_board(&mut self, view: &Grid<Mark>) {
        self.say(format_args!("\n{}\n", view));
    }

    fn handle_shot_result(&mut self, report: &ShotReport) {
        match report.outcome {
            ShotOutcome::AlreadyTargeted => {
                self.say(format_args!("You've already targeted that location\n"))
            }
            ShotOutcome::Miss => self.say(format_args!("\nmiss\n")),
            ShotOutcome::Hit(_) => self.say(format_args!("\nIT'S A HIT!\n")),
        }
        if let Some(kind) = report.destroyed {
            self.say(format_args!("The enemy's {} has been destroyed.\n", kind));
        }
    }

    fn announce_victory(&mut self, _attempts: usize, accuracy: f64, earned_place: bool) {
        self.say(format_args!(
            "\nYou've destroyed the enemy fleet!\n\
             Humanity has been saved from the threat of AI.\n\n\
             For now ...\n\n"
        ));
        if earned_place {
            self.say(format_args!(
                "Congratulations, you have achieved a targeting accuracy of\n\
                 {:.2}% and earned a spot in the Hall of Fame.\n",
                accuracy * 100.0
            ));
        } else {
            self.say(format_args!(
                "Your targeting accuracy was {:.2}%.\n\n",
                accuracy * 100.0
            ));
        }
    }

    fn player_name(&mut self) -> String {
        match self.prompt("Enter your name: ") {
            Some(name) if !name.is_empty() => name,
            _ => "Anonymous".to_string(),
        }
    }

    fn show_hall_of_fame(&mut self, entries: &[Entry]) {
        let table = hall_of_fame_table(entries);
        self.say(format_args!("{}\n", table));
    }
}
