#![cfg(feature = "std")]

//! Plain-text hall-of-fame file.
//!
//! ```text
//! misses,name
//! 2,Ada
//! 5,Grace
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use log::warn;

use crate::leaderboard::{Entry, LeaderboardStore};

const HEADER: &str = "misses,name";

/// Hall of fame persisted to a file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse the file format, skipping the header line and blank lines.
/// Lines that do not hold `misses,name` are logged and dropped so the
/// remaining entries survive the next save.
pub fn parse_entries(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("skipping hall-of-fame line {}: {}", idx + 1, e),
        }
    }
    entries
}

fn parse_line(line: &str) -> anyhow::Result<Entry> {
    let (misses, name) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `misses,name`"))?;
    let misses: u32 = misses
        .trim()
        .parse()
        .with_context(|| format!("bad miss count {:?}", misses))?;
    Ok(Entry::new(misses, name))
}

/// Render entries in the file format.
pub fn format_entries(entries: &[Entry]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for entry in entries {
        let name: String = entry.name.chars().filter(|c| !c.is_control()).collect();
        out.push_str(&format!("{},{}\n", entry.misses, name));
    }
    out
}

impl LeaderboardStore for FileStore {
    fn load(&mut self) -> anyhow::Result<Vec<Entry>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(parse_entries(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("opening {}", self.path.display())),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> anyhow::Result<()> {
        let mut file = fs::File::create(&self.path)
            .with_context(|| format!("creating {}", self.path.display()))?;
        file.write_all(format_entries(entries).as_bytes())
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
