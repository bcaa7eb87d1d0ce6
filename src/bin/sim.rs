use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use rogue_fleet::{
    init_logging, GameStatus, MemoryStore, Player, Session, ShipKind, ShotReport, COLS, ROWS,
};
use serde_json::json;

/// Fires at every cell once, in a shuffled order.
struct SweepPlayer {
    targets: Vec<(usize, usize)>,
    destroyed: Vec<ShipKind>,
}

impl SweepPlayer {
    fn new(rng: &mut SmallRng) -> Self {
        let mut targets: Vec<_> = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .collect();
        targets.shuffle(rng);
        // popped from the back
        targets.reverse();
        Self {
            targets,
            destroyed: Vec::new(),
        }
    }
}

impl Player for SweepPlayer {
    fn select_target(&mut self) -> Option<(usize, usize)> {
        self.targets.pop()
    }

    fn handle_shot_result(&mut self, report: &ShotReport) {
        if let Some(kind) = report.destroyed {
            self.destroyed.push(kind);
        }
    }

    fn player_name(&mut self) -> String {
        "sim".to_string()
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut fleet_rng = SmallRng::seed_from_u64(seed);
    let mut shot_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut player = SweepPlayer::new(&mut shot_rng);
    let mut session = Session::open(MemoryStore::new());

    let summary = session.play(&mut player, &mut fleet_rng)?;
    if summary.status != GameStatus::Won {
        anyhow::bail!("sweep ended without destroying the fleet");
    }

    let result = json!({
        "seed": seed,
        "attempts": summary.attempts,
        "misses": summary.misses,
        "accuracy": rogue_fleet::TOTAL_HITS as f64 / summary.attempts as f64,
        "destroyed_order": player.destroyed,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
