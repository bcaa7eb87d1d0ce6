#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rogue_fleet::{
    init_logging, print_grid, print_hall_of_fame, print_instructions, CliPlayer, FileStore,
    FleetBoard, GameStatus, Session, DEFAULT_HOF_FILE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Destroy a rogue space fleet hidden on a 10x12 grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOF_FILE, help = "Hall of fame file")]
    hof_file: PathBuf,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Commands {
    /// Interactive main menu (the default).
    Menu,
    /// Start a game straight away.
    Play,
    /// Show an example fleet layout.
    Map,
    /// Show the hall of fame.
    Hof,
    /// Explain the rules.
    Instructions,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut session = Session::open(FileStore::new(cli.hof_file));
    let mut player = CliPlayer::stdio();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&mut session, &mut player, &mut rng)?,
        Commands::Play => play(&mut session, &mut player, &mut rng)?,
        Commands::Map => print_grid(FleetBoard::generate(&mut rng)?.grid()),
        Commands::Hof => print_hall_of_fame(session.leaderboard().entries()),
        Commands::Instructions => print_instructions(),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play<R: BufRead, W: Write>(
    session: &mut Session<FileStore>,
    player: &mut CliPlayer<R, W>,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let summary = session.play(player, rng)?;
    if summary.status == GameStatus::Won && summary.rank.is_none() {
        log::info!("won in {} attempts without a hall-of-fame place", summary.attempts);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_menu<R: BufRead, W: Write>(
    session: &mut Session<FileStore>,
    player: &mut CliPlayer<R, W>,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    println!();
    println!("{:^64}", "~ Welcome to Battleship! ~");
    println!();
    println!("ChatGPT has gone rogue and commandeered a space strike fleet.");
    println!("It's on a mission to take over the world.  We've located the");
    println!("stolen ships, but we need your superior intelligence to help");
    println!("destroy them before it's too late.");
    println!();

    loop {
        println!("Menu:");
        println!("  1 : Instructions");
        println!("  2 : View Example Map");
        println!("  3 : New Game");
        println!("  4 : Hall of Fame");
        println!("  5 : Quit");
        let Some(selection) = player.prompt("What would you like to do? ") else {
            break;
        };
        match selection.as_str() {
            "1" => print_instructions(),
            "2" => print_grid(FleetBoard::generate(rng)?.grid()),
            "3" => play(session, player, rng)?,
            "4" => print_hall_of_fame(session.leaderboard().entries()),
            "5" => {
                println!("\nGoodbye");
                break;
            }
            _ => println!("\nInvalid selection.  Please choose a number from the menu.\n"),
        }
    }
    Ok(())
}
