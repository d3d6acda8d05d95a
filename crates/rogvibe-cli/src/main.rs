mod play;
mod render;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use rogvibe::{
    Config, Game, SearchPath, Session, SlotMachine, StdRandom, Wheel, default_participants,
    normalize_names,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rogvibe")]
#[command(about = "Spin a wheel to pick a coding agent, then launch it")]
struct Cli {
    /// Participants; defaults to the known tools found on PATH
    names: Vec<String>,

    /// Play the three-reel slot machine instead of the wheel
    #[arg(long)]
    slot: bool,

    /// Seed for reproducible spins
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the animation delays
    #[arg(long)]
    instant: bool,

    /// Spin once and run the winner without prompting
    #[arg(long)]
    once: bool,

    /// Print what would run instead of running it
    #[arg(long)]
    dry_run: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let mut rng = StdRandom::from_seed_opt(cli.seed.or(config.seed));

    let mut names = normalize_names(&cli.names);
    if names.is_empty() {
        names = default_participants(&config.candidates, &SearchPath::from_env(), &mut rng);
    }
    log::info!("participants: {:?}", names);

    let game = if cli.slot {
        Game::Slot(SlotMachine::with_easing(names, config.timing.reel))
    } else {
        let wheel = Wheel::with_easing(names, config.timing.wheel)?;
        if let Some(notice) = render::truncation_notice(&wheel.layout()) {
            eprintln!("{}", notice);
        }
        Game::Wheel(wheel)
    };

    let options = play::PlayOptions {
        once: cli.once,
        dry_run: cli.dry_run,
        instant: cli.instant,
    };
    let code = play::run(&mut Session::new(game), &mut rng, &options)?;
    Ok(ExitCode::from(code))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
