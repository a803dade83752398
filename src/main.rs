//! Console entry point.
//!
//! Configuration is layered: defaults, then `FORTUNE_DICTIONARY` /
//! `FORTUNE_SEED`, then command-line flags.
//!
//! ```bash
//! fortune-wheel --dictionary words.txt --seed 42
//! RUST_LOG=fortune_wheel=debug fortune-wheel
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fortune_wheel::core::{WHEEL_STREAM, WORD_STREAM};
use fortune_wheel::{
    seat_players, ConsoleAnnouncer, ConsolePrompter, Dictionary, GameConfig, GameRng, GameSession,
    PromptError, RandomWords, ValueWheel,
};

#[derive(Parser)]
#[command(name = "fortune-wheel")]
#[command(about = "Spin the wheel, guess the letters, solve the word")]
#[command(version)]
struct Cli {
    /// Line-delimited word list
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Seed for a replayable game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let mut config = GameConfig::from_env();
    if let Some(path) = cli.dictionary {
        config.dictionary_path = path;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    let dictionary = Dictionary::load(&config.dictionary_path).context("cannot start a game")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "session seed");
    let rng = GameRng::new(seed);
    let wheel = ValueWheel::new(&config.wheel, rng.for_context(WHEEL_STREAM))?;
    let words = RandomWords::new(dictionary, rng.for_context(WORD_STREAM));

    let mut prompter = ConsolePrompter::stdio();
    let mut announcer = ConsoleAnnouncer::stdout();

    let outcome = seat_players(&config, &mut prompter, &mut announcer).and_then(|table| {
        GameSession::new(table, wheel, words).run(&mut prompter, &mut announcer)
    });

    match outcome {
        Ok(_) => Ok(()),
        Err(PromptError::Closed) => {
            info!("input closed, leaving the game");
            Ok(())
        }
        Err(err) => Err(err).context("game aborted"),
    }
}

fn setup_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
