// pitch-trainer: terminal front end for the three-note ear trainer.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pitch_trainer::config::TrainerConfig;
use pitch_trainer::game::{QuizSession, SessionSettings};
use pitch_trainer::host::{ConsoleBuzzer, KeyboardJoystick, TerminalRenderer};
use pitch_trainer::input::{DirectionClassifier, InputEventReader};
use pitch_trainer::pattern::QuestionGenerator;
use pitch_trainer::traits::{AxisSensor, SystemDelay};
use pitch_trainer::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "pitch-trainer",
    about = "Three-note pitch-direction ear trainer",
    after_help = "Keys: w/k up, s/j down, a/h left, d/l right. Press Enter after each line."
)]
struct Args {
    /// Path to the config JSON file (defaults to the per-user config dir).
    #[arg(long, env = "PITCH_TRAINER_CONFIG")]
    config: Option<PathBuf>,

    /// Seed the question generator instead of sampling the joystick.
    #[arg(long)]
    seed: Option<u32>,

    /// Skip the title-screen jingle.
    #[arg(long)]
    no_tune: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to a daily file in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let config_path = args.config.clone().unwrap_or_else(TrainerConfig::default_path);
    let mut config = TrainerConfig::load_from(&config_path)?;
    info!(path = %config_path.display(), "config loaded");

    if args.write_default_config {
        config.save_to(&config_path)?;
        info!(path = %config_path.display(), "config written");
        return Ok(());
    }

    if args.no_tune {
        config.startup_tune = false;
    }
    config.validate()?;

    let stdin = io::stdin();
    let mut joystick =
        KeyboardJoystick::new(stdin.lock(), &config.joystick).with_jitter(clock_seed());

    let questions = match args.seed {
        Some(seed) => QuestionGenerator::from_seed(seed),
        None => QuestionGenerator::from_sensor(joystick.read_raw_axes()),
    };
    info!(seed = ?questions.seed(), "questions seeded");

    let input = InputEventReader::new(
        joystick,
        DirectionClassifier::from(&config.joystick),
        config.timing.settle_ms,
    );
    let mut session = QuizSession::new(
        input,
        SystemDelay,
        ConsoleBuzzer::new(),
        TerminalRenderer::new(io::stdout()),
        questions,
        SessionSettings::from(&config),
    );

    let summary = session.run();
    info!(
        score = summary.score,
        total = summary.total,
        accuracy = summary.accuracy,
        "session complete"
    );

    Ok(())
}

/// Sub-second clock bits, used only to make the simulated stick noise differ
/// between runs.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::from(d.subsec_nanos()))
        .unwrap_or_default()
}
