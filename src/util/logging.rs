use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with tracing.
///
/// Console logs go to stderr so they do not interleave with the screens the
/// terminal renderer prints on stdout. If `log_dir` is provided, logs are
/// also written to a daily file in that directory. `RUST_LOG` overrides the
/// built-in filter.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pitch_trainer=debug,warn")
        } else {
            EnvFilter::new("pitch_trainer=info,warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    let console = fmt::layer().with_target(true).with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "pitch-trainer.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The writer must outlive every log call; logging is initialized once.
        std::mem::forget(guard);

        registry
            .with(console)
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .try_init()?;
    } else {
        registry.with(console).try_init()?;
    }

    Ok(())
}
