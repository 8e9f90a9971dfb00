use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` overrides `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "aboutlib={level},aboutlib_libraries={level},warn"
        ))
    });

    // A second init (e.g. from tests driving `run` twice) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
