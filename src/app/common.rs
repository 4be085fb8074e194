use std::path::Path;
use std::str::FromStr;

use tracing::Level;

pub fn init_logging(config: &crate::config::Config) {
    // stdout carries the prompts, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

/// Load a `.env` file into the environment. A missing file is fine, a broken one is not.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path.as_ref()) {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

/// Interpret a yes/no reply. Anything but `y` is a no.
pub fn is_yes(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case("y")
}
