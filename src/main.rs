use std::io;
use std::process::ExitCode;

mod app;
mod config;
mod core;
mod utils;

fn main() -> ExitCode {
    // logging is not set up yet
    if let Err(e) = app::common::load_env_file(".env") {
        eprintln!("Failed to load .env: {e}");
    }

    let config = match config::Config::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    app::common::init_logging(&config);
    tracing::debug!("Loaded configuration: {:?}", config);

    let store = core::store::OverrideStore::new(&config.store.path);
    let mut session = app::session::Session::new(
        io::stdin().lock(),
        io::stdout(),
        store,
        config.naming.group_tag.as_str(),
    );

    if let Err(e) = session.run() {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
