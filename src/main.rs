use std::io;

use probe_service::{config, runner, telemetry};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    // A probe must run with zero setup; a missing .env file is not an error.
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr only; stdout carries the probe output.
    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("warn", Level::INFO))
        .with(telemetry::layer())
        .init();

    let cfg = match config::config_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Same contract as any probe failure: one line, normal exit.
            println!("Error: {e}");
            return;
        }
    };

    if let Err(e) = runner::run(&cfg, &mut io::stdout()).await {
        // Stdout itself is broken here, so report on stderr.
        eprintln!("could not write probe output: {e}");
    }
}
