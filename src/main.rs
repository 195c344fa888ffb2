//! galaxy-data
//!
//! Reads token traits from the GalaxyData contract on Mumbai and prints them.
//!
//! ```text
//! .env + environment + --config
//!     → Config
//!     → network guard (NETWORK must be "mumbai")
//!     → GalaxyData (credentials, RPC client)
//!     → getTraits / getTraitsAvailableValues
//!     → decode → stdout
//! ```
//!
//! Every failure is logged and the process exits 0.

use clap::Parser;

use galaxy_data::cli::Cli;
use galaxy_data::config::loader;
use galaxy_data::observability::logging;
use galaxy_data::{app, GalaxyData};

#[tokio::main]
async fn main() {
    // A missing .env file is not an error.
    dotenv::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let config = match loader::load_from_env(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            app::report_failure(&e);
            return;
        }
    };

    tracing::debug!(config = ?config, "Configuration loaded");

    let mut stdout = std::io::stdout();
    app::execute(&config, &cli.command, cli.json, GalaxyData::connect, &mut stdout).await;
}
