// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minaret - prayer-time and community-event notifications for mosque apps.
//!
//! This is the binary entry point. It loads and validates configuration,
//! then runs one engine operation per invocation; scheduling of *when* to
//! invoke it belongs to the host (cron, a server, a test harness).

mod commands;

use clap::{Parser, Subcommand};
use tracing::warn;

/// Minaret - prayer-time and community-event notifications.
#[derive(Parser, Debug)]
#[command(name = "minaret", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one day's prayer times for the configured location.
    Times {
        /// Date as DD-MM-YYYY; defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the next upcoming prayer and the time remaining.
    Next,
    /// Show the Qibla bearing for the configured location.
    Qibla,
    /// Show today's Hijri date.
    Date,
    /// List the known calculation methods.
    Methods,
    /// Send a test notification to explicit device tokens.
    SendTest {
        /// FCM device token to address.
        #[arg(long)]
        fcm_token: Option<String>,
        /// Expo push token to address.
        #[arg(long)]
        expo_token: Option<String>,
        /// Mention a specific prayer in the test copy.
        #[arg(long)]
        prayer: Option<String>,
    },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("minaret=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match minaret_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            minaret_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    if minaret_aladhan::method_name(config.engine.default_method).is_none() {
        warn!(
            method = config.engine.default_method,
            "calculation method code is not in the known catalog; AlAdhan may reject it"
        );
    }

    let result = match cli.command {
        Some(Commands::Times { date }) => commands::times(&config, date.as_deref()).await,
        Some(Commands::Next) => commands::next(&config).await,
        Some(Commands::Qibla) => commands::qibla(&config).await,
        Some(Commands::Date) => commands::date(&config).await,
        Some(Commands::Methods) => {
            commands::methods();
            Ok(())
        }
        Some(Commands::SendTest {
            fcm_token,
            expo_token,
            prayer,
        }) => commands::send_test(&config, fcm_token, expo_token, prayer.as_deref()).await,
        None => {
            println!("minaret: use --help for available commands");
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("minaret: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = minaret_config::load_and_validate()
            .expect("default config should be valid");
        assert_eq!(config.engine.default_method, 2);
    }
}
