use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod cli;
mod config;
mod fetch;
mod models;
mod pipeline;
mod tui;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "country_browser=info");
    }

    let mut config = Config::from_env()?;
    config.validate()?;
    init_logging(&config);

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fetch {
            endpoint,
            json,
            limit,
        }) => {
            if let Some(endpoint) = endpoint {
                config.endpoint = endpoint;
            }
            match fetch::fetch_countries(&config).await {
                Ok(countries) => print_countries(&countries, json, limit)?,
                Err(e) => error!("Fetch failed: {}", e),
            }
        }

        Some(Commands::Tui { endpoint }) => {
            if let Some(endpoint) = endpoint {
                config.endpoint = endpoint;
            }
            run_tui(config).await;
        }

        None => run_tui(config).await,
    }

    Ok(())
}

async fn run_tui(config: Config) {
    info!("Launching TUI interface");
    match tui::run_tui(config).await {
        Ok(_) => info!("TUI exited successfully"),
        Err(e) => error!("TUI failed: {}", e),
    }
}

fn print_countries(countries: &[models::Country], json: bool, limit: usize) -> Result<()> {
    let shown = if limit == 0 {
        countries.len()
    } else {
        limit.min(countries.len())
    };

    if json {
        // Re-encode only the fields the record shape keeps.
        let rows: Vec<serde_json::Value> = countries[..shown]
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.display_name(),
                    "capital": c.capital_display(),
                    "population": c.population,
                    "flag": c.flags.png,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Fetched {} countries:", countries.len());
        for country in &countries[..shown] {
            println!(
                "{} - {} - {} - {}",
                country.display_name(),
                country.capital_display(),
                country.population,
                country.flags.png
            );
        }
    }

    Ok(())
}

/// Initialize logging to both console and file, mirroring RUST_LOG filtering
/// on each layer.
fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| ".".into());
    let log_name = config
        .log_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "country-browser.log".to_string());
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}
