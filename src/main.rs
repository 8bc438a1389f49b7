use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use taxsearch::Site;
use taxsearch_core::config::HostConfig;
use taxsearch_host::QueryParams;

#[derive(Parser)]
#[command(name = "taxsearch", about = "Taxonomy filters for site search")]
struct Cli {
    /// Config file layered over the built-in defaults (TOML, JSON, or YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/taxsearch-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the search form markup.
    Form,
    /// Print the asset tags for the current settings.
    Assets,
    /// Evaluate a query string and print the resulting filter as JSON.
    Filter {
        /// Query string, e.g. "s=shoes&select-color=all".
        query: String,
    },
    /// Run the demo HTTP host.
    Serve {
        /// Listen address; overrides `[site] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config = HostConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let site = Site::from_config(&config)?;

    match cli.command {
        Command::Form => println!("{}", site.form()),
        Command::Assets => {
            let assets = site.assets();
            println!("{}", assets.head_html());
            println!("{}", assets.footer_html());
        }
        Command::Filter { query } => {
            let request = site.search(&QueryParams::parse(&query))?;
            println!("{}", serde_json::to_string_pretty(&request.taxonomy_filter())?);
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.site.bind.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(taxsearch::server::serve(site, &bind))?;
        }
    }
    Ok(())
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/taxsearch-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("taxsearch debug log started, tail -f /tmp/taxsearch-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,taxsearch=info")),
            )
            .init();
    }
    Ok(())
}
