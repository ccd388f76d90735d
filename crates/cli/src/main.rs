//! esd - selectively delete data from an Elasticsearch cluster.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Assemble the immutable runtime configuration.
//! - Drive the delete pipeline and own the process exit policy.
//!
//! Does NOT handle:
//! - Query construction or HTTP (see `crates/client`).
//! - Configuration precedence rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env fallbacks.
//! - Once parsing has succeeded the process exits 0 on every path; failures
//!   are reported as text, never as a status code. clap keeps its usage
//!   error exit of 2, and a malformed `.env` aborts startup with 1.

mod args;
mod interactive;
mod run;

use args::Cli;
use clap::Parser;
use esd_config::{Config, ConfigLoader, TimeSpec};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env before clap runs so `env = "ESD_SERVER"` fallbacks see it.
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for tool output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(loader, cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if let Err(e) = run::run(&config).await {
        eprintln!("Error: {e:#}");
    }
}

/// Layer CLI flags over environment values. Flags win; anything the user
/// did not pass keeps the environment (or default) value.
fn build_config(loader: ConfigLoader, cli: Cli) -> Result<Config, esd_config::ConfigError> {
    let mut loader = loader.from_env()?.with_index(cli.index);

    if let Some(dtype) = cli.dtype {
        loader = loader.with_doc_type(dtype);
    }
    if let Some(server) = cli.server {
        loader = loader.with_server(server);
    }
    if let Some(stamp) = cli.from_stamp {
        loader = loader.with_from(TimeSpec::Stamp(stamp));
    } else if let Some(ago) = cli.from_ago {
        loader = loader.with_from(TimeSpec::Ago(ago));
    }
    if let Some(stamp) = cli.to_stamp {
        loader = loader.with_to(TimeSpec::Stamp(stamp));
    } else if let Some(ago) = cli.to_ago {
        loader = loader.with_to(TimeSpec::Ago(ago));
    }
    if cli.noconfirm {
        loader = loader.with_no_confirm(true);
    }
    if cli.query_only {
        loader = loader.with_query_only(true);
    }
    if cli.verbose {
        loader = loader.with_verbose(true);
    }

    Ok(loader.build())
}
