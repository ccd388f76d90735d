//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the flag surface using clap derive macros.
//! - Enforce the stamp/ago mutual exclusion for each bound at parse time.
//!
//! Non-responsibilities:
//! - Does not assemble the runtime configuration (see `main`).
//! - Does not run the delete pipeline (see `run` module).

use clap::Parser;

/// Command-line arguments for `esd`.
///
/// Each time bound comes in two flavors: an absolute `*-stamp` and a
/// relative `*-ago`. clap rejects a stamp/ago pair for the same bound
/// with a usage error; value validation itself happens later so the
/// process can report bad values on stdout and still exit 0.
#[derive(Parser, Debug)]
#[command(name = "esd")]
#[command(version)]
#[command(about = "Selectively delete data from an Elasticsearch cluster")]
#[command(after_help = "Examples:
  esd -i logs -F 24h
  esd -i logs -d event -f 2014-07-23T00:00:00.000Z -t 2014-07-24T00:00:00.000Z
  esd -i logs -T 7d --noconfirm
  esd -i logs -F 24h --query-only")]
pub struct Cli {
    /// Index to delete from
    #[arg(short, long)]
    pub index: String,

    /// Document type to delete; all types in the index when omitted
    #[arg(short, long)]
    pub dtype: Option<String>,

    /// Host and port of the cluster, e.g. localhost:9200
    #[arg(short, long, env = "ESD_SERVER")]
    pub server: Option<String>,

    /// Delete records at or after this timestamp, e.g. 2014-07-23T00:00:00.000Z
    #[arg(short = 'f', long, value_name = "STAMP")]
    pub from_stamp: Option<String>,

    /// Delete records newer than a duration before now, e.g. 30s, 15m, 24h, 7d
    #[arg(short = 'F', long, value_name = "AGO", conflicts_with = "from_stamp")]
    pub from_ago: Option<String>,

    /// Delete records at or before this timestamp, e.g. 2014-07-24T00:00:00.000Z
    #[arg(short = 't', long, value_name = "STAMP")]
    pub to_stamp: Option<String>,

    /// Delete records older than a duration before now, e.g. 30s, 15m, 24h, 7d
    #[arg(short = 'T', long, value_name = "AGO", conflicts_with = "to_stamp")]
    pub to_ago: Option<String>,

    /// Skip the count and confirmation prompt (for cron and scripts)
    #[arg(short, long)]
    pub noconfirm: bool,

    /// Print the generated delete URL without contacting the cluster
    #[arg(short, long)]
    pub query_only: bool,

    /// Print the delete response body
    #[arg(short, long)]
    pub verbose: bool,
}
