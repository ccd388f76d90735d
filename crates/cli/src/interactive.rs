//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Prompt for delete confirmation with the matching record count.
//! - Keep prompt wording stable; scripts and tests match on it.

use anyhow::Result;
use std::io::Write;

/// Prompt the user to commit a delete that matches `total` records.
///
/// Any answer starting with `y` or `Y` confirms. Everything else declines
/// and prints `Delete cancelled.`.
pub fn confirm_delete(total: u64) -> Result<bool> {
    println!("The query will delete {total} records. Commit? y/n");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let answer = input.trim_end_matches(['\r', '\n']).to_lowercase();
    if !answer.starts_with('y') {
        println!("Delete cancelled.");
        return Ok(false);
    }

    Ok(true)
}
