// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the teasel command-line interface.
//!
//! Two subcommands: `search` runs a query against an index JSON and prints
//! what the browser widget would show, and `inspect` summarizes an index.
//! The CLI exists to check locally what a deployed blog will serve, without
//! opening a browser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "teasel",
    about = "Client-side fuzzy search for static blogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index JSON and display ranked results
    Search {
        /// Path to the index JSON (array of {title, body, url})
        #[arg(short, long)]
        index: String,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print the raw HTML fragment instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Summarize an index JSON: document count and per-document sizes
    Inspect {
        /// Path to the index JSON
        index: String,
    },
}

/// Rewrite `<em>` teaser markup as ANSI bold when stdout is a TTY.
///
/// Piped output keeps the plain text with the markup stripped, so grepping
/// results stays sane.
pub fn emphasize_for_terminal(teaser: &str) -> String {
    let (open, close) = if atty::is(atty::Stream::Stdout) {
        ("\x1b[1m", "\x1b[0m")
    } else {
        ("", "")
    };
    teaser.replace("<em>", open).replace("</em>", close)
}
