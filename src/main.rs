// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal front-end for the search library.

use anyhow::Context;
use clap::Parser;
use teasel::cli::{emphasize_for_terminal, Cli, Commands};
use teasel::{build_teaser, documents_from_json, render_results, Engine, Matcher};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            html,
        } => run_search(&index, &query, limit, html),
        Commands::Inspect { index } => run_inspect(&index),
    }
}

fn load_engine(path: &str) -> anyhow::Result<Engine> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read index file {path}"))?;
    let docs = documents_from_json(&json)
        .with_context(|| format!("failed to parse index file {path}"))?;
    Ok(Engine::with_defaults(docs))
}

fn run_search(index: &str, query: &str, limit: usize, html: bool) -> anyhow::Result<()> {
    let engine = load_engine(index)?;
    let trimmed = query.trim();
    let terms: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
    let matches = engine.search(trimmed);

    if html {
        println!("{}", render_results(&matches, &terms, limit));
        return Ok(());
    }

    if matches.is_empty() {
        println!("No results for \"{trimmed}\".");
        return Ok(());
    }

    let shown = matches.len().min(limit);
    println!("{} result(s) for \"{trimmed}\":\n", matches.len());
    for (rank, m) in matches[..shown].iter().enumerate() {
        let teaser = emphasize_for_terminal(&build_teaser(&m.doc.body, &terms));
        println!("{:>2}. {}  [score {:.3}]", rank + 1, m.doc.title, m.score);
        println!("    {}", m.doc.url);
        if !teaser.is_empty() {
            println!("    {teaser}");
        }
        println!();
    }
    if matches.len() > shown {
        println!("({} more not shown)", matches.len() - shown);
    }
    Ok(())
}

fn run_inspect(index: &str) -> anyhow::Result<()> {
    let engine = load_engine(index)?;
    let docs = engine.docs();
    println!("{} document(s)", docs.len());

    let total_bytes: usize = docs.iter().map(|d| d.body.len()).sum();
    println!("total body size: {total_bytes} bytes\n");

    for doc in docs {
        println!(
            "{:<40} {:>8} chars  {}",
            doc.title,
            doc.body.chars().count(),
            doc.url
        );
    }
    Ok(())
}
