//! Sourcing Engine CLI
//!
//! Loads a lender catalog and a client profile, runs the matching engine and
//! prints the ranked results.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;

use sourcing_engine::catalog::{load_catalog, load_profile};
use sourcing_engine::engine::ScoringConfig;
use sourcing_engine::profile::FixedTerm;
use sourcing_engine::SourcingRunner;

#[derive(Debug, Parser)]
#[command(name = "sourcing_engine", about = "Match a client profile against a lender catalog")]
struct Args {
    /// Path to the lender catalog JSON file
    #[arg(long)]
    catalog: PathBuf,

    /// Path to the client profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Evaluation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    now: Option<NaiveDate>,

    /// Override the profile's preferred fixed-rate term (2yr, 3yr, 5yr)
    #[arg(long)]
    term: Option<String>,

    /// Optional scoring policy JSON file; defaults to the built-in policy
    #[arg(long)]
    scoring: Option<PathBuf>,

    /// Show at most this many matches
    #[arg(long, default_value_t = 20)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let now = args.now.unwrap_or_else(|| Utc::now().date_naive());

    let catalog = load_catalog(&args.catalog)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    let mut profile = load_profile(&args.profile)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading profile from {}", args.profile.display()))?;

    if let Some(term) = &args.term {
        profile.preferred_fixed_term = match term.as_str() {
            "2yr" => FixedTerm::TwoYear,
            "3yr" => FixedTerm::ThreeYear,
            "5yr" => FixedTerm::FiveYear,
            other => anyhow::bail!("unknown term '{other}' (expected 2yr, 3yr or 5yr)"),
        };
    }

    let scoring = match &args.scoring {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scoring policy {}", path.display()))?;
            serde_json::from_str::<ScoringConfig>(&text).context("parsing scoring policy")?
        }
        None => ScoringConfig::default(),
    };

    let runner = SourcingRunner::with_scoring(catalog, scoring);
    let matches = runner.run(&profile, now)?;

    println!("Sourcing results for {} ({} lenders evaluated)", now, runner.catalog().len());
    println!(
        "{:<24} {:<22} {:>5} {:>7} {:>5} {:>12}",
        "Lender", "Tier", "Score", "Rate", "Term", "Monthly"
    );
    println!("{}", "-".repeat(80));

    if matches.is_empty() {
        println!("No matches for this profile.");
        return Ok(());
    }

    for result in matches.iter().take(args.top) {
        println!(
            "{:<24} {:<22} {:>5} {:>6.2}% {:>5} {:>11.0}",
            result.lender_name,
            result.tier_name,
            result.score,
            result.rate,
            result.term.as_str(),
            result.monthly_payment,
        );
    }

    if let Some(best) = matches.first() {
        println!();
        println!("Best match: {} {} at {:.2}%", best.lender_name, best.tier_name, best.rate);
        for reason in &best.reasons {
            println!("  + {}", reason);
        }
    }

    Ok(())
}
