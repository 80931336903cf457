//! parley CLI - score statement similarity from the command line.
//!
//! A thin debug surface over the library: no statement storage, no
//! response selection, just the three comparators against two texts.

use clap::{Parser, Subcommand};
use parley::prelude::*;
use parley::Threshold;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parley")]
#[command(
    author,
    version,
    about = "Statement similarity scoring for conversational matching",
    long_about = r#"
parley - statement similarity scoring

STRATEGIES:
  • ratio     - surface-form fuzzy ratio in [0, 100]
  • semantic  - sense-graph similarity sum (0 without loaded sense data)
  • jaccard   - noun-lemma Jaccard overlap, thresholded to match/no-match

EXAMPLES:
  parley ratio "The cat is hungry." "The cat is very hungry."
  parley jaccard --threshold 0.6 "The young cat is hungry." "The cat is very hungry."
  parley all --json "Hello there" "Hello here"
"#
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Surface-form fuzzy ratio in [0, 100]
    #[command(visible_alias = "r")]
    Ratio {
        /// First statement
        a: String,
        /// Second statement
        b: String,
    },

    /// Sense-graph similarity sum
    #[command(visible_alias = "s")]
    Semantic {
        /// First statement
        a: String,
        /// Second statement
        b: String,
    },

    /// Noun-lemma Jaccard match decision
    #[command(visible_alias = "j")]
    Jaccard {
        /// First statement
        a: String,
        /// Second statement
        b: String,
        /// Minimum Jaccard ratio counted as a match, in [0, 1]
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,
    },

    /// Run every comparator
    #[command(visible_alias = "a")]
    All {
        /// First statement
        a: String,
        /// Second statement
        b: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lexicon = Lexicon::default();

    match cli.command {
        Commands::Ratio { a, b } => {
            let comparator = RatioComparator::new(lexicon);
            report(&comparator, &a.into(), &b.into(), cli.json)
        }
        Commands::Semantic { a, b } => {
            let comparator = SemanticComparator::new(lexicon);
            report(&comparator, &a.into(), &b.into(), cli.json)
        }
        Commands::Jaccard { a, b, threshold } => {
            let threshold = Threshold::new(threshold).ok_or_else(|| {
                Error::invalid_input(format!("threshold {threshold} is not in [0, 1]"))
            })?;
            let comparator = JaccardComparator::with_config(
                lexicon,
                JaccardConfig {
                    threshold,
                    ..Default::default()
                },
            );
            report(&comparator, &a.into(), &b.into(), cli.json)
        }
        Commands::All { a, b } => {
            let (a, b): (Statement, Statement) = (a.into(), b.into());
            for comparator in suite(&lexicon) {
                report(comparator.as_ref(), &a, &b, cli.json)?;
            }
            Ok(())
        }
    }
}

fn report(comparator: &dyn Comparator, a: &Statement, b: &Statement, json: bool) -> Result<()> {
    let score = comparator.compare(a, b)?;
    if json {
        let line = serde_json::json!({
            "comparator": comparator.name(),
            "score": score,
        });
        println!("{line}");
    } else {
        println!("{}: {}", comparator.name(), score);
    }
    Ok(())
}
