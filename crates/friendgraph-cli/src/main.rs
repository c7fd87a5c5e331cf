//! friendgraph - "people you may know" from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List users of the built-in sample network
//! friendgraph users
//!
//! # Recommend friends for a user
//! friendgraph recommend gotya --limit 3
//!
//! # Score every candidate against the start user, JSON output
//! friendgraph recommend gotya --scoring start-user --json
//!
//! # Use your own network (JSON or CSV)
//! friendgraph --network people.csv recommend alice
//! ```

mod logger;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use friendgraph_core::{open_network, EngineConfig, Recommender, ScoringMode};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use render::{report_text, user_table, RecommendationReport};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "friendgraph")]
#[command(about = "Friend recommendations over a social graph", long_about = None)]
struct Cli {
    /// Network file (.json or .csv). Defaults to $FRIENDGRAPH_NETWORK, then the sample network
    #[arg(short, long, global = true)]
    network: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user with age, friend count and interests
    Users,

    /// Recommend people a user may know
    Recommend {
        /// User to recommend for
        #[arg(required_unless_present = "random")]
        user: Option<String>,

        /// Pick the start user at random
        #[arg(long, conflicts_with = "user")]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Maximum number of recommendations
        #[arg(short, long)]
        limit: Option<usize>,

        /// Score candidates against their introducer or against the start user
        #[arg(short, long, value_parser = parse_scoring)]
        scoring: Option<ScoringMode>,

        /// Ignore users more than this many hops away
        #[arg(long)]
        max_depth: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_scoring(s: &str) -> Result<ScoringMode, String> {
    s.parse().map_err(|e: friendgraph_core::GraphError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::setup_logging_and_tracing(cli.verbose);

    let mut config = EngineConfig::from_env().context("Failed to read FRIENDGRAPH_* environment")?;
    if let Some(network) = cli.network {
        config.network = Some(network);
    }

    let graph = open_network(&config).with_context(|| match &config.network {
        Some(path) => format!("Failed to load network from {}", path.display()),
        None => "Failed to build sample network".to_string(),
    })?;

    match cli.command {
        Commands::Users => {
            print!("{}", user_table(&graph));
        }

        Commands::Recommend {
            user,
            random,
            seed,
            limit,
            scoring,
            max_depth,
            json,
        } => {
            if let Some(limit) = limit {
                config.limit = limit;
            }
            if let Some(scoring) = scoring {
                config.scoring = scoring;
            }
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }

            let start = if random {
                let names: Vec<&str> = graph.names().collect();
                let mut rng = Pcg64::seed_from_u64(seed.unwrap_or_else(rand::random));
                match names.choose(&mut rng) {
                    Some(name) => name.to_string(),
                    None => bail!("Network has no users to pick from"),
                }
            } else {
                user.context("No user given")?
            };

            let recommender = Recommender::from_config(&graph, &config);
            let recommendations = recommender.rank(&start, config.limit)?;
            info!(user = %start, count = recommendations.len(), "recommendations ready");

            let report = RecommendationReport {
                user: graph
                    .user(&start)
                    .with_context(|| format!("Unknown user: {}", start))?,
                scoring: config.scoring,
                recommendations,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report_text(&report));
            }
        }
    }

    Ok(())
}
