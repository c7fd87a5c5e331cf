use anyhow::{Context, Result};
use clap::Parser;
use friendgraph_core::{open_network, EngineConfig, ScoringMode};
use friendgraph_viz::{draw, Canvas};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "friendgraph-viz")]
#[command(about = "Draw a social network and a user's recommendations as SVG", long_about = None)]
struct Cli {
    /// Network file (.json or .csv). Defaults to $FRIENDGRAPH_NETWORK, then the sample network
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Highlight this user and their recommendations
    #[arg(short, long)]
    user: Option<String>,

    /// Maximum number of recommendations
    #[arg(short, long)]
    limit: Option<usize>,

    /// predecessor or start-user
    #[arg(short, long, value_parser = parse_scoring)]
    scoring: Option<ScoringMode>,

    /// Layout seed
    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, default_value = "800")]
    width: u32,

    #[arg(long, default_value = "600")]
    height: u32,

    /// Output SVG file
    #[arg(short, long)]
    output: PathBuf,
}

fn parse_scoring(s: &str) -> Result<ScoringMode, String> {
    s.parse().map_err(|e: friendgraph_core::GraphError| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env().context("Failed to read FRIENDGRAPH_* environment")?;
    if cli.network.is_some() {
        config.network = cli.network;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(scoring) = cli.scoring {
        config.scoring = scoring;
    }

    let graph = open_network(&config).context("Failed to load network")?;
    let canvas = Canvas {
        width: cli.width,
        height: cli.height,
        ..Canvas::default()
    };

    let svg = draw(&graph, &config, cli.user.as_deref(), cli.seed, &canvas)?;
    fs::write(&cli.output, svg)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        output = %cli.output.display(),
        users = graph.user_count(),
        connections = graph.connection_count(),
        "rendered network"
    );
    Ok(())
}
