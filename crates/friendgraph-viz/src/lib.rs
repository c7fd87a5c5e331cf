//! Graphical front-end: draws the whole network and highlights the
//! recommendations for one user.

pub mod layout;
pub mod svg;

pub use layout::{spring_layout, Layout, Point, DEFAULT_ITERATIONS};
pub use svg::{render_svg, Canvas, Highlight};

use friendgraph_core::{EngineConfig, Recommender, Result, SocialGraph};

/// Lays out `graph` and renders it. When `user` is given, that user and their
/// recommendations (per `config`) are highlighted.
pub fn draw(
    graph: &SocialGraph,
    config: &EngineConfig,
    user: Option<&str>,
    seed: u64,
    canvas: &Canvas,
) -> Result<String> {
    let mut highlight = Highlight::default();
    if let Some(name) = user {
        highlight.recommended = Recommender::from_config(graph, config).recommend(name, config.limit)?;
        highlight.selected = graph.user(name);
    }
    let layout = spring_layout(graph, seed, DEFAULT_ITERATIONS);
    Ok(render_svg(graph, &layout, canvas, &highlight))
}
