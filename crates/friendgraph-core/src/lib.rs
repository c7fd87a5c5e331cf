//! Friend recommendation over an in-memory social graph.
//!
//! Build a [`SocialGraph`] with [`SocialGraph::add_user`] and
//! [`SocialGraph::add_connection`], then ask a [`Recommender`] for the people a
//! user may know. Candidates are found breadth-first and ranked by how many
//! interests they share.
//!
//! ```
//! use friendgraph_core::{SocialGraph, UserProfile};
//!
//! let mut graph = SocialGraph::new();
//! graph.add_user(UserProfile::new("gotya", 25, ["Technology", "Art"]))?;
//! graph.add_user(UserProfile::new("pintu", 30, ["Technology", "Music"]))?;
//! graph.add_connection("gotya", "pintu")?;
//!
//! let recs = graph.recommend("gotya", 5)?;
//! assert_eq!(recs[0].name, "pintu");
//! # Ok::<(), friendgraph_core::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod ingest;
pub mod profile;
pub mod recommend;
pub mod store;

pub use config::EngineConfig;
pub use error::{GraphError, Result};
pub use fixtures::sample_network;
pub use ingest::{load_network, NetworkDocument};
pub use profile::UserProfile;
pub use recommend::{Recommendation, Recommender, ScoringMode, DEFAULT_RECOMMENDATIONS};
pub use store::SocialGraph;

/// Loads the network named by `config`, or the sample network when none is set.
pub fn open_network(config: &EngineConfig) -> Result<SocialGraph> {
    match &config.network {
        Some(path) => load_network(path),
        None => Ok(sample_network()),
    }
}
