use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::profile::UserProfile;
use crate::store::SocialGraph;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Which profile a discovered candidate's interests are compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Compare against the node the candidate was discovered from. Direct
    /// friends are therefore scored against the start user, friends of friends
    /// against their introducer.
    #[default]
    Predecessor,
    /// Compare every candidate against the start user.
    StartUser,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Predecessor => "predecessor",
            ScoringMode::StartUser => "start-user",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "predecessor" | "introducer" => Ok(ScoringMode::Predecessor),
            "start-user" | "start_user" | "start" => Ok(ScoringMode::StartUser),
            other => Err(GraphError::InvalidConfig(format!(
                "unknown scoring mode '{}' (expected predecessor or start-user)",
                other
            ))),
        }
    }
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<'g> {
    pub user: &'g UserProfile,
    /// Shared-interest count used as the ranking key
    pub score: usize,
    /// Hops from the start user
    pub distance: u32,
    /// Name of the user this candidate was discovered through
    pub introduced_by: &'g str,
}

/// Breadth-first "people you may know" engine over a [`SocialGraph`].
pub struct Recommender<'g> {
    graph: &'g SocialGraph,
    scoring: ScoringMode,
    max_depth: Option<u32>,
}

impl<'g> Recommender<'g> {
    pub fn new(graph: &'g SocialGraph) -> Self {
        Self {
            graph,
            scoring: ScoringMode::default(),
            max_depth: None,
        }
    }

    pub fn from_config(graph: &'g SocialGraph, config: &EngineConfig) -> Self {
        Self::new(graph)
            .with_scoring(config.scoring)
            .with_max_depth(config.max_depth)
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Only consider users at most `max_depth` hops away. `None` walks the
    /// whole reachable set.
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    /// Top `limit` candidates for `start`, best score first.
    ///
    /// Every reachable user is discovered exactly once, in breadth-first
    /// order. Ties keep discovery order.
    pub fn rank(&self, start: &str, limit: usize) -> Result<Vec<Recommendation<'g>>> {
        let graph = self.graph;
        let topology = graph.topology();
        let start_id = graph.require_id(start)?;
        let start_profile = graph.profile(start_id);

        let mut visited = vec![false; topology.num_nodes()];
        visited[start_id as usize] = true;
        let mut queue = VecDeque::from([(start_id, 0u32)]);
        let mut candidates = Vec::new();

        while let Some((current, distance)) = queue.pop_front() {
            if self.max_depth.is_some_and(|max| distance >= max) {
                continue;
            }
            let current_profile = graph.profile(current);
            let reference = match self.scoring {
                ScoringMode::Predecessor => current_profile,
                ScoringMode::StartUser => start_profile,
            };

            for &neighbor in topology.neighbors(current) {
                if visited[neighbor as usize] {
                    continue;
                }
                visited[neighbor as usize] = true;
                queue.push_back((neighbor, distance + 1));

                let profile = graph.profile(neighbor);
                candidates.push(Recommendation {
                    user: profile,
                    score: reference.shared_interests(profile),
                    distance: distance + 1,
                    introduced_by: current_profile.name.as_str(),
                });
            }
        }

        debug!(
            start,
            scoring = %self.scoring,
            reachable = candidates.len(),
            limit,
            "ranked candidates"
        );

        // stable: equal scores stay in discovery order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates.truncate(limit);
        Ok(candidates)
    }

    /// Same ranking as [`Recommender::rank`], profiles only.
    pub fn recommend(&self, start: &str, limit: usize) -> Result<Vec<&'g UserProfile>> {
        Ok(self
            .rank(start, limit)?
            .into_iter()
            .map(|rec| rec.user)
            .collect())
    }
}

impl SocialGraph {
    /// Recommendations for `start` with the default (predecessor) scoring.
    pub fn recommend(&self, start: &str, limit: usize) -> Result<Vec<&UserProfile>> {
        Recommender::new(self).recommend(start, limit)
    }
}
