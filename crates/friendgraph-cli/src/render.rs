use friendgraph_core::{Recommendation, ScoringMode, SocialGraph, UserProfile};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
pub struct RecommendationReport<'g> {
    pub user: &'g UserProfile,
    pub scoring: ScoringMode,
    pub recommendations: Vec<Recommendation<'g>>,
}

pub fn user_table(graph: &SocialGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>4} {:>8}  Interests", "Name", "Age", "Friends");
    for user in graph.users() {
        let _ = writeln!(
            out,
            "{:<12} {:>4} {:>8}  {}",
            user.name,
            user.age,
            graph.degree(&user.name),
            user.interests_joined(", ")
        );
    }
    let _ = writeln!(
        out,
        "\n{} users, {} connections",
        graph.user_count(),
        graph.connection_count()
    );
    out
}

pub fn report_text(report: &RecommendationReport<'_>) -> String {
    let mut out = String::new();
    let user = report.user;
    let _ = writeln!(out, "User: {}", user.name);
    let _ = writeln!(out, "Age: {}", user.age);
    let _ = writeln!(out, "Interests: {}", user.interests_joined(", "));

    if report.recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations: {} has no reachable connections.", user.name);
        return out;
    }

    let _ = writeln!(out, "Recommendations based on mutual connections and interests:");
    for rec in &report.recommendations {
        let _ = writeln!(
            out,
            "- Name: {} | Age: {} | Interests: {} | Shared: {} | Hops: {}",
            rec.user.name,
            rec.user.age,
            rec.user.interests_joined(", "),
            rec.score,
            rec.distance
        );
    }
    out
}
