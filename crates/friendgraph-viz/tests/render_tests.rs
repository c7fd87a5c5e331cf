use assert_cmd::Command;
use friendgraph_core::{sample_network, EngineConfig, GraphError};
use friendgraph_viz::{draw, Canvas};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_every_user_and_connection_is_drawn() {
    let graph = sample_network();
    let svg = draw(&graph, &EngineConfig::default(), None, 42, &Canvas::default()).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    for name in graph.names() {
        assert!(svg.contains(&format!(r#"data-user="{}""#, name)), "missing {}", name);
    }
    assert_eq!(svg.matches(r#"<line class="edge""#).count(), graph.connection_count());
    assert_eq!(svg.matches(r#"<circle class="node"#).count(), graph.user_count());
    assert!(!svg.contains("node selected"));
}

#[test]
fn test_selected_user_and_recommendations_are_highlighted() {
    let graph = sample_network();
    let config = EngineConfig {
        limit: 3,
        ..EngineConfig::default()
    };
    let svg = draw(&graph, &config, Some("gotya"), 42, &Canvas::default()).unwrap();

    assert!(svg.contains(r#"<circle class="node selected" data-user="gotya""#));
    for name in ["pintu", "bandya", "athrya"] {
        assert!(svg.contains(&format!(r#"<circle class="node recommended" data-user="{}""#, name)));
    }
    assert_eq!(svg.matches("node recommended").count(), 3);
    assert!(svg.contains("Selected User: gotya"));
    assert_eq!(svg.matches(r#"class="recommendation""#).count(), 3);
}

#[test]
fn test_same_seed_same_picture() {
    let graph = sample_network();
    let config = EngineConfig::default();
    let canvas = Canvas::default();
    assert_eq!(
        draw(&graph, &config, None, 9, &canvas).unwrap(),
        draw(&graph, &config, None, 9, &canvas).unwrap()
    );
}

#[test]
fn test_unknown_user_is_an_error() {
    let err = draw(&sample_network(), &EngineConfig::default(), Some("ghost"), 1, &Canvas::default())
        .unwrap_err();
    assert!(matches!(err, GraphError::UnknownUser(_)));
}

#[test]
fn test_cli_writes_svg() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("network.svg");

    Command::cargo_bin("friendgraph-viz")?
        .env_remove("FRIENDGRAPH_NETWORK")
        .env_remove("FRIENDGRAPH_LIMIT")
        .env_remove("FRIENDGRAPH_SCORING")
        .env_remove("FRIENDGRAPH_MAX_DEPTH")
        .args(["--user", "rhea", "--output"])
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output)?;
    assert!(svg.contains(r#"class="node selected" data-user="rhea""#));
    Ok(())
}

#[test]
fn test_cli_unknown_user_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    Command::cargo_bin("friendgraph-viz")?
        .env_remove("FRIENDGRAPH_NETWORK")
        .args(["--user", "ghost", "--output"])
        .arg(dir.path().join("x.svg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user: ghost"));
    Ok(())
}
