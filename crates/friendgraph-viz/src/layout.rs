//! Force-directed node placement (Fruchterman-Reingold).
//!
//! Connected users pull together, every pair pushes apart. The result is
//! centred on the origin and scaled into `[-1, 1]` on both axes.

use friendgraph_core::SocialGraph;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::collections::HashMap;

pub const DEFAULT_ITERATIONS: usize = 50;

const MIN_DISTANCE: f64 = 0.01;
const INITIAL_TEMPERATURE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node positions, indexed like `SocialGraph::users()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub positions: Vec<Point>,
    index: HashMap<String, usize>,
}

impl Layout {
    pub fn position(&self, name: &str) -> Option<Point> {
        self.index.get(name).map(|&i| self.positions[i])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub fn spring_layout(graph: &SocialGraph, seed: u64, iterations: usize) -> Layout {
    let index: HashMap<String, usize> = graph
        .names()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect();
    let n = index.len();

    let edges: Vec<(usize, usize)> = graph
        .connections()
        .map(|(a, b)| (index[&a.name], index[&b.name]))
        .collect();

    let mut rng = Pcg64::seed_from_u64(seed);
    let mut pos: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.random::<f64>(), rng.random::<f64>()])
        .collect();

    if n > 1 {
        let k = (1.0 / n as f64).sqrt();
        let mut temperature = INITIAL_TEMPERATURE;
        let cooling = INITIAL_TEMPERATURE / (iterations as f64 + 1.0);

        for _ in 0..iterations {
            let mut disp = vec![[0.0f64; 2]; n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let dx = pos[i][0] - pos[j][0];
                    let dy = pos[i][1] - pos[j][1];
                    let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                    let repulse = k * k / (dist * dist);
                    disp[i][0] += dx * repulse;
                    disp[i][1] += dy * repulse;
                    disp[j][0] -= dx * repulse;
                    disp[j][1] -= dy * repulse;
                }
            }

            for &(a, b) in &edges {
                let dx = pos[a][0] - pos[b][0];
                let dy = pos[a][1] - pos[b][1];
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let attract = dist / k;
                disp[a][0] -= dx * attract;
                disp[a][1] -= dy * attract;
                disp[b][0] += dx * attract;
                disp[b][1] += dy * attract;
            }

            for (p, d) in pos.iter_mut().zip(&disp) {
                let len = (d[0] * d[0] + d[1] * d[1]).sqrt().max(MIN_DISTANCE);
                p[0] += d[0] * temperature / len;
                p[1] += d[1] * temperature / len;
            }
            temperature -= cooling;
        }
    }

    Layout {
        positions: rescale(pos),
        index,
    }
}

/// Centre on the origin, then scale so the farthest coordinate is 1.
fn rescale(mut pos: Vec<[f64; 2]>) -> Vec<Point> {
    if pos.is_empty() {
        return Vec::new();
    }
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p[1]).sum::<f64>() / n;
    for p in pos.iter_mut() {
        p[0] -= mean_x;
        p[1] -= mean_y;
    }
    let extent = pos
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0f64, f64::max);
    let scale = if extent > 0.0 { 1.0 / extent } else { 0.0 };

    pos.into_iter()
        .map(|p| Point {
            x: p[0] * scale,
            y: p[1] * scale,
        })
        .collect()
}
