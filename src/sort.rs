//! Ordering a set of colors so that similar ones sit next to each other.
//!
//! A complete graph is built over the input with a perceptual distance as
//! the edge weight, its minimum spanning tree is extracted with Kruskal's
//! algorithm, and the tree is walked in preorder starting from the darkest
//! color. Consecutive output colors are therefore close in the chosen
//! metric.

use itertools::Itertools;

use crate::color::Srgb;
use crate::{distance, Float};

struct Edge {
    u: usize,
    v: usize,
    weight: Float,
}

/// Disjoint-set forest over indices, with path halving and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut e: usize) -> usize {
        while self.parent[e] != e {
            self.parent[e] = self.parent[self.parent[e]];
            e = self.parent[e];
        }
        e
    }

    /// Merges the sets containing `e1` and `e2`; returns false if they
    /// were already one set.
    fn union(&mut self, e1: usize, e2: usize) -> bool {
        let r1 = self.find(e1);
        let r2 = self.find(e2);
        if r1 == r2 {
            return false;
        }
        match self.rank[r1].cmp(&self.rank[r2]) {
            std::cmp::Ordering::Less => self.parent[r1] = r2,
            std::cmp::Ordering::Greater => self.parent[r2] = r1,
            std::cmp::Ordering::Equal => {
                self.parent[r2] = r1;
                self.rank[r1] += 1;
            }
        }
        true
    }
}

/// Sorts colors by visual similarity using the CIEDE2000 metric.
pub fn sort(colors: &[Srgb]) -> Vec<Srgb> {
    sort_by(colors, distance::ciede2000)
}

/// Sorts colors by visual similarity under the given distance metric.
pub fn sort_by(colors: &[Srgb], metric: fn(&Srgb, &Srgb) -> Float) -> Vec<Srgb> {
    if colors.len() < 2 {
        return colors.to_vec();
    }

    let mut edges: Vec<Edge> = (0..colors.len())
        .tuple_combinations()
        .map(|(u, v)| Edge {
            u,
            v,
            weight: metric(&colors[u], &colors[v]),
        })
        .collect();
    edges.sort_by(|e1, e2| e1.weight.total_cmp(&e2.weight));

    // Kruskal: take edges lightest-first, skipping any that would close a
    // cycle, until the tree spans all colors.
    let mut sets = DisjointSet::new(colors.len());
    let mut adjacency = vec![Vec::new(); colors.len()];
    let mut accepted = 0;
    for edge in &edges {
        if sets.union(edge.u, edge.v) {
            adjacency[edge.u].push(edge.v);
            adjacency[edge.v].push(edge.u);
            accepted += 1;
            if accepted == colors.len() - 1 {
                break;
            }
        }
    }

    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
    }

    // Start the walk at the color closest to black so the output runs
    // roughly dark to light.
    let black = Srgb::new(0.0, 0.0, 0.0);
    let root = (0..colors.len())
        .min_by(|&u, &v| metric(&black, &colors[u]).total_cmp(&metric(&black, &colors[v])))
        .unwrap();

    let mut sorted = Vec::with_capacity(colors.len());
    let mut visited = vec![false; colors.len()];
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        sorted.push(colors[current]);
        // Reversed so the lowest-index neighbor is explored first.
        for &next in adjacency[current].iter().rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }
    sorted
}
