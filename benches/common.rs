#![allow(dead_code)]

use fastrand::Rng;
use pathgraph::{EdgeKind, Graph};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5eed_9a7b_1c0f_d00d;

/// Lazily generated edges of a G(n, p) random graph.
///
/// Candidate pairs `(v, w)` with `w < v` are walked in order and the gaps
/// between accepted pairs are drawn from the geometric distribution, so the
/// cost is proportional to the number of generated edges.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        if self.v >= self.n {
            return None;
        }

        let skip = ((1.0 - rng.f32()).log10() / (1.0 - self.p).log10()).floor() as usize;
        self.w = self.w.wrapping_add(1) + skip;

        while self.w >= self.v && self.v < self.n {
            self.w -= self.v;
            self.v += 1;
        }

        (self.v < self.n).then_some((self.v, self.w))
    }
}

pub fn pathgraph_random(
    kind: EdgeKind,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> Graph<u32, f32> {
    let mut graph = Graph::with_capacity(kind, vertex_count);

    graph.extend_with_vertices(0..vertex_count as u32).unwrap();

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&(u as u32), &(v as u32), rng.f32()).unwrap();
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for vertex in 0..vertex_count as u32 {
        graph.add_node(vertex);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
