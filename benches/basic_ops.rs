mod common;

use common::{RandomEdges, RANDOM_SEED};
use fastrand::Rng;
use pathgraph::{
    core::marker::{Directed, Undirected},
    EdgeKind, Graph,
};
use petgraph::prelude::*;

fn main() {
    divan::main();
}

fn pathgraph_add_remove<const N: usize>(kind: EdgeKind, density: f32) -> Graph<u32, f32> {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = Graph::new(kind);
    graph.extend_with_vertices(0..N as u32).unwrap();

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        graph.add_edge(&(u as u32), &(v as u32), rng.f32()).unwrap();
    }

    for _ in 0..(N / 4) {
        let u = *graph.vertices().nth(rng.usize(..graph.vertex_count())).unwrap();

        graph.remove_vertex(&u).unwrap();
    }

    let mut edges = RandomEdges::new(N / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let _ = graph.remove_edge(&(u as u32), &(v as u32));
    }

    graph
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn pathgraph_add_remove_directed<const N: usize>(density: f32) -> Graph<u32, f32> {
    pathgraph_add_remove::<N>(Directed, density)
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn pathgraph_add_remove_undirected<const N: usize>(density: f32) -> Graph<u32, f32> {
    pathgraph_add_remove::<N>(Undirected, density)
}

#[divan::bench(consts = [100, 1000], types = [petgraph::Directed, petgraph::Undirected], args = [0.05, 0.5, 0.95])]
fn petgraph_add_remove<const N: usize, Ty: petgraph::EdgeType>(density: f32) -> petgraph::Graph<u32, f32, Ty> {
    let mut rng = Rng::with_seed(RANDOM_SEED);

    let mut graph = petgraph::Graph::<_, _, Ty>::with_capacity(N, 0);

    for vertex in 0..N as u32 {
        graph.add_node(vertex);
    }

    let mut edges = RandomEdges::new(N, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        let (u, v) = (NodeIndex::new(u), NodeIndex::new(v));
        graph.update_edge(u, v, rng.f32());
    }

    for _ in 0..(N / 4) {
        let u = rng.usize(..graph.node_count());

        graph.remove_node(NodeIndex::new(u));
    }

    let mut edges = RandomEdges::new(N / 4, density);

    while let Some((u, v)) = edges.next_edge(&mut rng) {
        if let Some(e) = graph.find_edge(NodeIndex::new(u), NodeIndex::new(v)) {
            graph.remove_edge(e);
        }
    }

    graph
}
