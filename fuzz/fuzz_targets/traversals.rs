#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    core::marker::Directed,
    has_path,
    infra::arbitrary::MutOpsSeq,
    visit::{Bfs, BfsStrategy, Dfs, DfsStrategy},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new(Directed);

    for op in ops {
        let _ = op.apply(&mut graph);
    }

    let Some(&start) = graph.vertices().next() else {
        return;
    };

    let mut bfs = Bfs::new(&graph, &start).unwrap().copied().collect::<Vec<_>>();
    let mut dfs = Dfs::new(&graph, &start).unwrap().copied().collect::<Vec<_>>();

    assert_eq!(bfs.first(), Some(&start));
    assert_eq!(dfs.first(), Some(&start));

    bfs.sort_unstable();
    dfs.sort_unstable();
    assert_eq!(bfs, dfs);

    for vertex in graph.vertices() {
        let reachable = bfs.binary_search(vertex).is_ok();
        assert_eq!(has_path(&graph, &start, vertex, &BfsStrategy), Ok(reachable));
        assert_eq!(has_path(&graph, &start, vertex, &DfsStrategy), Ok(reachable));
    }
});
