#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    core::marker::Directed,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new(Directed);

    for op in ops {
        let _ = op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
