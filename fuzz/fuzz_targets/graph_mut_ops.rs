#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8, i8, i8>| {
    let mut graph = Graph::new();

    for op in ops {
        let vertex_count = graph.vertex_count();
        let edge_count = graph.edge_count();

        let result = op.apply(&mut graph);

        if result.is_rejected() {
            assert_eq!(graph.vertex_count(), vertex_count);
            assert_eq!(graph.edge_count(), edge_count);
        }

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
