#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use pathgraph::{
    algo::AllPaths,
    infra::{arbitrary::MutOpsSeq, testing::check_paths},
    Graph,
};

#[derive(Debug, Arbitrary)]
struct Input {
    starts: Vec<u8>,
    ends: Vec<u8>,
    max_depth: u8,
    // Consumes the rest of the input.
    ops: MutOpsSeq<u8, (), ()>,
}

fuzz_target!(|input: Input| {
    let mut graph = Graph::new();

    for op in input.ops {
        op.apply(&mut graph);
    }

    let starts = input
        .starts
        .into_iter()
        .filter(|key| graph.contains_vertex(key))
        .take(4)
        .collect::<Vec<_>>();
    let ends = input
        .ends
        .into_iter()
        .filter(|key| graph.contains_vertex(key))
        .take(4)
        .collect::<Vec<_>>();

    let max_depth = (input.max_depth % 8) as usize;

    let mut expected = Vec::new();

    for start in starts.iter() {
        for end in ends.iter() {
            let paths = AllPaths::on(&graph)
                .max_depth(max_depth)
                .run(start, end)
                .unwrap();

            check_paths(&graph, start, end, paths.paths()).unwrap();
            assert!(paths.iter().all(|path| path.len() - 1 <= max_depth));

            expected.extend(paths);
        }
    }

    let paths = AllPaths::on(&graph)
        .max_depth(max_depth)
        .run_between_sets(&starts, &ends)
        .unwrap();

    assert_eq!(paths.into_paths(), expected);
});
