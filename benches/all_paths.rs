mod common;

use common::{pathgraph_random, petgraph_from, RANDOM_SEED};
use fastrand::Rng;
use pathgraph::algo::AllPaths;
use petgraph::prelude::*;

const MAX_PATHS: usize = 10_000;

fn main() {
    divan::main();
}

#[divan::bench(consts = [20, 40, 80], args = [0.1, 0.3])]
fn all_paths_dag<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = pathgraph_random(N, density, false, &mut Rng::with_seed(RANDOM_SEED));
    let end = N as u32 - 1;

    bencher.bench(|| {
        AllPaths::on(&graph)
            .max_paths(MAX_PATHS)
            .run(&0, &end)
            .map(|paths| paths.len())
    });
}

#[divan::bench(consts = [20, 40, 80], args = [0.1, 0.3])]
fn petgraph_all_simple_paths_dag<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_from(&pathgraph_random(
        N,
        density,
        false,
        &mut Rng::with_seed(RANDOM_SEED),
    ));
    let end = NodeIndex::new(N - 1);

    bencher.bench(|| {
        petgraph::algo::all_simple_paths::<Vec<_>, _>(&graph, NodeIndex::new(0), end, 0, None)
            .take(MAX_PATHS)
            .count()
    });
}

#[divan::bench(consts = [10, 14, 18], args = [4, 8])]
fn all_paths_cyclic_bounded_depth<const N: usize>(bencher: divan::Bencher, depth: usize) {
    let graph = pathgraph_random(N, 0.3, true, &mut Rng::with_seed(RANDOM_SEED));
    let end = N as u32 - 1;

    bencher.bench(|| {
        AllPaths::on(&graph)
            .max_depth(depth)
            .max_paths(MAX_PATHS)
            .run(&0, &end)
            .map(|paths| paths.len())
    });
}

#[divan::bench(consts = [20, 40], args = [0.1, 0.3])]
fn all_paths_between_sets<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = pathgraph_random(N, density, false, &mut Rng::with_seed(RANDOM_SEED));
    let starts = (0..4).collect::<Vec<u32>>();
    let ends = (N as u32 - 4..N as u32).collect::<Vec<u32>>();

    bencher.bench(|| {
        AllPaths::on(&graph)
            .max_paths(MAX_PATHS)
            .run_between_sets(&starts, &ends)
            .map(|paths| paths.len())
    });
}
