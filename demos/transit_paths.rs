//! Enumerates all routes between a set of boarding stops and a set of
//! destination stops in a small transit network.
//!
//! Run with `RUST_LOG=pathgraph=debug` to see the enumeration progress.

use pathgraph::{core::Error, infra::export::Dot, Graph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const STOPS: [u32; 16] = [
    23, 12, 14, 30, 17, 29, 18, 27, 21, 22, 15, 16, 19, 28, 24, 13,
];

const CONNECTIONS: [(u32, u32); 16] = [
    (23, 12),
    (12, 14),
    (14, 30),
    (30, 17),
    (17, 29),
    (29, 18),
    (18, 27),
    (18, 19),
    (21, 14),
    (22, 15),
    (15, 16),
    (16, 17),
    (16, 19),
    (19, 28),
    (24, 13),
    (13, 15),
];

const BOARDING: [u32; 6] = [23, 21, 22, 24, 30, 29];
const DESTINATIONS: [u32; 4] = [30, 29, 27, 28];

fn main() -> Result<(), Error<u32>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut graph = Graph::with_capacity(STOPS.len());

    graph.extend_with_vertices(STOPS.iter().map(|&stop| (stop, format!("V{stop}"))))?;
    graph.extend_with_edges(
        CONNECTIONS
            .iter()
            .map(|&(from, to)| (from, to, format!("Edge from {from} to {to}"))),
    )?;

    print!("{graph}");

    if std::env::args().any(|arg| arg == "--dot") {
        print!("{}", Dot::with_display(Some(String::from("Transit"))).to_string(&graph));
    }

    println!();
    println!("All paths found:");

    let paths = graph.find_all_paths_between_sets(&BOARDING, &DESTINATIONS)?;

    for path in paths.iter() {
        let stops = path.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("{}", stops.join(" -> "));
    }

    println!("{} paths", paths.len());

    Ok(())
}
