//! Shortest path over a graph read from JSON.
//!
//! Run: cargo run --bin findpath -- <graph.json> <start> <goal> [heuristic.json]
//!
//! The graph file is an object of objects, `{"A": {"B": 2.0}}`; the
//! optional heuristic file maps location names to estimates.

use std::fs;

use cavern_demos::{describe, describe_cost};
use cavern_paths::{Graph, HeuristicTable, PathFinder, Zero};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [graph_file, start, goal, rest @ ..] = args.as_slice() else {
        return Err("usage: findpath <graph.json> <start> <goal> [heuristic.json]".into());
    };

    let graph: Graph<String> = serde_json::from_str(&fs::read_to_string(graph_file)?)?;
    if let Err(e) = graph.validate() {
        log::warn!("{graph_file}: {e}; results may not be optimal");
    }
    log::info!("{graph_file}: {} locations, {} edges", graph.len(), graph.edge_count());

    let finder = PathFinder::default();
    let result = match rest.first() {
        Some(h_file) => {
            let table: HeuristicTable<String> = serde_json::from_str(&fs::read_to_string(h_file)?)?;
            finder.find_path(&graph, start, goal, &table)?
        }
        None => finder.find_path(&graph, start, goal, &Zero)?,
    };

    if result.is_reachable() {
        println!("{}", describe(&result.path));
    } else {
        println!("no path from {start} to {goal}");
    }
    println!("cost: {}", describe_cost(result.cost));
    Ok(())
}
