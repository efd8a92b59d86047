//! Find the way out of Mount Moon.
//!
//! Run: cargo run --bin mtmoon

use cavern_demos::{describe, describe_cost, mount_moon, mount_moon_heuristic};
use cavern_paths::{Zero, find_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = mount_moon();
    println!("Mount Moon:");
    for room in graph.locations() {
        let exits: Vec<String> = graph
            .neighbors(room)
            .map(|(to, w)| format!("{to} ({w})"))
            .collect();
        println!("  {room}: {}", exits.join(", "));
    }

    let start = "Mount Moon".to_string();
    let exit = "Exit".to_string();

    let blind = find_path(&graph, &start, &exit, &Zero)?;
    println!(
        "\nuniform cost: {} [cost {}, {} rooms expanded]",
        describe(&blind.path),
        describe_cost(blind.cost),
        blind.expanded
    );

    let guided = find_path(&graph, &start, &exit, &mount_moon_heuristic())?;
    println!(
        "a*:           {} [cost {}, {} rooms expanded]",
        describe(&guided.path),
        describe_cost(guided.cost),
        guided.expanded
    );

    Ok(())
}
