//! Shortest path across a text tile map.
//!
//! Run: cargo run --bin tilepath -- <map.txt> <x,y> <x,y> [--diagonals]
//!
//! Maps use `.` for floor, `#` for walls and `H` for ladders. The path is
//! drawn over the map with `*`.

use std::fs;

use cavern_core::Point;
use cavern_demos::{describe_cost, parse_point};
use cavern_map::{TileGraphConfig, TileMap};
use cavern_paths::{Chebyshev, Manhattan, PathResult, find_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [map_file, from, to, flags @ ..] = args.as_slice() else {
        return Err("usage: tilepath <map.txt> <x,y> <x,y> [--diagonals]".into());
    };
    let from = parse_point(from).ok_or_else(|| format!("bad coordinate {from:?}"))?;
    let to = parse_point(to).ok_or_else(|| format!("bad coordinate {to:?}"))?;

    let map = TileMap::parse(&fs::read_to_string(map_file)?)?;
    let config = TileGraphConfig::default().diagonals(flags.iter().any(|f| f == "--diagonals"));
    let graph = map.to_graph(&config);

    let result = if config.diagonals {
        find_path(&graph, &from, &to, &Chebyshev::new(config.min_step()))?
    } else {
        find_path(&graph, &from, &to, &Manhattan::new(config.min_step()))?
    };

    print!("{}", render(&map, &result));
    println!(
        "cost: {} ({} tiles expanded)",
        describe_cost(result.cost),
        result.expanded
    );
    Ok(())
}

fn render(map: &TileMap, result: &PathResult<Point>) -> String {
    let mut out = String::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            match map.at(p) {
                Some(_) if result.is_reachable() && result.path.contains(&p) => out.push('*'),
                Some(t) => out.push(t.rune()),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}
