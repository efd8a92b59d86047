//! Shared data and helpers for the cavern demo programs.

use std::fmt::Display;

use cavern_core::Point;
use cavern_paths::{Cost, Graph, HeuristicTable};

/// The Mount Moon room graph.
pub fn mount_moon() -> Graph<String> {
    let edges = [
        ("Mount Moon", "Room1", 2.0),
        ("Mount Moon", "Room2", 4.0),
        ("Room1", "Room3", 1.0),
        ("Room1", "Room4", 7.0),
        ("Room2", "Room4", 3.0),
        ("Room3", "Exit", 5.0),
        ("Room4", "Exit", 2.0),
    ];
    let mut g: Graph<String> = edges
        .into_iter()
        .map(|(from, to, w)| (from.to_string(), to.to_string(), w))
        .collect();
    g.add_location("Exit".to_string());
    g
}

/// Admissible estimates of the remaining cost to `Exit` in [`mount_moon`].
pub fn mount_moon_heuristic() -> HeuristicTable<String> {
    [
        ("Mount Moon", 7.0),
        ("Room1", 6.0),
        ("Room2", 5.0),
        ("Room3", 5.0),
        ("Room4", 2.0),
        ("Exit", 0.0),
    ]
    .into_iter()
    .map(|(l, h)| (l.to_string(), h))
    .collect()
}

/// Render a path as `a -> b -> c`.
pub fn describe<L: Display>(path: &[L]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render a cost, spelling out the unreachable sentinel.
pub fn describe_cost(cost: Cost) -> String {
    if cost.is_finite() {
        cost.to_string()
    } else {
        "unreachable".to_string()
    }
}

/// Parse an `x,y` command line coordinate.
pub fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cavern_paths::{Heuristic, Zero, find_path};

    #[test]
    fn reference_route() {
        let g = mount_moon();
        let start = "Mount Moon".to_string();
        let exit = "Exit".to_string();
        for r in [
            find_path(&g, &start, &exit, &Zero).unwrap(),
            find_path(&g, &start, &exit, &mount_moon_heuristic()).unwrap(),
        ] {
            assert_eq!(r.cost, 8.0);
            assert_eq!(describe(&r.path), "Mount Moon -> Room1 -> Room3 -> Exit");
        }
    }

    #[test]
    fn heuristic_is_admissible() {
        let g = mount_moon();
        let h = mount_moon_heuristic();
        let exit = "Exit".to_string();
        for room in g.locations() {
            let truth = find_path(&g, room, &exit, &Zero).unwrap().cost;
            assert!(h.estimate(room, &exit) <= truth, "{room}");
        }
    }

    #[test]
    fn bundled_json_matches() {
        let g: Graph<String> = serde_json::from_str(include_str!("../data/mtmoon.json")).unwrap();
        assert_eq!(g, mount_moon());
        let h: HeuristicTable<String> =
            serde_json::from_str(include_str!("../data/mtmoon_heuristic.json")).unwrap();
        assert_eq!(h, mount_moon_heuristic());
    }

    #[test]
    fn points_and_costs() {
        assert_eq!(parse_point("3, 4"), Some(Point::new(3, 4)));
        assert_eq!(parse_point("3"), None);
        assert_eq!(parse_point("a,1"), None);
        assert_eq!(describe_cost(8.0), "8");
        assert_eq!(describe_cost(cavern_paths::UNREACHABLE), "unreachable");
    }
}
