//! Randomized checks of A* against exhaustive enumeration.

use cavern_paths::{Cost, Graph, PathFinder, UNREACHABLE, Zero, find_path};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const NODES: u32 = 6;

fn random_graph(rng: &mut StdRng) -> Graph<u32> {
    let mut g = Graph::new();
    for from in 0..NODES {
        g.add_location(from);
        for to in 0..NODES {
            if from != to && rng.random_range(0..100) < 35 {
                g.add_edge(from, to, rng.random_range(0..10) as Cost);
            }
        }
    }
    g
}

/// Cheapest simple path cost by depth-first enumeration.
fn brute_force(g: &Graph<u32>, at: u32, goal: u32, visited: &mut Vec<u32>) -> Cost {
    if at == goal {
        return 0.0;
    }
    visited.push(at);
    let mut best = UNREACHABLE;
    for (&next, w) in g.neighbors(&at) {
        if visited.contains(&next) {
            continue;
        }
        best = best.min(w + brute_force(g, next, goal, visited));
    }
    visited.pop();
    best
}

#[test]
fn matches_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let g = random_graph(&mut rng);
        let start = rng.random_range(0..NODES);
        let goal = rng.random_range(0..NODES);

        let expected = brute_force(&g, start, goal, &mut Vec::new());
        let r = find_path(&g, &start, &goal, &Zero).unwrap();
        assert_eq!(r.cost, expected, "{start} -> {goal} in {g:?}");

        if r.is_reachable() {
            assert_eq!(r.path.first(), Some(&start));
            assert_eq!(r.path.last(), Some(&goal));
            assert_eq!(g.path_cost(&r.path), Some(r.cost));
        } else {
            assert_eq!(r.path, vec![goal]);
        }
    }
}

#[test]
fn admissible_heuristics_never_change_the_cost() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let g = random_graph(&mut rng);
        let start = rng.random_range(0..NODES);
        let goal = rng.random_range(0..NODES);

        // Exact remaining cost, shrunk by a random factor in [0, 1].
        let exact: Vec<Cost> = (0..NODES)
            .map(|l| brute_force(&g, l, goal, &mut Vec::new()))
            .collect();
        let shrink = rng.random_range(0..=100) as Cost / 100.0;
        let h = |l: &u32, _: &u32| {
            let e = exact[*l as usize];
            if e.is_finite() { e * shrink } else { UNREACHABLE }
        };

        let blind = find_path(&g, &start, &goal, &Zero).unwrap();
        let guided = find_path(&g, &start, &goal, &h).unwrap();
        assert_eq!(blind.cost, guided.cost);
        if guided.is_reachable() {
            assert_eq!(g.path_cost(&guided.path), Some(guided.cost));
        }
    }
}

#[test]
fn reachability_matches_finite_cost() {
    let mut rng = StdRng::seed_from_u64(1234);
    let pf = PathFinder::default();
    for _ in 0..100 {
        let g = random_graph(&mut rng);
        let start = rng.random_range(0..NODES);
        let reach = pf.reachable(&g, &start);
        for goal in 0..NODES {
            let r = pf.find_path(&g, &start, &goal, &Zero).unwrap();
            assert_eq!(reach.contains(&goal), r.is_reachable());
        }
    }
}
