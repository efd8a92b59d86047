//! The reference Mount Moon room graph.

use cavern_paths::{
    Graph, HeuristicTable, PathError, PathFinder, SearchConfig, UNREACHABLE, Zero, find_path,
};

fn mount_moon() -> Graph<&'static str> {
    let mut g: Graph<&'static str> = [
        ("Mount Moon", "Room1", 2.0),
        ("Mount Moon", "Room2", 4.0),
        ("Room1", "Room3", 1.0),
        ("Room1", "Room4", 7.0),
        ("Room2", "Room4", 3.0),
        ("Room3", "Exit", 5.0),
        ("Room4", "Exit", 2.0),
    ]
    .into_iter()
    .collect();
    g.add_location("Exit");
    g
}

#[test]
fn zero_heuristic_finds_room3_route() {
    let g = mount_moon();
    let (path, cost) = find_path(&g, &"Mount Moon", &"Exit", &Zero)
        .unwrap()
        .into_parts();
    assert_eq!(path, vec!["Mount Moon", "Room1", "Room3", "Exit"]);
    assert_eq!(cost, 8.0);
    assert_eq!(g.path_cost(&path), Some(cost));
}

#[test]
fn admissible_table_gives_same_answer() {
    let g = mount_moon();
    let h: HeuristicTable<&str> = [
        ("Mount Moon", 7.0),
        ("Room1", 6.0),
        ("Room2", 5.0),
        ("Room3", 5.0),
        ("Room4", 2.0),
        ("Exit", 0.0),
    ]
    .into_iter()
    .collect();
    let r = find_path(&g, &"Mount Moon", &"Exit", &h).unwrap();
    assert_eq!(r.path, vec!["Mount Moon", "Room1", "Room3", "Exit"]);
    assert_eq!(r.cost, 8.0);
}

#[test]
fn mismatched_table_still_finds_optimal_cost() {
    // Names that do not exist in the graph: only "Exit" hits.
    let g = mount_moon();
    let h: HeuristicTable<&str> = [("Mt Moon", 10.0), ("Floor1", 8.0), ("Floor2", 4.0), ("Exit", 0.0)]
        .into_iter()
        .collect();
    let guided = find_path(&g, &"Mount Moon", &"Exit", &h).unwrap();
    let blind = find_path(&g, &"Mount Moon", &"Exit", &Zero).unwrap();
    assert_eq!(guided.cost, 8.0);
    assert_eq!(guided.path, blind.path);
}

#[test]
fn table_without_exit_degrades_to_uniform_cost() {
    // Every lookup misses, the goal included.
    let g = mount_moon();
    let h: HeuristicTable<&str> = [("Mt Moon", 10.0), ("Floor1", 8.0), ("Floor2", 4.0)]
        .into_iter()
        .collect();
    let r = find_path(&g, &"Mount Moon", &"Exit", &h).unwrap();
    assert_eq!(r.path, vec!["Mount Moon", "Room1", "Room3", "Exit"]);
    assert_eq!(r.cost, 8.0);
}

#[test]
fn missing_start_is_an_error_not_unreachable() {
    let g = mount_moon();
    let err = find_path(&g, &"Nowhere", &"Exit", &Zero).unwrap_err();
    assert!(matches!(err, PathError::UndefinedStart(_)));
}

#[test]
fn cutting_edges_into_exit_makes_it_unreachable() {
    let mut g = mount_moon();
    g.remove_edge(&"Room3", &"Exit");
    g.remove_edge(&"Room4", &"Exit");
    let r = find_path(&g, &"Mount Moon", &"Exit", &Zero).unwrap();
    assert_eq!(r.cost, UNREACHABLE);
    assert!(!r.is_reachable());
    assert!(!PathFinder::default().reachable(&g, &"Mount Moon").contains(&"Exit"));
}

#[test]
fn every_room_to_itself() {
    let g = mount_moon();
    for room in g.locations() {
        let r = find_path(&g, room, room, &Zero).unwrap();
        assert_eq!(r.into_parts(), (vec![*room], 0.0));
    }
}

#[test]
fn cost_map_agrees_with_searches() {
    let g = mount_moon();
    let pf = PathFinder::new(SearchConfig::default());
    let map = pf.dijkstra_map(&g, &["Mount Moon"], UNREACHABLE);
    for room in ["Room1", "Room2", "Room3", "Room4", "Exit"] {
        let r = pf.find_path(&g, &"Mount Moon", &room, &Zero).unwrap();
        assert_eq!(map.cost_at(&room), r.cost, "{room}");
    }
    assert_eq!(map.cost_at(&"Room4"), 7.0);
}

#[test]
fn graph_is_shareable_across_threads() {
    let g = mount_moon();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| find_path(&g, &"Mount Moon", &"Exit", &Zero).map(|r| r.cost)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Ok(8.0));
        }
    });
}
