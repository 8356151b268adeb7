use conway_playback::{
    parse_input, simulate_all, step, CellStatus, ColorRole, Grid, InputError, Snapshot,
    MAX_GENERATIONS,
};
use proptest::prelude::*;

const SEED: u64 = 42;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..10, 1usize..10, any::<u64>()).prop_map(|(rows, cols, seed)| {
        Grid::random(rows, cols, Some(seed), 0.4)
    })
}

#[test]
fn history_matches_repeated_steps() {
    const N: u64 = 12;
    let initial = Grid::random(10, 14, Some(SEED), 0.35);
    let history = simulate_all(initial.clone(), N);

    assert_eq!(history.len(), N as usize + 1);
    assert_eq!(history.last_generation(), N);
    assert_eq!(history.get(0), Some(&Snapshot::build(&initial)));

    let mut grid = initial;
    for i in 0..N {
        step(&mut grid);
        assert_eq!(
            history.get(i + 1),
            Some(&Snapshot::build(&grid)),
            "generation {}",
            i + 1
        );
    }
    assert!(history.get(N + 1).is_none());
}

#[test]
fn blinker_file_round_trip() {
    let input = parse_input("2\n00000\n00000\n01110\n00000\n00000\n").unwrap();
    let history = simulate_all(input.grid, input.generations);

    let first = history.get(0).unwrap();
    let second = history.get(1).unwrap();
    let third = history.get(2).unwrap();
    assert_eq!(first, third);
    assert_ne!(first, second);

    // center of the horizontal line
    let center = first.alive.iter().find(|r| (r.row, r.col) == (2, 2)).unwrap();
    assert_eq!(center.neighbors, 2);
    assert_eq!(center.status, CellStatus::Comfortable);
    assert_eq!((center.x, center.y), (2.5, 2.5));

    let ends: Vec<_> = first
        .alive
        .iter()
        .filter(|r| r.status == CellStatus::Lonely)
        .map(|r| (r.row, r.col))
        .collect();
    assert_eq!(ends, vec![(2, 1), (2, 3)]);

    let reborn: Vec<_> = first
        .dead
        .iter()
        .filter(|r| r.status == CellStatus::Reborn)
        .map(|r| (r.row, r.col))
        .collect();
    assert_eq!(reborn, vec![(1, 2), (3, 2)]);
}

#[test]
fn export_is_indexed_by_generation() {
    let history = simulate_all(Grid::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap(), 1);
    let json = serde_json::to_value(&history).unwrap();
    let snapshots = json["snapshots"].as_array().unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(json["rows"], 2);
    assert_eq!(snapshots[1]["alive"].as_array().unwrap().len(), 4);
    assert_eq!(snapshots[0]["dead"][0]["status"], "Reborn");
}

#[test]
fn oversized_generation_count_is_rejected_before_simulating() {
    let data = format!("{}\n1\n", u64::MAX);
    assert!(matches!(
        parse_input(&data),
        Err(InputError::TooManyGenerations { generations: u64::MAX, .. })
    ));

    // the largest accepted count still precomputes every generation
    let input = parse_input(&format!("{}\n1\n", MAX_GENERATIONS)).unwrap();
    let history = simulate_all(input.grid, input.generations);
    assert_eq!(history.len(), MAX_GENERATIONS as usize + 1);
    assert_eq!(history.last_generation(), MAX_GENERATIONS);
    assert_eq!(history.get(MAX_GENERATIONS).map(Snapshot::population), Some(0));
}

proptest! {
    #[test]
    fn every_cell_in_exactly_one_collection(grid in arb_grid()) {
        let snapshot = Snapshot::build(&grid);
        prop_assert_eq!(snapshot.len(), grid.rows() * grid.cols());
        prop_assert_eq!(snapshot.population(), grid.population());

        let mut seen = vec![false; grid.rows() * grid.cols()];
        for record in snapshot.records() {
            let i = record.row * grid.cols() + record.col;
            prop_assert!(!seen[i]);
            seen[i] = true;
            prop_assert_eq!(grid.get(record.row, record.col), record.role == ColorRole::Alive);
            prop_assert_eq!(
                record.status,
                CellStatus::classify(record.role == ColorRole::Alive, record.neighbors)
            );
        }
        prop_assert!(seen.iter().all(|&s| s));
    }
}
