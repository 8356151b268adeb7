use crate::{life::Simulator, Grid, Snapshot};
use serde::Serialize;
use std::time::Instant;

/// Snapshots for generations `0..=last_generation`, indexed by generation.
#[derive(Clone, Debug, Serialize)]
pub struct SnapshotHistory {
    rows: usize,
    cols: usize,
    snapshots: Vec<Snapshot>,
}

/// Precomputes every generation of `initial` up to and including `generations`.
///
/// Entry 0 is the initial state, entry `generations` is the state after that
/// many steps.
pub fn simulate_all(initial: Grid, generations: u64) -> SnapshotHistory {
    let (rows, cols) = (initial.rows(), initial.cols());
    tracing::info!(rows, cols, generations, "precomputing generations");
    let timer = Instant::now();

    let mut simulator = Simulator::new(initial);
    let mut snapshots = Vec::new();
    let capacity = usize::try_from(generations)
        .ok()
        .and_then(|n| n.checked_add(1));
    if let Some(n) = capacity {
        if snapshots.try_reserve_exact(n).is_err() {
            tracing::warn!(generations, "cannot preallocate snapshots, growing on demand");
        }
    }
    loop {
        let snapshot = Snapshot::build(simulator.grid());
        tracing::debug!(
            generation = simulator.generation(),
            population = snapshot.population(),
            "captured"
        );
        snapshots.push(snapshot);
        if simulator.generation() == generations {
            break;
        }
        simulator.step();
    }

    tracing::info!(
        snapshots = snapshots.len(),
        elapsed_ms = timer.elapsed().as_secs_f64() * 1e3,
        "precomputation finished"
    );
    SnapshotHistory {
        rows,
        cols,
        snapshots,
    }
}

impl SnapshotHistory {
    pub fn get(&self, generation: u64) -> Option<&Snapshot> {
        self.snapshots.get(usize::try_from(generation).ok()?)
    }

    /// Number of stored snapshots, always `last_generation() + 1`.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last_generation(&self) -> u64 {
        self.snapshots.len() as u64 - 1
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Snapshot)> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(i, s)| (i as u64, s))
    }
}
