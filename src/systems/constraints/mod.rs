//! Constraint projection phase
//!
//! Each pass runs floor, walls, then sphere pairs. Passes repeat a fixed
//! number of times per substep; there is no early exit on convergence so
//! that the cost and the result of a tick only depend on the inputs.

mod contacts;
mod floor;
mod walls;

pub use contacts::{project_contacts, ContactSweep};
pub use floor::project_floor;
pub use walls::project_walls;

use crate::domain::SolverParams;
use crate::spatial::BodyStore;

/// Per-step counters, summed over all passes and substeps. They saturate
/// instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverCounters {
    pub pair_checks: u64,
    pub contacts_resolved: u64,
    pub floor_contacts: u64,
    pub wall_contacts: u64,
}

/// Run `params.iterations` constraint passes over the store.
pub fn solve(store: &mut BodyStore, params: &SolverParams, counters: &mut SolverCounters) {
    for _ in 0..params.iterations {
        let floor = project_floor(store, params.friction);
        counters.floor_contacts = counters.floor_contacts.saturating_add(u64::from(floor));
        let walls = project_walls(store, params.world_half_extent, params.wall_restitution);
        counters.wall_contacts = counters.wall_contacts.saturating_add(u64::from(walls));

        let sweep = project_contacts(store, params.contact_epsilon);
        counters.pair_checks = counters.pair_checks.saturating_add(sweep.pair_checks);
        counters.contacts_resolved = counters.contacts_resolved.saturating_add(sweep.resolved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyInit;

    fn chain() -> BodyStore {
        let mut store = BodyStore::new();
        for x in [-1.5f32, 0.0, 1.5] {
            store.add(BodyInit::new([x, 5.0, 0.0], [0.0; 3], 1.0)).unwrap();
        }
        store
    }

    fn max_penetration(store: &BodyStore) -> f32 {
        let mut worst = 0.0f32;
        for i in 0..store.len() {
            for j in (i + 1)..store.len() {
                let d = store.position(i).distance(store.position(j));
                worst = worst.max(store.radius(i) + store.radius(j) - d);
            }
        }
        worst
    }

    #[test]
    fn more_passes_leave_less_overlap() {
        let mut last = f32::INFINITY;
        for iterations in [1u32, 2, 4, 8] {
            let mut params = SolverParams::default();
            params.iterations = iterations;
            let mut store = chain();
            let mut counters = SolverCounters::default();

            solve(&mut store, &params, &mut counters);

            let pen = max_penetration(&store);
            assert!(pen < last, "{} passes: {} !< {}", iterations, pen, last);
            last = pen;
        }
        assert!(last < 1e-3);
    }

    #[test]
    fn counters_accumulate_across_passes() {
        let mut params = SolverParams::default();
        params.iterations = 3;
        let mut store = chain();
        let mut counters = SolverCounters::default();
        solve(&mut store, &params, &mut counters);
        assert_eq!(counters.pair_checks, 9);
        assert!(counters.contacts_resolved >= 2);
        assert_eq!(counters.floor_contacts, 0);
        assert_eq!(counters.wall_contacts, 0);
    }

    #[test]
    fn counters_run_past_u32_and_saturate() {
        let params = SolverParams { iterations: 3, ..SolverParams::default() };

        let mut counters = SolverCounters {
            pair_checks: u64::from(u32::MAX),
            ..SolverCounters::default()
        };
        solve(&mut chain(), &params, &mut counters);
        assert_eq!(counters.pair_checks, u64::from(u32::MAX) + 9);

        let mut counters = SolverCounters {
            pair_checks: u64::MAX - 1,
            contacts_resolved: u64::MAX,
            ..SolverCounters::default()
        };
        solve(&mut chain(), &params, &mut counters);
        assert_eq!(counters.pair_checks, u64::MAX);
        assert_eq!(counters.contacts_resolved, u64::MAX);
    }
}
