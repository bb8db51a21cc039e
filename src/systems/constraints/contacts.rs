//! Sphere-sphere non-penetration
//!
//! Brute-force `O(n²)` sweep over unordered pairs in store order. Each
//! correction is written back immediately (Gauss-Seidel), so later pairs in
//! the same pass already see the moved positions. With three or more bodies
//! in one cluster the earlier pairs get a larger share of the correction;
//! repeated passes even it out.

use crate::spatial::BodyStore;

/// Result of one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactSweep {
    pub pair_checks: u64,
    pub resolved: u64,
}

pub fn project_contacts(store: &mut BodyStore, epsilon: f32) -> ContactSweep {
    let n = store.len();
    let positions = &mut store.positions;
    let radii = &store.radii;
    let inverse_masses = &store.inverse_masses;

    let mut sweep = ContactSweep::default();

    for i in 0..n {
        for j in (i + 1)..n {
            sweep.pair_checks += 1;

            let pi = *fast!(positions, [i]);
            let pj = *fast!(positions, [j]);
            let delta = pj - pi;
            let dist2 = delta.length_squared();
            let r_sum = *fast!(radii, [i]) + *fast!(radii, [j]);

            // Coincident centers have no usable normal.
            if dist2 >= r_sum * r_sum || dist2 <= epsilon {
                continue;
            }

            let wi = *fast!(inverse_masses, [i]);
            let wj = *fast!(inverse_masses, [j]);
            let w = wi + wj;
            if w <= 0.0 {
                continue;
            }

            let dist = dist2.sqrt();
            let normal = delta / dist;
            let overlap = r_sum - dist;

            fast!(positions, [i] = pi - normal * (overlap * wi / w));
            fast!(positions, [j] = pj + normal * (overlap * wj / w));
            sweep.resolved += 1;
        }
    }

    sweep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyInit;

    fn pair(wa: f32, wb: f32) -> BodyStore {
        let mut store = BodyStore::new();
        store
            .add(BodyInit::new([-0.75, 5.0, 0.0], [0.0; 3], 1.0).with_inverse_mass(wa))
            .unwrap();
        store
            .add(BodyInit::new([0.75, 5.0, 0.0], [0.0; 3], 1.0).with_inverse_mass(wb))
            .unwrap();
        store
    }

    #[test]
    fn equal_masses_split_overlap_evenly() {
        let mut store = pair(1.0, 1.0);
        let sweep = project_contacts(&mut store, 1e-6);
        assert_eq!(sweep, ContactSweep { pair_checks: 1, resolved: 1 });
        assert_eq!(store.position(0).x, -1.0);
        assert_eq!(store.position(1).x, 1.0);
        assert_eq!(store.position(0).y, 5.0);
    }

    #[test]
    fn correction_follows_inverse_mass_ratio() {
        let mut store = pair(2.0, 1.0);
        project_contacts(&mut store, 1e-6);

        let moved_a = (store.position(0).x - -0.75).abs();
        let moved_b = (store.position(1).x - 0.75).abs();
        assert!((moved_a + moved_b - 0.5).abs() < 1e-6);
        assert!((moved_a / moved_b - 2.0).abs() < 1e-4);
    }

    #[test]
    fn immovable_partner_takes_no_correction() {
        let mut store = pair(0.0, 1.0);
        project_contacts(&mut store, 1e-6);
        assert_eq!(store.position(0).x, -0.75);
        assert!((store.position(1).x - 1.25).abs() < 1e-6);

        // Two pinned bodies stay overlapped.
        let mut pinned = pair(0.0, 0.0);
        assert_eq!(project_contacts(&mut pinned, 1e-6).resolved, 0);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let mut store = BodyStore::new();
        store.add(BodyInit::new([1.0, 2.0, 3.0], [0.0; 3], 1.0)).unwrap();
        store.add(BodyInit::new([1.0, 2.0, 3.0], [0.0; 3], 1.0)).unwrap();
        let sweep = project_contacts(&mut store, 1e-6);
        assert_eq!(sweep.resolved, 0);
        assert_eq!(store.position(0), store.position(1));
    }

    #[test]
    fn touching_spheres_are_left_alone() {
        let mut store = BodyStore::new();
        store.add(BodyInit::new([0.0, 5.0, 0.0], [0.0; 3], 1.0)).unwrap();
        store.add(BodyInit::new([2.0, 5.0, 0.0], [0.0; 3], 1.0)).unwrap();
        assert_eq!(project_contacts(&mut store, 1e-6).resolved, 0);
    }

    #[test]
    fn pairs_are_visited_once_in_store_order() {
        let mut store = BodyStore::new();
        for i in 0..5 {
            store.add(BodyInit::new([i as f32 * 10.0, 5.0, 0.0], [0.0; 3], 1.0)).unwrap();
        }
        assert_eq!(project_contacts(&mut store, 1e-6).pair_checks, 10);
    }
}
