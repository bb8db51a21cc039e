use crate::spatial::BodyStore;

#[inline]
fn contain_axis(p: &mut f32, v: &mut f32, half_extent: f32, restitution: f32) -> bool {
    if p.abs() > half_extent {
        *p = if *p > 0.0 { half_extent } else { -half_extent };
        *v *= restitution;
        true
    } else {
        false
    }
}

/// Clamp x and z into `[-half_extent, half_extent]`, reflecting the matching
/// velocity component by `restitution` (negative = bounce back).
///
/// Returns the number of axis hits.
pub fn project_walls(store: &mut BodyStore, half_extent: f32, restitution: f32) -> u32 {
    let mut hits = 0;
    for (p, v) in store.positions.iter_mut().zip(store.velocities.iter_mut()) {
        if contain_axis(&mut p.x, &mut v.x, half_extent, restitution) {
            hits += 1;
        }
        if contain_axis(&mut p.z, &mut v.z, half_extent, restitution) {
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyInit;

    #[test]
    fn clamps_each_axis_independently() {
        let mut store = BodyStore::new();
        store.add(BodyInit::new([25.0, 5.0, -30.0], [4.0, 1.0, -2.0], 1.0)).unwrap();
        store.add(BodyInit::new([-19.0, 5.0, 3.0], [-4.0, 1.0, 2.0], 1.0)).unwrap();

        assert_eq!(project_walls(&mut store, 20.0, -0.5), 2);

        let p = store.position(0);
        let v = store.velocity(0);
        assert_eq!((p.x, p.z), (20.0, -20.0));
        assert_eq!((v.x, v.y, v.z), (-2.0, 1.0, 1.0));

        assert_eq!(store.position(1).x, -19.0);
        assert_eq!(store.velocity(1).x, -4.0);
    }
}
