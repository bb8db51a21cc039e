//! Indexing macro for the body store hot loops
//!
//! `fast!` indexes with bounds checks in debug builds and with
//! `get_unchecked` in release builds. The pair pass is its only caller, and
//! every index it passes is below `BodyStore::len()`.
//!
//! Usage:
//! ```rust
//! use pbd_kernel::fast;
//!
//! let idx = 2;
//!
//! let radii = vec![0.5f32, 1.0, 1.5, 2.0];
//! // Read: fast!(slice, [index])
//! let r = *fast!(radii, [idx]);
//! assert_eq!(r, 1.5);
//!
//! let mut inv_mass = vec![1.0f32; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(inv_mass, [idx] = 0.0);
//! assert_eq!(inv_mass[idx], 0.0);
//! ```

/// `fast!(slice, [i])` reads, `fast!(slice, [i] = v)` writes.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn reads_by_index() {
        let radii = vec![0.5f32, 1.0, 1.5];
        assert_eq!(*fast!(radii, [2]), 1.5);
    }

    #[test]
    fn writes_by_index() {
        let mut positions = vec![crate::core::Vec3::zero(); 3];
        fast!(positions, [1] = crate::core::Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(positions[1].y, 2.0);
        assert_eq!(positions[0], crate::core::Vec3::zero());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_panics_in_debug() {
        let radii = vec![1.0f32, 2.0];
        let _ = *fast!(radii, [10]);
    }
}
