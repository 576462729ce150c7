use coord::{SurfaceExtent, linear_index};
use surface_types::{BoundaryMode, CoordTuple, SurfaceKind};

/// Outcome of boundary resolution for one access
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// In-bounds (possibly clamped) element index
    Index(usize),
    /// Out of range; loads substitute zero lanes, stores are dropped
    Zero,
    /// Out of range under the trap policy
    Fault,
}

fn in_range(v: i32, limit: u32) -> bool {
    v >= 0 && (v as u32) < limit
}

fn clamp_axis(v: i32, limit: u32) -> u32 {
    (v as i64).clamp(0, limit as i64 - 1) as u32
}

/// Map a coordinate tuple onto an element index, applying the boundary
/// policy axis by axis. Padding slots in the tuple are never consulted.
pub fn resolve(
    kind: SurfaceKind,
    extent: &SurfaceExtent,
    coords: CoordTuple,
    mode: BoundaryMode,
) -> Resolved {
    let v = coords.vals;
    // up to three addressed axes per kind; unused slots pin to (0, 1)
    let (vals, limits): ([i32; 3], [u32; 3]) = match kind {
        SurfaceKind::Linear1D => ([v[0], 0, 0], [extent.width, 1, 1]),
        SurfaceKind::Linear2D => ([v[0], v[1], 0], [extent.width, extent.height, 1]),
        SurfaceKind::Linear3D => {
            ([v[0], v[1], v[2]], [extent.width, extent.height, extent.depth])
        }
        SurfaceKind::Layered1D => ([v[1], v[0], 0], [extent.width, extent.layers, 1]),
        SurfaceKind::Layered2D | SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => {
            ([v[1], v[2], v[0]], [extent.width, extent.height, extent.layers])
        }
    };

    let mut out = [0u32; 3];
    for i in 0..3 {
        if in_range(vals[i], limits[i]) {
            out[i] = vals[i] as u32;
        } else {
            match mode {
                BoundaryMode::Clamp => out[i] = clamp_axis(vals[i], limits[i]),
                BoundaryMode::Zero => return Resolved::Zero,
                BoundaryMode::Trap => return Resolved::Fault,
            }
        }
    }

    let idx = match kind {
        SurfaceKind::Linear1D => linear_index(kind, extent, out[0], 0, 0, 0),
        SurfaceKind::Linear2D => linear_index(kind, extent, out[0], out[1], 0, 0),
        SurfaceKind::Linear3D => linear_index(kind, extent, out[0], out[1], out[2], 0),
        SurfaceKind::Layered1D => linear_index(kind, extent, out[0], 0, 0, out[1]),
        SurfaceKind::Layered2D | SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => {
            linear_index(kind, extent, out[0], out[1], 0, out[2])
        }
    };
    Resolved::Index(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_resolves_for_every_mode() {
        let e = SurfaceExtent::two_d(8, 4);
        let t = coord::linear_2d(3, 2);
        for mode in BoundaryMode::ALL {
            assert_eq!(resolve(SurfaceKind::Linear2D, &e, t, mode), Resolved::Index(19));
        }
    }

    #[test]
    fn clamp_pins_to_nearest_edge() {
        let e = SurfaceExtent::two_d(8, 4);

        let t = coord::linear_2d(-1, 2);
        assert_eq!(
            resolve(SurfaceKind::Linear2D, &e, t, BoundaryMode::Clamp),
            Resolved::Index(16)
        );

        let t = coord::linear_2d(100, 100);
        assert_eq!(
            resolve(SurfaceKind::Linear2D, &e, t, BoundaryMode::Clamp),
            Resolved::Index(31)
        );
    }

    #[test]
    fn zero_and_trap_outcomes() {
        let e = SurfaceExtent::two_d(8, 4);
        let t = coord::linear_2d(-1, 2);
        assert_eq!(resolve(SurfaceKind::Linear2D, &e, t, BoundaryMode::Zero), Resolved::Zero);
        assert_eq!(resolve(SurfaceKind::Linear2D, &e, t, BoundaryMode::Trap), Resolved::Fault);
    }

    #[test]
    fn layer_index_is_bounded_too() {
        let e = SurfaceExtent::layered_2d(4, 4, 3);
        let t = coord::layered_2d(3, 0, 0);
        assert_eq!(
            resolve(SurfaceKind::Layered2D, &e, t, BoundaryMode::Trap),
            Resolved::Fault
        );
        assert_eq!(
            resolve(SurfaceKind::Layered2D, &e, t, BoundaryMode::Clamp),
            Resolved::Index(2 * 16)
        );
    }

    #[test]
    fn padding_slot_never_faults() {
        // 3D tuples duplicate z into the fourth slot; only x, y, z are read
        let e = SurfaceExtent::three_d(4, 4, 4);
        let t = coord::linear_3d(1, 2, 3);
        assert_eq!(
            resolve(SurfaceKind::Linear3D, &e, t, BoundaryMode::Trap),
            Resolved::Index((3 * 4 + 2) * 4 + 1)
        );
    }
}
