use anyhow::Result;
use coord::SurfaceDescriptor;
use memory::{HostPool, Resolved, resolve};
use surface_types::{CoordTuple, Lanes, SurfaceHandle};
use surfcast_core::{OpcodeTag, SurfaceBackend};

use crate::provider::{RegistrationInfo, SurfaceProvider};
use crate::register_provider;

/// Host-memory surfaces: the reference implementation of the primitive
/// seam. Boundary behavior follows the opcode tag exactly; a trap is a
/// panic, matching the fatal hardware fault.
pub struct HostSurfaces {
    pool: HostPool,
}

impl HostSurfaces {
    pub fn new() -> Self {
        Self { pool: HostPool::new() }
    }
}

impl Default for HostSurfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceBackend for HostSurfaces {
    fn load(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple) -> Lanes {
        let out = self.pool.with_entry(surf, |desc, data| {
            let elem = desc.element;
            match resolve(desc.kind, &desc.extent, coords, op.boundary) {
                Resolved::Index(i) => {
                    let n = elem.bytes_per_element();
                    codec::lanes_from_raw(&data[i * n..(i + 1) * n], elem)
                }
                Resolved::Zero => Lanes::zeroed(elem.lane_count),
                Resolved::Fault => panic!(
                    "{}: trap, coordinates {:?} out of range",
                    op.mnemonic(),
                    coords.as_slice()
                ),
            }
        });
        match out {
            Some(lanes) => lanes,
            None => panic!("{}: trap, dangling surface {}", op.mnemonic(), surf),
        }
    }

    fn store(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple, lanes: Lanes) {
        let done = self.pool.with_entry(surf, |desc, data| {
            let elem = desc.element;
            match resolve(desc.kind, &desc.extent, coords, op.boundary) {
                Resolved::Index(i) => {
                    let n = elem.bytes_per_element();
                    codec::lanes_to_raw(lanes, elem, &mut data[i * n..(i + 1) * n]);
                }
                // out-of-range stores are dropped under the zero policy
                Resolved::Zero => {}
                Resolved::Fault => panic!(
                    "{}: trap, coordinates {:?} out of range",
                    op.mnemonic(),
                    coords.as_slice()
                ),
            }
        });
        if done.is_none() {
            panic!("{}: trap, dangling surface {}", op.mnemonic(), surf);
        }
    }
}

impl SurfaceProvider for HostSurfaces {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_surface(&self, desc: &SurfaceDescriptor) -> Result<SurfaceHandle> {
        self.pool.create(*desc)
    }

    fn destroy_surface(&self, surf: SurfaceHandle) {
        self.pool.release(surf);
    }
}

impl RegistrationInfo for HostSurfaces {
    const NAME: &'static str = "host";
}

register_provider!(HostSurfaces);

#[cfg(test)]
mod tests {
    use super::*;
    use coord::SurfaceExtent;
    use surface_types::{BoundaryMode, ElementDescriptor, LaneCount, LaneWidth, SurfaceKind};
    use surfcast_core::Direction;

    fn u8_surface(backend: &HostSurfaces, width: u32) -> (SurfaceHandle, SurfaceDescriptor) {
        let desc = SurfaceDescriptor {
            kind: SurfaceKind::Linear1D,
            extent: SurfaceExtent::one_d(width),
            element: ElementDescriptor {
                lane_count: LaneCount::One,
                lane_width: LaneWidth::B8,
                is_float: false,
                signed: false,
            },
        };
        (backend.create_surface(&desc).unwrap(), desc)
    }

    fn op(desc: &SurfaceDescriptor, direction: Direction, boundary: BoundaryMode) -> OpcodeTag {
        crate::table::primitive_for(desc.element.class(), desc.kind).opcode(direction, boundary)
    }

    #[test]
    fn clamped_store_lands_on_the_edge() {
        let backend = HostSurfaces::new();
        let (surf, desc) = u8_surface(&backend, 4);

        let mut lanes = Lanes::zeroed(LaneCount::One);
        lanes.vals[0] = 0xAB;
        backend.store(
            op(&desc, Direction::Store, BoundaryMode::Clamp),
            surf,
            coord::linear_1d(99),
            lanes,
        );

        let back = backend.load(
            op(&desc, Direction::Load, BoundaryMode::Trap),
            surf,
            coord::linear_1d(3),
        );
        assert_eq!(back.vals[0], 0xAB);
    }

    #[test]
    fn zero_mode_drops_stores_and_zeroes_loads() {
        let backend = HostSurfaces::new();
        let (surf, desc) = u8_surface(&backend, 4);

        let mut lanes = Lanes::zeroed(LaneCount::One);
        lanes.vals[0] = 7;
        backend.store(
            op(&desc, Direction::Store, BoundaryMode::Zero),
            surf,
            coord::linear_1d(-5),
            lanes,
        );

        // the dropped store touched nothing
        for x in 0..4 {
            let back = backend.load(
                op(&desc, Direction::Load, BoundaryMode::Trap),
                surf,
                coord::linear_1d(x),
            );
            assert_eq!(back.vals[0], 0);
        }

        let oob = backend.load(
            op(&desc, Direction::Load, BoundaryMode::Zero),
            surf,
            coord::linear_1d(-5),
        );
        assert_eq!(oob.as_slice(), &[0]);
    }

    #[test]
    #[should_panic(expected = "trap")]
    fn trap_mode_faults_out_of_range() {
        let backend = HostSurfaces::new();
        let (surf, desc) = u8_surface(&backend, 4);
        let _ = backend.load(
            op(&desc, Direction::Load, BoundaryMode::Trap),
            surf,
            coord::linear_1d(4),
        );
    }
}
