use anyhow::Result;
use codec::MAX_ELEMENT_BYTES;
use coord::SurfaceDescriptor;
use memory::{DevicePool, Resolved, resolve};
use surface_types::{CoordTuple, Lanes, SurfaceHandle};
use surfcast_core::{GpuContext, OpcodeTag, SurfaceBackend};

use crate::provider::SurfaceProvider;

/// GPU-buffer surfaces behind the same primitive seam. Boundary policy is
/// resolved before any buffer traffic, so host and device backends are
/// observationally identical.
///
/// Not in the inventory registry: construction needs a live `GpuContext`,
/// so callers insert it with `register_boxed`.
pub struct DeviceSurfaces {
    pool: DevicePool,
}

impl DeviceSurfaces {
    pub fn new(ctx: GpuContext) -> Self {
        Self { pool: DevicePool::new(ctx) }
    }
}

impl SurfaceBackend for DeviceSurfaces {
    fn load(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple) -> Lanes {
        let desc = match self.pool.descriptor(surf) {
            Some(d) => d,
            None => panic!("{}: trap, dangling surface {}", op.mnemonic(), surf),
        };
        let elem = desc.element;
        match resolve(desc.kind, &desc.extent, coords, op.boundary) {
            Resolved::Index(i) => {
                let slot = self
                    .pool
                    .read_slot(surf, i)
                    .unwrap_or_else(|| panic!("{}: trap, dangling surface {}", op.mnemonic(), surf));
                codec::lanes_from_raw(&slot[..elem.bytes_per_element()], elem)
            }
            Resolved::Zero => Lanes::zeroed(elem.lane_count),
            Resolved::Fault => panic!(
                "{}: trap, coordinates {:?} out of range",
                op.mnemonic(),
                coords.as_slice()
            ),
        }
    }

    fn store(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple, lanes: Lanes) {
        let desc = match self.pool.descriptor(surf) {
            Some(d) => d,
            None => panic!("{}: trap, dangling surface {}", op.mnemonic(), surf),
        };
        let elem = desc.element;
        match resolve(desc.kind, &desc.extent, coords, op.boundary) {
            Resolved::Index(i) => {
                let n = elem.bytes_per_element();
                let mut raw = [0u8; MAX_ELEMENT_BYTES];
                codec::lanes_to_raw(lanes, elem, &mut raw[..n]);
                if !self.pool.write_slot(surf, i, &raw[..n]) {
                    panic!("{}: trap, dangling surface {}", op.mnemonic(), surf);
                }
            }
            Resolved::Zero => {}
            Resolved::Fault => panic!(
                "{}: trap, coordinates {:?} out of range",
                op.mnemonic(),
                coords.as_slice()
            ),
        }
    }
}

impl SurfaceProvider for DeviceSurfaces {
    fn name(&self) -> &'static str {
        "device"
    }

    fn create_surface(&self, desc: &SurfaceDescriptor) -> Result<SurfaceHandle> {
        self.pool.create(*desc)
    }

    fn destroy_surface(&self, surf: SurfaceHandle) {
        self.pool.release(surf);
    }
}
