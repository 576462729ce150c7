use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use parking_lot::Mutex;

use coord::SurfaceDescriptor;
use surface_types::SurfaceHandle;

struct HostEntry {
    desc: SurfaceDescriptor,
    data: Vec<u8>,
}

/// thread-safe pool of host-resident surfaces
pub struct HostPool {
    next_id: AtomicU64,
    entries: Mutex<HashMap<SurfaceHandle, HostEntry>>,
}

impl HostPool {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Allocate a zero-filled surface, returning its handle.
    pub fn create(&self, desc: SurfaceDescriptor) -> Result<SurfaceHandle> {
        desc.validate()?;
        let bytes = desc.element_count() * desc.element.bytes_per_element();
        let id = SurfaceHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().insert(id, HostEntry { desc, data: vec![0u8; bytes] });
        Ok(id)
    }

    /// Explicitly release a surface by its handle
    pub fn release(&self, id: SurfaceHandle) {
        self.entries.lock().remove(&id);
    }

    pub fn contains(&self, id: SurfaceHandle) -> bool {
        self.entries.lock().contains_key(&id)
    }

    pub fn descriptor(&self, id: SurfaceHandle) -> Option<SurfaceDescriptor> {
        self.entries.lock().get(&id).map(|e| e.desc)
    }

    /// Run `f` against the descriptor and backing bytes of one surface.
    pub fn with_entry<R>(
        &self,
        id: SurfaceHandle,
        f: impl FnOnce(&SurfaceDescriptor, &mut [u8]) -> R,
    ) -> Option<R> {
        let mut entries = self.entries.lock();
        let entry = entries.get_mut(&id)?;
        Some(f(&entry.desc, &mut entry.data))
    }
}

impl Default for HostPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coord::SurfaceExtent;
    use surface_types::{ElementDescriptor, LaneCount, LaneWidth, SurfaceKind};

    fn int2_desc() -> SurfaceDescriptor {
        SurfaceDescriptor {
            kind: SurfaceKind::Linear2D,
            extent: SurfaceExtent::two_d(8, 4),
            element: ElementDescriptor {
                lane_count: LaneCount::Two,
                lane_width: LaneWidth::B32,
                is_float: false,
                signed: true,
            },
        }
    }

    #[test]
    fn test_allocate_and_free() {
        let pool = HostPool::new();
        let id = pool.create(int2_desc()).unwrap();
        assert!(pool.contains(id));

        let bytes = pool.with_entry(id, |desc, data| {
            assert_eq!(desc.kind, SurfaceKind::Linear2D);
            data.len()
        });
        // 8 * 4 elements of 8 bytes each, zero-filled
        assert_eq!(bytes, Some(256));

        pool.release(id);
        assert!(!pool.contains(id));
        assert!(pool.with_entry(id, |_, _| ()).is_none());
    }

    #[test]
    fn rejects_invalid_descriptors() {
        let pool = HostPool::new();
        let mut desc = int2_desc();
        desc.extent.height = 0;
        assert!(pool.create(desc).is_err());
    }
}
