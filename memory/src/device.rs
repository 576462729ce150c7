use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use parking_lot::Mutex;

use coord::SurfaceDescriptor;
use surface_types::{ElementDescriptor, SurfaceHandle};
use surfcast_core::GpuContext;
use surfcast_core::types::{AbstractBuffer, BufferKind};

/// Stride of one element slot in a device surface. Slots are padded to
/// 8 bytes so copy offsets and mapped ranges always meet the alignment
/// rules; the layout is private to this pool.
pub fn slot_bytes(element: ElementDescriptor) -> usize {
    element.bytes_per_element().next_multiple_of(8)
}

struct DeviceEntry {
    desc: SurfaceDescriptor,
    buffer: Arc<AbstractBuffer>,
}

/// Surfaces backed by GPU storage buffers, one buffer per surface.
///
/// Per-element IO is staged: a MAP_WRITE buffer carries the slot in, a
/// MAP_READ buffer carries it out, with ranged copies against the main
/// buffer in between.
pub struct DevicePool {
    ctx: GpuContext,
    next_id: AtomicU64,
    entries: Mutex<HashMap<SurfaceHandle, DeviceEntry>>,
}

impl DevicePool {
    pub fn new(ctx: GpuContext) -> Self {
        Self {
            ctx,
            next_id: AtomicU64::new(0),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Allocate a surface buffer, returning its handle. Buffers start
    /// zero-filled per the API contract.
    pub fn create(&self, desc: SurfaceDescriptor) -> Result<SurfaceHandle> {
        desc.validate()?;
        let size = (desc.element_count() * slot_bytes(desc.element)) as u64;
        let buffer = Arc::new(self.ctx.create_buffer(size, BufferKind::Main));
        let id = SurfaceHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.lock().insert(id, DeviceEntry { desc, buffer });
        Ok(id)
    }

    pub fn release(&self, id: SurfaceHandle) {
        self.entries.lock().remove(&id);
    }

    pub fn descriptor(&self, id: SurfaceHandle) -> Option<SurfaceDescriptor> {
        self.entries.lock().get(&id).map(|e| e.desc)
    }

    /// Download one element slot. Returns the full padded slot.
    pub fn read_slot(&self, id: SurfaceHandle, index: usize) -> Option<Vec<u8>> {
        let (buffer, slot) = {
            let entries = self.entries.lock();
            let e = entries.get(&id)?;
            (e.buffer.clone(), slot_bytes(e.desc.element))
        };
        let staging = self.ctx.create_buffer(slot as u64, BufferKind::Download);
        self.ctx
            .copy_buffer_to_buffer(&buffer, (index * slot) as u64, &staging, 0, slot as u64);
        Some(self.ctx.read_buffer(&staging))
    }

    /// Upload one element's packed bytes into its slot. The slot tail past
    /// `bytes` keeps the staging buffer's zero fill.
    pub fn write_slot(&self, id: SurfaceHandle, index: usize, bytes: &[u8]) -> bool {
        let (buffer, slot) = {
            let entries = self.entries.lock();
            let Some(e) = entries.get(&id) else { return false };
            (e.buffer.clone(), slot_bytes(e.desc.element))
        };
        debug_assert!(bytes.len() <= slot);
        let staging = self.ctx.create_buffer(slot as u64, BufferKind::Upload);
        self.ctx.write_buffer(&staging, bytes);
        self.ctx
            .copy_buffer_to_buffer(&staging, 0, &buffer, (index * slot) as u64, slot as u64);
        true
    }
}
