pub mod types;

use anyhow::Result;
use std::sync::Arc;
use wgpu::{CommandEncoder, CommandEncoderDescriptor, Device, Instance, PollType, Queue};

use types::{AbstractBuffer, BufferKind};

pub use types::{Direction, OpcodeTag, SurfaceBackend};

/// Context for GPU buffer traffic
#[derive(Clone)]
pub struct GpuContext {
    pub device: Arc<Device>,
    pub queue: Arc<Queue>,
}

impl GpuContext {
    /* ------------------------------------------------------------------ */
    /* Construction                                                       */
    /* ------------------------------------------------------------------ */
    pub async fn new() -> Result<Self> {
        let instance = Instance::default();
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .map_err(|e| anyhow::anyhow!("No suitable adapter found: {}", e))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    /* ------------------------------------------------------------------ */
    /* Buffers                                                            */
    /* ------------------------------------------------------------------ */

    /// Allocate an uninitialised GPU buffer.
    pub fn create_buffer(&self, size: u64, usage: BufferKind) -> AbstractBuffer {
        AbstractBuffer(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: None,
            size,
            usage: usage.into(),
            mapped_at_creation: false,
        }))
    }

    /// Blocking write: map-write, copy `data`, unmap.
    pub fn write_buffer(&self, buffer: &AbstractBuffer, data: &[u8]) {
        let wgpu_buffer = buffer.raw();
        let slice = wgpu_buffer.slice(..);
        slice.map_async(wgpu::MapMode::Write, |_| ());
        // wait
        self.device.poll(PollType::Wait).expect("Device poll failed");
        slice.get_mapped_range_mut()[..data.len()].copy_from_slice(data);
        wgpu_buffer.unmap();
    }

    /// Blocking read: map-read entire buffer, return Vec<u8>.
    pub fn read_buffer(&self, buffer: &AbstractBuffer) -> Vec<u8> {
        let wgpu_buffer = buffer.raw();
        let slice = wgpu_buffer.slice(..);
        slice.map_async(wgpu::MapMode::Read, |_| ());
        self.device.poll(PollType::Wait).expect("Device poll failed");
        let data = slice.get_mapped_range().to_vec();
        wgpu_buffer.unmap();
        data
    }

    /* ------------------------------------------------------------------ */
    /* Encoder helpers                                                    */
    /* ------------------------------------------------------------------ */
    fn create_encoder(&self, label: &str) -> CommandEncoder {
        self.device
            .create_command_encoder(&CommandEncoderDescriptor { label: Some(label) })
    }

    fn submit_encoder(&self, encoder: CommandEncoder) {
        self.queue.submit(Some(encoder.finish()));
    }

    /// Ranged copy; offsets and size must hold to the 4-byte copy alignment.
    pub fn copy_buffer_to_buffer(
        &self,
        src: &AbstractBuffer,
        src_offset: u64,
        dst: &AbstractBuffer,
        dst_offset: u64,
        size: u64,
    ) {
        let mut enc = self.create_encoder("copy-b2b");
        enc.copy_buffer_to_buffer(src.raw(), src_offset, dst.raw(), dst_offset, size);
        self.submit_encoder(enc);
    }
}
