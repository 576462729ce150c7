mod bounds;
mod device;
mod pool;

pub use bounds::{Resolved, resolve};
pub use device::{DevicePool, slot_bytes};
pub use pool::HostPool;
