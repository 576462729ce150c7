pub mod device;
pub mod host;

pub use device::DeviceSurfaces;
pub use host::HostSurfaces;
