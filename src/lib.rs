//! Typed surface-memory access: generic per-element read/write entry points
//! over a descriptor-driven primitive dispatch.

pub use accessor::{
    TypedSurface, read_1d, read_1d_layered, read_2d, read_2d_layered, read_3d, read_cubemap,
    read_cubemap_layered, write_1d, write_1d_layered, write_2d, write_2d_layered, write_3d,
    write_cubemap, write_cubemap_layered,
};
pub use codec::{decompose, recompose};
pub use coord::{SurfaceDescriptor, SurfaceExtent};
pub use memory::{DevicePool, HostPool};
pub use surface_types::{
    BoundaryMode, CoordTuple, ElementDescriptor, LaneCount, LaneWidth, Lanes, SurfaceElement,
    SurfaceHandle, SurfaceKind, VectorClass,
};
pub use surfcast_core::{Direction, GpuContext, OpcodeTag, SurfaceBackend};
pub use surfcast_dispatch::{
    BackendRegistry, SurfaceProvider,
    builtin::{DeviceSurfaces, HostSurfaces},
    read_lanes, write_lanes,
};
