use std::marker::PhantomData;

use anyhow::Result;
use coord::{SurfaceDescriptor, SurfaceExtent};
use surface_types::{SurfaceElement, SurfaceHandle, SurfaceKind};
use surfcast_dispatch::SurfaceProvider;

/// Lightweight typed handle: (SurfaceHandle, kind, element type)
pub struct TypedSurface<T: SurfaceElement> {
    handle: SurfaceHandle,
    kind: SurfaceKind,
    _marker: PhantomData<T>,
}

impl<T: SurfaceElement> TypedSurface<T> {
    /// Allocate a zero-filled surface holding `T` elements.
    pub fn alloc(
        provider: &dyn SurfaceProvider,
        kind: SurfaceKind,
        extent: SurfaceExtent,
    ) -> Result<Self> {
        let desc = SurfaceDescriptor { kind, extent, element: T::DESC };
        let handle = provider.create_surface(&desc)?;
        Ok(TypedSurface { handle, kind, _marker: PhantomData })
    }

    /// The underlying opaque handle
    pub fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    /// The addressing mode this surface was allocated with
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Release the backing surface; later accesses through the handle trap.
    pub fn release(self, provider: &dyn SurfaceProvider) {
        provider.destroy_surface(self.handle);
    }
}
