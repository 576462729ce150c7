use anyhow::Result;
use coord::SurfaceDescriptor;
use surface_types::SurfaceHandle;
use surfcast_core::SurfaceBackend;

/// Trait to implement for each surface provider: the primitive seam plus
/// the resource lifecycle the reference backends stand in for.
pub trait SurfaceProvider: SurfaceBackend + Send + Sync {
    /// Provider name, matching its registry key
    fn name(&self) -> &'static str;

    /// Allocate a zero-filled surface described by `desc`
    fn create_surface(&self, desc: &SurfaceDescriptor) -> Result<SurfaceHandle>;

    /// Release a surface; later accesses through the handle trap
    fn destroy_surface(&self, surf: SurfaceHandle);
}

/// Wrapper for provider factory functions
pub struct ProviderFactory {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn SurfaceProvider>,
}

// Collect all registered providers
inventory::collect!(ProviderFactory);

/// Trait to implement for each provider to work with inventory
pub trait RegistrationInfo {
    /// Unique name for the provider
    const NAME: &'static str;
}
