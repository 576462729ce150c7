pub mod builtin;
pub mod provider;
pub mod table;

use std::collections::HashMap;

use surface_types::{BoundaryMode, CoordTuple, ElementDescriptor, Lanes, SurfaceHandle, SurfaceKind};
use surfcast_core::{Direction, SurfaceBackend};

pub use provider::{ProviderFactory, RegistrationInfo, SurfaceProvider};
use table::primitive_for;

/// Register a surface provider with the inventory system
#[macro_export]
macro_rules! register_provider {
    ($provider_type:ident) => {
        inventory::submit! {
            $crate::ProviderFactory {
                name: <$provider_type as $crate::RegistrationInfo>::NAME,
                factory: || Box::new($provider_type::new()),
            }
        }
    };
}

/// Issue the one load primitive matching the request and return its raw
/// lanes, widened per the hardware convention.
pub fn read_lanes<B: SurfaceBackend + ?Sized>(
    backend: &B,
    element: ElementDescriptor,
    kind: SurfaceKind,
    boundary: BoundaryMode,
    surf: SurfaceHandle,
    coords: CoordTuple,
) -> Lanes {
    debug_assert_eq!(coords.len, kind.coordinate_count());
    let op = primitive_for(element.class(), kind).opcode(Direction::Load, boundary);
    backend.load(op, surf, coords)
}

/// Mirror of `read_lanes` for stores.
pub fn write_lanes<B: SurfaceBackend + ?Sized>(
    backend: &B,
    element: ElementDescriptor,
    kind: SurfaceKind,
    boundary: BoundaryMode,
    surf: SurfaceHandle,
    coords: CoordTuple,
    lanes: Lanes,
) {
    debug_assert_eq!(coords.len, kind.coordinate_count());
    debug_assert_eq!(lanes.count, element.lane_count);
    let op = primitive_for(element.class(), kind).opcode(Direction::Store, boundary);
    backend.store(op, surf, coords, lanes)
}

/// Holds all registered providers, looked up by name
pub struct BackendRegistry {
    map: HashMap<&'static str, Box<dyn SurfaceProvider>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    pub fn collect_inventory(&mut self) {
        for factory in inventory::iter::<ProviderFactory> {
            self.register_boxed(factory.name, (factory.factory)());
        }
    }

    /// Register a boxed provider with an explicit name
    pub fn register_boxed(&mut self, name: &'static str, provider: Box<dyn SurfaceProvider>) {
        self.map.insert(name, provider);
    }

    /// Lookup by name
    pub fn get(&self, name: &str) -> Option<&dyn SurfaceProvider> {
        self.map.get(name).map(|b| b.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.map.keys().copied()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coord::{SurfaceDescriptor, SurfaceExtent};
    use surface_types::{LaneCount, LaneWidth};

    fn int2_element() -> ElementDescriptor {
        ElementDescriptor {
            lane_count: LaneCount::Two,
            lane_width: LaneWidth::B32,
            is_float: false,
            signed: true,
        }
    }

    #[test]
    fn registry_finds_builtin_host() {
        let mut reg = BackendRegistry::new();
        reg.collect_inventory();

        assert!(reg.get("host").is_some());
        assert!(reg.get("extremely_strange_provider").is_none());
    }

    #[test]
    fn lane_level_roundtrip_through_registry() {
        let mut reg = BackendRegistry::new();
        reg.collect_inventory();
        let provider = reg.get("host").unwrap();

        let desc = SurfaceDescriptor {
            kind: SurfaceKind::Linear2D,
            extent: SurfaceExtent::two_d(8, 8),
            element: int2_element(),
        };
        let surf = provider.create_surface(&desc).unwrap();

        let mut lanes = Lanes::zeroed(LaneCount::Two);
        lanes.vals = [10, 20, 0, 0];
        let coords = coord::linear_2d(4, 7);

        write_lanes(provider, desc.element, desc.kind, BoundaryMode::Clamp, surf, coords, lanes);
        let back = read_lanes(provider, desc.element, desc.kind, BoundaryMode::Clamp, surf, coords);
        assert_eq!(back.as_slice(), &[10, 20]);

        provider.destroy_surface(surf);
    }

    #[test]
    #[should_panic(expected = "trap")]
    fn dangling_handle_traps() {
        let mut reg = BackendRegistry::new();
        reg.collect_inventory();
        let provider = reg.get("host").unwrap();

        let desc = SurfaceDescriptor {
            kind: SurfaceKind::Linear1D,
            extent: SurfaceExtent::one_d(4),
            element: int2_element(),
        };
        let surf = provider.create_surface(&desc).unwrap();
        provider.destroy_surface(surf);

        let _ = read_lanes(
            provider,
            desc.element,
            desc.kind,
            BoundaryMode::Clamp,
            surf,
            coord::linear_1d(0),
        );
    }
}
