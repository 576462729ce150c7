use surface_types::{BoundaryMode, SurfaceKind, VectorClass};
use surfcast_core::{Direction, OpcodeTag};

/// One hardware primitive family: an addressing form plus a width class.
/// Direction and boundary mode pick the concrete variant at issue time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Primitive {
    pub geom: &'static str,
    pub class: VectorClass,
}

impl Primitive {
    pub const fn opcode(self, direction: Direction, boundary: BoundaryMode) -> OpcodeTag {
        OpcodeTag {
            direction,
            geom: self.geom,
            class: self.class,
            boundary,
        }
    }
}

/// The total mapping from (class, kind) to a primitive. Every key has
/// exactly one entry; unsupported lane count/width pairs cannot reach here
/// because `VectorClass` has no variant for them.
pub const fn primitive_for(class: VectorClass, kind: SurfaceKind) -> Primitive {
    let geom = match kind {
        SurfaceKind::Linear1D => "1d",
        SurfaceKind::Linear2D => "2d",
        SurfaceKind::Linear3D => "3d",
        SurfaceKind::Layered1D => "a1d",
        // cubemaps address as layered-2D
        SurfaceKind::Layered2D | SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => "a2d",
    };
    Primitive { geom, class }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_combination_selects_one_primitive() {
        for class in VectorClass::ALL {
            for kind in SurfaceKind::ALL {
                let prim = primitive_for(class, kind);
                assert_eq!(prim.class, class);
                assert!(["1d", "2d", "3d", "a1d", "a2d"].contains(&prim.geom));
            }
        }
    }

    #[test]
    fn mnemonics_are_unique_per_variant() {
        // 11 classes x 5 addressing forms x 3 boundary modes x 2 directions;
        // the three layered-2D kinds share one form on purpose
        let mut seen = HashSet::new();
        for class in VectorClass::ALL {
            for kind in SurfaceKind::ALL {
                for boundary in BoundaryMode::ALL {
                    for direction in [Direction::Load, Direction::Store] {
                        seen.insert(primitive_for(class, kind).opcode(direction, boundary).mnemonic());
                    }
                }
            }
        }
        assert_eq!(seen.len(), 11 * 5 * 3 * 2);
    }

    #[test]
    fn boundary_modes_never_collapse() {
        let prim = primitive_for(VectorClass::V2B32, SurfaceKind::Linear2D);
        let ops: Vec<String> = BoundaryMode::ALL
            .iter()
            .map(|&b| prim.opcode(Direction::Load, b).mnemonic())
            .collect();
        assert_eq!(ops.len(), 3);
        assert!(ops.iter().collect::<HashSet<_>>().len() == 3);
    }
}
