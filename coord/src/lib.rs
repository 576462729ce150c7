use surface_types::{CoordTuple, ElementDescriptor, SurfaceKind};
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Tuple construction                                                        */
/* ------------------------------------------------------------------------- */

pub fn linear_1d(x: i32) -> CoordTuple {
    CoordTuple::of(&[x])
}

pub fn linear_2d(x: i32, y: i32) -> CoordTuple {
    CoordTuple::of(&[x, y])
}

/// 3D addressing wants a four-wide vector; the trailing slot duplicates z.
pub fn linear_3d(x: i32, y: i32, z: i32) -> CoordTuple {
    CoordTuple::of(&[x, y, z, z])
}

/// Layered forms lead with the layer index.
pub fn layered_1d(layer: i32, x: i32) -> CoordTuple {
    CoordTuple::of(&[layer, x])
}

/// Four-wide like 3D; the trailing slot duplicates y.
pub fn layered_2d(layer: i32, x: i32, y: i32) -> CoordTuple {
    CoordTuple::of(&[layer, x, y, y])
}

/// Cubemaps address as layered-2D with the face as the layer. Callers pass
/// `(x, y, face)`; the face moves to the front here.
pub fn cubemap(x: i32, y: i32, face: i32) -> CoordTuple {
    layered_2d(face, x, y)
}

/// Layer-face index: `layer * 6 + face`, precombined by the caller.
pub fn cubemap_layered(x: i32, y: i32, layerface: i32) -> CoordTuple {
    layered_2d(layerface, x, y)
}

/// Total mapping over every kind, for table-driven callers. `y`, `z` and
/// `layer_or_face` are ignored where the kind has no such axis.
pub fn for_kind(kind: SurfaceKind, x: i32, y: i32, z: i32, layer_or_face: i32) -> CoordTuple {
    match kind {
        SurfaceKind::Linear1D => linear_1d(x),
        SurfaceKind::Linear2D => linear_2d(x, y),
        SurfaceKind::Linear3D => linear_3d(x, y, z),
        SurfaceKind::Layered1D => layered_1d(layer_or_face, x),
        SurfaceKind::Layered2D => layered_2d(layer_or_face, x, y),
        SurfaceKind::Cubemap => cubemap(x, y, layer_or_face),
        SurfaceKind::CubemapLayered => cubemap_layered(x, y, layer_or_face),
    }
}

/* ------------------------------------------------------------------------- */
/* Extents and descriptors                                                   */
/* ------------------------------------------------------------------------- */

/// Logical dimensions of a surface. Axes unused by the kind stay 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceExtent {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layers: u32,
}

impl SurfaceExtent {
    pub fn one_d(width: u32) -> Self {
        SurfaceExtent { width, height: 1, depth: 1, layers: 1 }
    }

    pub fn two_d(width: u32, height: u32) -> Self {
        SurfaceExtent { width, height, depth: 1, layers: 1 }
    }

    pub fn three_d(width: u32, height: u32, depth: u32) -> Self {
        SurfaceExtent { width, height, depth, layers: 1 }
    }

    pub fn layered_1d(width: u32, layers: u32) -> Self {
        SurfaceExtent { width, height: 1, depth: 1, layers }
    }

    pub fn layered_2d(width: u32, height: u32, layers: u32) -> Self {
        SurfaceExtent { width, height, depth: 1, layers }
    }

    pub fn cubemap(width: u32, height: u32) -> Self {
        SurfaceExtent { width, height, depth: 1, layers: 6 }
    }

    pub fn cubemap_layered(width: u32, height: u32, count: u32) -> Self {
        SurfaceExtent { width, height, depth: 1, layers: 6 * count }
    }
}

#[derive(Debug, Error)]
pub enum ExtentError {
    #[error("zero-sized dimension for {kind:?}")]
    ZeroExtent { kind: SurfaceKind },
    #[error("cubemap surfaces carry exactly 6 faces, got {layers} layers")]
    CubemapLayers { layers: u32 },
    #[error("layered cubemap layer count {layers} is not a positive multiple of 6")]
    CubemapArrayLayers { layers: u32 },
}

/// Everything the resource layer needs to allocate one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    pub kind: SurfaceKind,
    pub extent: SurfaceExtent,
    pub element: ElementDescriptor,
}

impl SurfaceDescriptor {
    pub fn validate(&self) -> Result<(), ExtentError> {
        let e = &self.extent;
        let used = match self.kind {
            SurfaceKind::Linear1D => e.width > 0,
            SurfaceKind::Linear2D => e.width > 0 && e.height > 0,
            SurfaceKind::Linear3D => e.width > 0 && e.height > 0 && e.depth > 0,
            SurfaceKind::Layered1D => e.width > 0 && e.layers > 0,
            SurfaceKind::Layered2D => e.width > 0 && e.height > 0 && e.layers > 0,
            SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => e.width > 0 && e.height > 0,
        };
        if !used {
            return Err(ExtentError::ZeroExtent { kind: self.kind });
        }
        match self.kind {
            SurfaceKind::Cubemap if e.layers != 6 => {
                Err(ExtentError::CubemapLayers { layers: e.layers })
            }
            SurfaceKind::CubemapLayered if e.layers == 0 || e.layers % 6 != 0 => {
                Err(ExtentError::CubemapArrayLayers { layers: e.layers })
            }
            _ => Ok(()),
        }
    }

    /// Total number of elements backing the surface.
    pub fn element_count(&self) -> usize {
        let e = &self.extent;
        let (w, h, d, l) = (e.width as usize, e.height as usize, e.depth as usize, e.layers as usize);
        match self.kind {
            SurfaceKind::Linear1D => w,
            SurfaceKind::Linear2D => w * h,
            SurfaceKind::Linear3D => w * h * d,
            SurfaceKind::Layered1D => w * l,
            SurfaceKind::Layered2D | SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => w * h * l,
        }
    }
}

/// Row-major element index for resolved, in-bounds logical coordinates.
pub fn linear_index(kind: SurfaceKind, extent: &SurfaceExtent, x: u32, y: u32, z: u32, layer: u32) -> usize {
    let w = extent.width as usize;
    let h = extent.height as usize;
    let (x, y, z, layer) = (x as usize, y as usize, z as usize, layer as usize);
    match kind {
        SurfaceKind::Linear1D => x,
        SurfaceKind::Linear2D => y * w + x,
        SurfaceKind::Linear3D => (z * h + y) * w + x,
        SurfaceKind::Layered1D => layer * w + x,
        SurfaceKind::Layered2D | SurfaceKind::Cubemap | SurfaceKind::CubemapLayered => {
            (layer * h + y) * w + x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_types::{LaneCount, LaneWidth};

    #[test]
    fn tuple_lengths_match_kinds() {
        for kind in SurfaceKind::ALL {
            let t = for_kind(kind, 1, 2, 3, 4);
            assert_eq!(t.len, kind.coordinate_count(), "kind {:?}", kind);
        }
    }

    #[test]
    fn trailing_padding_duplicates_last_axis() {
        let t = linear_3d(2, 3, 4);
        assert_eq!(t.vals, [2, 3, 4, 4]);

        for kind in [SurfaceKind::Layered2D, SurfaceKind::Cubemap, SurfaceKind::CubemapLayered] {
            let t = for_kind(kind, 7, 9, 0, 3);
            assert_eq!(t.vals[2], t.vals[3], "kind {:?}", kind);
        }
    }

    #[test]
    fn layered_forms_lead_with_the_index() {
        assert_eq!(layered_1d(5, 11).as_slice(), &[5, 11]);
        assert_eq!(layered_2d(5, 11, 13).as_slice(), &[5, 11, 13, 13]);
    }

    #[test]
    fn cubemap_reorders_face_first() {
        // callers pass (x, y, face); addressing wants the face in front
        let t = cubemap(10, 20, 3);
        assert_eq!(t.as_slice(), &[3, 10, 20, 20]);

        let t = cubemap_layered(10, 20, 9);
        assert_eq!(t.as_slice(), &[9, 10, 20, 20]);
    }

    #[test]
    fn descriptor_validation() {
        let element = ElementDescriptor {
            lane_count: LaneCount::One,
            lane_width: LaneWidth::B32,
            is_float: false,
            signed: true,
        };

        let good = SurfaceDescriptor {
            kind: SurfaceKind::Linear2D,
            extent: SurfaceExtent::two_d(8, 8),
            element,
        };
        assert!(good.validate().is_ok());
        assert_eq!(good.element_count(), 64);

        let zero = SurfaceDescriptor {
            kind: SurfaceKind::Linear2D,
            extent: SurfaceExtent::two_d(8, 0),
            element,
        };
        assert!(matches!(zero.validate(), Err(ExtentError::ZeroExtent { .. })));

        let bad_cube = SurfaceDescriptor {
            kind: SurfaceKind::Cubemap,
            extent: SurfaceExtent { width: 4, height: 4, depth: 1, layers: 5 },
            element,
        };
        assert!(matches!(bad_cube.validate(), Err(ExtentError::CubemapLayers { layers: 5 })));

        let bad_array = SurfaceDescriptor {
            kind: SurfaceKind::CubemapLayered,
            extent: SurfaceExtent { width: 4, height: 4, depth: 1, layers: 8 },
            element,
        };
        assert!(matches!(
            bad_array.validate(),
            Err(ExtentError::CubemapArrayLayers { layers: 8 })
        ));
    }

    #[test]
    fn row_major_indexing() {
        let e = SurfaceExtent::three_d(4, 3, 2);
        assert_eq!(linear_index(SurfaceKind::Linear3D, &e, 0, 0, 0, 0), 0);
        assert_eq!(linear_index(SurfaceKind::Linear3D, &e, 3, 2, 1, 0), 23);

        let e = SurfaceExtent::layered_2d(4, 3, 5);
        assert_eq!(linear_index(SurfaceKind::Layered2D, &e, 1, 2, 0, 4), 4 * 12 + 2 * 4 + 1);
    }
}
