mod typed;

pub use typed::TypedSurface;

use surface_types::{BoundaryMode, SurfaceElement, SurfaceHandle, SurfaceKind};
use surfcast_core::SurfaceBackend;
use surfcast_dispatch::{read_lanes, write_lanes};

/* ------------------------------------------------------------------------- */
/* Linear surfaces                                                           */
/* ------------------------------------------------------------------------- */

/// Read one element from a 1D surface.
pub fn read_1d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, boundary: BoundaryMode) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Linear1D, boundary, surf, coord::linear_1d(x));
    codec::recompose(lanes)
}

/// Write one element to a 1D surface.
pub fn write_1d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, value: T, boundary: BoundaryMode)
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Linear1D, boundary, surf, coord::linear_1d(x), lanes);
}

pub fn read_2d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, y: i32, boundary: BoundaryMode) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Linear2D, boundary, surf, coord::linear_2d(x, y));
    codec::recompose(lanes)
}

pub fn write_2d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, y: i32, value: T, boundary: BoundaryMode)
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Linear2D, boundary, surf, coord::linear_2d(x, y), lanes);
}

pub fn read_3d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, y: i32, z: i32, boundary: BoundaryMode) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Linear3D, boundary, surf, coord::linear_3d(x, y, z));
    codec::recompose(lanes)
}

pub fn write_3d<T, B>(backend: &B, surf: SurfaceHandle, x: i32, y: i32, z: i32, value: T, boundary: BoundaryMode)
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Linear3D, boundary, surf, coord::linear_3d(x, y, z), lanes);
}

/* ------------------------------------------------------------------------- */
/* Layered surfaces                                                          */
/* ------------------------------------------------------------------------- */

pub fn read_1d_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    layer: i32,
    boundary: BoundaryMode,
) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Layered1D, boundary, surf, coord::layered_1d(layer, x));
    codec::recompose(lanes)
}

pub fn write_1d_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    layer: i32,
    value: T,
    boundary: BoundaryMode,
) where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Layered1D, boundary, surf, coord::layered_1d(layer, x), lanes);
}

pub fn read_2d_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    layer: i32,
    boundary: BoundaryMode,
) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Layered2D, boundary, surf, coord::layered_2d(layer, x, y));
    codec::recompose(lanes)
}

pub fn write_2d_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    layer: i32,
    value: T,
    boundary: BoundaryMode,
) where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Layered2D, boundary, surf, coord::layered_2d(layer, x, y), lanes);
}

/* ------------------------------------------------------------------------- */
/* Cubemap surfaces                                                          */
/* ------------------------------------------------------------------------- */

/// Read from a cubemap face. Callers pass `(x, y, face)`; the face leads
/// the addressing tuple internally.
pub fn read_cubemap<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    face: i32,
    boundary: BoundaryMode,
) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(backend, T::DESC, SurfaceKind::Cubemap, boundary, surf, coord::cubemap(x, y, face));
    codec::recompose(lanes)
}

pub fn write_cubemap<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    face: i32,
    value: T,
    boundary: BoundaryMode,
) where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(backend, T::DESC, SurfaceKind::Cubemap, boundary, surf, coord::cubemap(x, y, face), lanes);
}

/// Read from a layered cubemap. `layerface` is `layer * 6 + face`. The `_z`
/// coordinate is accepted by the four-coordinate call form but does not
/// participate in layered addressing.
pub fn read_cubemap_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    _z: i32,
    layerface: i32,
    boundary: BoundaryMode,
) -> T
where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = read_lanes(
        backend,
        T::DESC,
        SurfaceKind::CubemapLayered,
        boundary,
        surf,
        coord::cubemap_layered(x, y, layerface),
    );
    codec::recompose(lanes)
}

pub fn write_cubemap_layered<T, B>(
    backend: &B,
    surf: SurfaceHandle,
    x: i32,
    y: i32,
    _z: i32,
    layerface: i32,
    value: T,
    boundary: BoundaryMode,
) where
    T: SurfaceElement,
    B: SurfaceBackend + ?Sized,
{
    let lanes = codec::decompose(value);
    write_lanes(
        backend,
        T::DESC,
        SurfaceKind::CubemapLayered,
        boundary,
        surf,
        coord::cubemap_layered(x, y, layerface),
        lanes,
    );
}

/* ------------------------------------------------------------------------- */
/*                                  Tests                                    */
/* ------------------------------------------------------------------------- */
