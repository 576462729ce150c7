// Generated by build.rs from supported_types.yaml. Do not edit by hand.

/* --------------------------------- i8 --------------------------------- */

impl SurfaceElement for i8 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<i8 as SurfaceElement>::DESC.is_supported());

/// Two-lane `i8` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Char2 {
    pub x: i8,
    pub y: i8,
}

impl SurfaceElement for Char2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Char2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `i8` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Char4 {
    pub x: i8,
    pub y: i8,
    pub z: i8,
    pub w: i8,
}

impl SurfaceElement for Char4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Char4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- u8 --------------------------------- */

impl SurfaceElement for u8 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<u8 as SurfaceElement>::DESC.is_supported());

/// Two-lane `u8` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Uchar2 {
    pub x: u8,
    pub y: u8,
}

impl SurfaceElement for Uchar2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Uchar2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `u8` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Uchar4 {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub w: u8,
}

impl SurfaceElement for Uchar4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B8,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Uchar4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- i16 --------------------------------- */

impl SurfaceElement for i16 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<i16 as SurfaceElement>::DESC.is_supported());

/// Two-lane `i16` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Short2 {
    pub x: i16,
    pub y: i16,
}

impl SurfaceElement for Short2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Short2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `i16` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Short4 {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub w: i16,
}

impl SurfaceElement for Short4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Short4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- u16 --------------------------------- */

impl SurfaceElement for u16 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<u16 as SurfaceElement>::DESC.is_supported());

/// Two-lane `u16` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Ushort2 {
    pub x: u16,
    pub y: u16,
}

impl SurfaceElement for Ushort2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Ushort2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `u16` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Ushort4 {
    pub x: u16,
    pub y: u16,
    pub z: u16,
    pub w: u16,
}

impl SurfaceElement for Ushort4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B16,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Ushort4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- i32 --------------------------------- */

impl SurfaceElement for i32 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<i32 as SurfaceElement>::DESC.is_supported());

/// Two-lane `i32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Int2 {
    pub x: i32,
    pub y: i32,
}

impl SurfaceElement for Int2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Int2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `i32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Int4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl SurfaceElement for Int4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Int4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- u32 --------------------------------- */

impl SurfaceElement for u32 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<u32 as SurfaceElement>::DESC.is_supported());

/// Two-lane `u32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Uint2 {
    pub x: u32,
    pub y: u32,
}

impl SurfaceElement for Uint2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Uint2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `u32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Uint4 {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
}

impl SurfaceElement for Uint4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B32,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Uint4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- f32 --------------------------------- */

impl SurfaceElement for f32 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B32,
        is_float: true,
        signed: false,
    };
}
const _: () = assert!(<f32 as SurfaceElement>::DESC.is_supported());

/// Two-lane `f32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

impl SurfaceElement for Float2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B32,
        is_float: true,
        signed: false,
    };
}
const _: () = assert!(<Float2 as SurfaceElement>::DESC.is_supported());

/// Four-lane `f32` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl SurfaceElement for Float4 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Four,
        lane_width: LaneWidth::B32,
        is_float: true,
        signed: false,
    };
}
const _: () = assert!(<Float4 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- i64 --------------------------------- */

impl SurfaceElement for i64 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B64,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<i64 as SurfaceElement>::DESC.is_supported());

/// Two-lane `i64` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Longlong2 {
    pub x: i64,
    pub y: i64,
}

impl SurfaceElement for Longlong2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B64,
        is_float: false,
        signed: true,
    };
}
const _: () = assert!(<Longlong2 as SurfaceElement>::DESC.is_supported());

/* --------------------------------- u64 --------------------------------- */

impl SurfaceElement for u64 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::One,
        lane_width: LaneWidth::B64,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<u64 as SurfaceElement>::DESC.is_supported());

/// Two-lane `u64` vector element.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
pub struct Ulonglong2 {
    pub x: u64,
    pub y: u64,
}

impl SurfaceElement for Ulonglong2 {
    const DESC: ElementDescriptor = ElementDescriptor {
        lane_count: LaneCount::Two,
        lane_width: LaneWidth::B64,
        is_float: false,
        signed: false,
    };
}
const _: () = assert!(<Ulonglong2 as SurfaceElement>::DESC.is_supported());

/// Every registered element descriptor, for table-driven checks.
pub const ALL_ELEMENT_DESCRIPTORS: &[ElementDescriptor] = &[
    <i8 as SurfaceElement>::DESC,
    <Char2 as SurfaceElement>::DESC,
    <Char4 as SurfaceElement>::DESC,
    <u8 as SurfaceElement>::DESC,
    <Uchar2 as SurfaceElement>::DESC,
    <Uchar4 as SurfaceElement>::DESC,
    <i16 as SurfaceElement>::DESC,
    <Short2 as SurfaceElement>::DESC,
    <Short4 as SurfaceElement>::DESC,
    <u16 as SurfaceElement>::DESC,
    <Ushort2 as SurfaceElement>::DESC,
    <Ushort4 as SurfaceElement>::DESC,
    <i32 as SurfaceElement>::DESC,
    <Int2 as SurfaceElement>::DESC,
    <Int4 as SurfaceElement>::DESC,
    <u32 as SurfaceElement>::DESC,
    <Uint2 as SurfaceElement>::DESC,
    <Uint4 as SurfaceElement>::DESC,
    <f32 as SurfaceElement>::DESC,
    <Float2 as SurfaceElement>::DESC,
    <Float4 as SurfaceElement>::DESC,
    <i64 as SurfaceElement>::DESC,
    <Longlong2 as SurfaceElement>::DESC,
    <u64 as SurfaceElement>::DESC,
    <Ulonglong2 as SurfaceElement>::DESC,
];