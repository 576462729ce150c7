use bytemuck::{Pod, Zeroable};
use std::fmt;

include!("generated_element_types.rs");

/// Opaque identity of a surface, issued by the resource layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);
impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceHandle({})", self.0)
    }
}

/// Maximum number of hardware lanes in one element
pub const MAX_LANES: usize = 4;

/// Maximum number of integer coordinates in an addressing tuple
pub const MAX_COORDS: usize = 4;

/// Number of lanes an element occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneCount {
    One,
    Two,
    Four,
}

impl LaneCount {
    pub const fn as_usize(self) -> usize {
        match self {
            LaneCount::One => 1,
            LaneCount::Two => 2,
            LaneCount::Four => 4,
        }
    }
}

/// Bit width of one lane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneWidth {
    B8,
    B16,
    B32,
    B64,
}

impl LaneWidth {
    pub const fn bits(self) -> usize {
        match self {
            LaneWidth::B8 => 8,
            LaneWidth::B16 => 16,
            LaneWidth::B32 => 32,
            LaneWidth::B64 => 64,
        }
    }

    /// Size of one lane, in bytes
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }
}

/// Hardware vector-width classes. There is no quad-64-bit class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorClass {
    B8,
    B16,
    B32,
    B64,
    V2B8,
    V2B16,
    V2B32,
    V2B64,
    V4B8,
    V4B16,
    V4B32,
}

impl VectorClass {
    pub const ALL: [VectorClass; 11] = [
        VectorClass::B8,
        VectorClass::B16,
        VectorClass::B32,
        VectorClass::B64,
        VectorClass::V2B8,
        VectorClass::V2B16,
        VectorClass::V2B32,
        VectorClass::V2B64,
        VectorClass::V4B8,
        VectorClass::V4B16,
        VectorClass::V4B32,
    ];

    /// The class for a lane count/width pair, `None` where the hardware has
    /// no matching primitive.
    pub const fn of(count: LaneCount, width: LaneWidth) -> Option<VectorClass> {
        Some(match (count, width) {
            (LaneCount::One, LaneWidth::B8) => VectorClass::B8,
            (LaneCount::One, LaneWidth::B16) => VectorClass::B16,
            (LaneCount::One, LaneWidth::B32) => VectorClass::B32,
            (LaneCount::One, LaneWidth::B64) => VectorClass::B64,
            (LaneCount::Two, LaneWidth::B8) => VectorClass::V2B8,
            (LaneCount::Two, LaneWidth::B16) => VectorClass::V2B16,
            (LaneCount::Two, LaneWidth::B32) => VectorClass::V2B32,
            (LaneCount::Two, LaneWidth::B64) => VectorClass::V2B64,
            (LaneCount::Four, LaneWidth::B8) => VectorClass::V4B8,
            (LaneCount::Four, LaneWidth::B16) => VectorClass::V4B16,
            (LaneCount::Four, LaneWidth::B32) => VectorClass::V4B32,
            (LaneCount::Four, LaneWidth::B64) => return None,
        })
    }

    /// Number of lanes carried by this class
    pub const fn lane_count(self) -> LaneCount {
        match self {
            VectorClass::B8 | VectorClass::B16 | VectorClass::B32 | VectorClass::B64 => {
                LaneCount::One
            }
            VectorClass::V2B8 | VectorClass::V2B16 | VectorClass::V2B32 | VectorClass::V2B64 => {
                LaneCount::Two
            }
            VectorClass::V4B8 | VectorClass::V4B16 | VectorClass::V4B32 => LaneCount::Four,
        }
    }

    /// Width tag used in the opcode mnemonic
    pub const fn tag(self) -> &'static str {
        match self {
            VectorClass::B8 => "b8",
            VectorClass::B16 => "b16",
            VectorClass::B32 => "b32",
            VectorClass::B64 => "b64",
            VectorClass::V2B8 => "v2.b8",
            VectorClass::V2B16 => "v2.b16",
            VectorClass::V2B32 => "v2.b32",
            VectorClass::V2B64 => "v2.b64",
            VectorClass::V4B8 => "v4.b8",
            VectorClass::V4B16 => "v4.b16",
            VectorClass::V4B32 => "v4.b32",
        }
    }
}

/// Describes one registered element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
    pub lane_count: LaneCount,
    pub lane_width: LaneWidth,
    /// Lanes carry IEEE-754 bit patterns (only legal at 32 bits).
    pub is_float: bool,
    /// Sign extension applies when sub-32-bit lanes are widened.
    pub signed: bool,
}

impl ElementDescriptor {
    pub const fn is_supported(self) -> bool {
        VectorClass::of(self.lane_count, self.lane_width).is_some()
            && (!self.is_float || matches!(self.lane_width, LaneWidth::B32))
    }

    /// The vector-width class this descriptor maps to.
    pub const fn class(self) -> VectorClass {
        match VectorClass::of(self.lane_count, self.lane_width) {
            Some(c) => c,
            None => panic!("element descriptor has no hardware vector class"),
        }
    }

    /// Size of one packed element, in bytes
    pub const fn bytes_per_element(self) -> usize {
        self.lane_count.as_usize() * self.lane_width.bytes()
    }
}

/// Marker-trait so we can go from T to its descriptor
pub trait SurfaceElement: bytemuck::Pod {
    const DESC: ElementDescriptor;
}

/// Raw lane values crossing the backend seam. Sub-32-bit integer lanes travel
/// widened with only the low bits significant; 32-bit float lanes travel as
/// bit patterns in the low 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes {
    pub vals: [u64; MAX_LANES],
    pub count: LaneCount,
}

impl Lanes {
    pub const fn zeroed(count: LaneCount) -> Self {
        Lanes { vals: [0; MAX_LANES], count }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.vals[..self.count.as_usize()]
    }
}

/// Ordered integer coordinates handed to a primitive, padding included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordTuple {
    pub vals: [i32; MAX_COORDS],
    pub len: u32,
}

impl CoordTuple {
    pub fn of(coords: &[i32]) -> Self {
        debug_assert!(coords.len() <= MAX_COORDS);
        let mut vals = [0i32; MAX_COORDS];
        vals[..coords.len()].copy_from_slice(coords);
        CoordTuple { vals, len: coords.len() as u32 }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.vals[..self.len as usize]
    }
}

/// Supported surface addressing modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Linear1D,
    Linear2D,
    Linear3D,
    Layered1D,
    Layered2D,
    Cubemap,
    CubemapLayered,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 7] = [
        SurfaceKind::Linear1D,
        SurfaceKind::Linear2D,
        SurfaceKind::Linear3D,
        SurfaceKind::Layered1D,
        SurfaceKind::Layered2D,
        SurfaceKind::Cubemap,
        SurfaceKind::CubemapLayered,
    ];

    /// Exact length of the coordinate tuple the primitive expects.
    /// 3D and the layered family carry a trailing padding coordinate.
    pub const fn coordinate_count(self) -> u32 {
        match self {
            SurfaceKind::Linear1D => 1,
            SurfaceKind::Linear2D => 2,
            SurfaceKind::Linear3D => 4,
            SurfaceKind::Layered1D => 2,
            SurfaceKind::Layered2D => 4,
            SurfaceKind::Cubemap => 4,
            SurfaceKind::CubemapLayered => 4,
        }
    }

    /// Whether the tuple leads with a layer or face index
    pub const fn is_layered(self) -> bool {
        matches!(
            self,
            SurfaceKind::Layered1D
                | SurfaceKind::Layered2D
                | SurfaceKind::Cubemap
                | SurfaceKind::CubemapLayered
        )
    }
}

/// Out-of-range policy for one access
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    Trap,
    Clamp,
    Zero,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 3] = [BoundaryMode::Trap, BoundaryMode::Clamp, BoundaryMode::Zero];

    /// Opcode suffix selecting the primitive variant
    pub const fn suffix(self) -> &'static str {
        match self {
            BoundaryMode::Trap => ".trap",
            BoundaryMode::Clamp => ".clamp",
            BoundaryMode::Zero => ".zero",
        }
    }
}
