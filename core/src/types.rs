use surface_types::{BoundaryMode, CoordTuple, Lanes, SurfaceHandle, VectorClass};
use wgpu::{Buffer, BufferUsages};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Main,
    Upload,
    Download,
}
impl From<BufferKind> for BufferUsages {
    fn from(kind: BufferKind) -> Self {
        match kind {
            BufferKind::Main => BufferUsages::STORAGE | BufferUsages::COPY_SRC | BufferUsages::COPY_DST,
            BufferKind::Upload => BufferUsages::MAP_WRITE | BufferUsages::COPY_SRC,
            BufferKind::Download => BufferUsages::MAP_READ | BufferUsages::COPY_DST,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct AbstractBuffer(pub(crate) Buffer);
impl AbstractBuffer {
    pub(crate) fn raw(&self) -> &wgpu::Buffer {
        &self.0
    }

    pub fn size(&self) -> u64 {
        self.0.size()
    }
}

/// Which way a primitive moves data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Load,
    Store,
}

/// Fully resolved primitive selector. One tag names exactly one hardware
/// access instruction variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpcodeTag {
    pub direction: Direction,
    /// Dimensionality tag: `1d`, `2d`, `3d`, `a1d` or `a2d`
    pub geom: &'static str,
    pub class: VectorClass,
    pub boundary: BoundaryMode,
}

impl OpcodeTag {
    pub fn mnemonic(&self) -> String {
        let op = match self.direction {
            Direction::Load => "suld.b",
            Direction::Store => "sust.b",
        };
        format!("{}.{}.{}{}", op, self.geom, self.class.tag(), self.boundary.suffix())
    }
}

/// The primitive-invocation capability consumed by the dispatcher: issue
/// exactly one access against an opaque surface. Boundary handling belongs
/// to the implementation, selected by the tag; a trap is fatal to the
/// calling context, never an error value.
pub trait SurfaceBackend {
    fn load(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple) -> Lanes;
    fn store(&self, op: OpcodeTag, surf: SurfaceHandle, coords: CoordTuple, lanes: Lanes);
}
