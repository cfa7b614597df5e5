use crate::shapes::{Extent, Point, Region};
use smallvec::SmallVec;

pub(crate) const ROOT: u32 = 0;
// The root is never anyone's child, so its index doubles as the empty slot marker.
pub(crate) const NO_CHILD: u32 = 0;

/// Root-to-leaf path recorded while descending.
pub(crate) type NodeStack = SmallVec<[u32; 32]>;

/// A stored point with its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub point: Point,
    pub payload: T,
}

impl<T> Entry<T> {
    pub fn new(point: Point, payload: T) -> Self {
        Self { point, payload }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_parts(self) -> (Point, T) {
        (self.point, self.payload)
    }
}

/// Snapshot of one live node, for drawing and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInfo {
    pub region: Region,
    pub extent: Extent,
    pub depth: usize,
    pub is_leaf: bool,
    pub entries: usize,
}
