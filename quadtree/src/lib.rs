pub mod enclosure;
pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use common::shapes::{Bounds, Extent, Point, Region};
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, EnclosureTest, Entry, NodeInfo, QuadTree};
