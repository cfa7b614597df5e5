//! Bucketed point quadtree.
//!
//! Leaves hold up to `bucket_capacity` entries. A full leaf above `max_depth`
//! turns into a stem and pushes its entries one level down; removals collapse
//! sparse stems back into leaves on the way up.

mod api;
mod config;
mod core;
mod insert;
mod query_rect;
mod remove;
mod storage;
mod types;

pub use config::{Config, EnclosureTest};
pub use storage::QuadTree;
pub use types::{Entry, NodeInfo};

use crate::enclosure::{corner_enclosure_status, enclosure_status, EnclosureStatus};
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::shapes::{Bounds, Extent, Point, Region};
use types::*;
