#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Region test used to prune nodes during range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnclosureTest {
    /// Exact interval overlap and containment.
    #[default]
    Overlap,
    /// Eight-corner heuristic. Can skip nodes crossed by thin rectangles.
    Corners,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    pub bucket_capacity: usize,
    pub max_depth: usize,
    pub enclosure: EnclosureTest,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bucket_capacity: 1,
            max_depth: 16,
            enclosure: EnclosureTest::Overlap,
        }
    }
}
