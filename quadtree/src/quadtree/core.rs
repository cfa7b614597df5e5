use super::*;
use tracing::debug;

impl<T> QuadTree<T> {
    pub fn new_with_config(center: Point, half_extent: Point, config: Config) -> QuadtreeResult<Self> {
        if !center.is_finite() {
            return Err(QuadtreeError::InvalidCenter {
                x: center.x,
                y: center.y,
            });
        }
        let region = Region::new(center, half_extent);
        if !region.is_valid() {
            return Err(QuadtreeError::InvalidHalfExtent {
                x: half_extent.x,
                y: half_extent.y,
            });
        }
        if config.bucket_capacity == 0 {
            return Err(QuadtreeError::InvalidBucketCapacity);
        }
        let limit = region.max_subdivisions();
        if config.max_depth > limit {
            return Err(QuadtreeError::InvalidMaxDepth {
                max_depth: config.max_depth,
                limit,
            });
        }
        debug!(
            %center,
            %half_extent,
            bucket_capacity = config.bucket_capacity,
            max_depth = config.max_depth,
            enclosure = ?config.enclosure,
            "created quadtree"
        );
        Ok(Self::new_root(region, config))
    }

    /// Tree with a bucket capacity of 1 and a max depth of 16.
    pub fn new(center: Point, half_extent: Point) -> QuadtreeResult<Self> {
        Self::new_with_config(center, half_extent, Config::default())
    }

    pub fn with_capacity(
        center: Point,
        half_extent: Point,
        bucket_capacity: usize,
        max_depth: usize,
    ) -> QuadtreeResult<Self> {
        Self::new_with_config(
            center,
            half_extent,
            Config {
                bucket_capacity,
                max_depth,
                ..Config::default()
            },
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn region(&self) -> Region {
        self.node(ROOT).region
    }

    /// Closed box covered by the root.
    pub fn extent(&self) -> Extent {
        self.node(ROOT).extent
    }

    pub fn bucket_capacity(&self) -> usize {
        self.config.bucket_capacity
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries stored outside the root box. While non-zero, queries scan every entry.
    pub fn outside_count(&self) -> usize {
        self.strays
    }

    /// Live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }
}
