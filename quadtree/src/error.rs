use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("quadtree center must be finite (x: {x}, y: {y})")]
    InvalidCenter { x: f64, y: f64 },
    #[error("quadtree half extent must be finite and positive (x: {x}, y: {y})")]
    InvalidHalfExtent { x: f64, y: f64 },
    #[error("bucket capacity must be at least 1")]
    InvalidBucketCapacity,
    #[error("max depth {max_depth} exceeds {limit}, the deepest level with a non-zero half extent")]
    InvalidMaxDepth { max_depth: usize, limit: usize },
    #[error(
        "point lies outside the quadtree region (x: {x}, y: {y}, min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y})"
    )]
    PointOutOfBounds {
        x: f64,
        y: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
