use crate::shapes::{Bounds, Extent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnclosureStatus {
    /// The whole node box lies inside the query rectangle.
    Contained,
    /// The node box and the query rectangle overlap without containment.
    Partial,
    NotInRegion,
}

// Exact interval tests of the closed node box against the half-open rectangle.
pub fn enclosure_status(extent: &Extent, bounds: &Bounds) -> EnclosureStatus {
    if bounds.is_empty() {
        return EnclosureStatus::NotInRegion;
    }
    let Extent { min, max } = *extent;
    let overlaps = min.x < bounds.max.x
        && max.x >= bounds.min.x
        && min.y < bounds.max.y
        && max.y >= bounds.min.y;
    if !overlaps {
        return EnclosureStatus::NotInRegion;
    }
    if min.x >= bounds.min.x && max.x < bounds.max.x && min.y >= bounds.min.y && max.y < bounds.max.y
    {
        EnclosureStatus::Contained
    } else {
        EnclosureStatus::Partial
    }
}

// Counts node corners inside the rectangle, then falls back to rectangle corners
// inside the node. Misses overlaps where neither shape has a corner in the other.
pub fn corner_enclosure_status(extent: &Extent, bounds: &Bounds) -> EnclosureStatus {
    let inside = extent
        .corners()
        .iter()
        .filter(|corner| bounds.contains_point(**corner))
        .count();
    match inside {
        4 => EnclosureStatus::Contained,
        1..=3 => EnclosureStatus::Partial,
        _ => {
            if bounds
                .corners()
                .iter()
                .any(|corner| extent.contains_point(*corner))
            {
                EnclosureStatus::Partial
            } else {
                EnclosureStatus::NotInRegion
            }
        }
    }
}
