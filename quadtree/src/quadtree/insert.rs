use super::*;
use tracing::{debug, trace, warn};

impl<T> QuadTree<T> {
    /// Stores `payload` at `point`. Never fails and never drops the entry.
    ///
    /// Points outside the root box are still kept, routed to the boundary
    /// quadrant the tie-break rule picks for them, and make every later query
    /// scan all entries until they are removed. A point with a NaN coordinate
    /// is stored and counted but no query or lookup ever matches it, so it
    /// does not trigger those scans.
    pub fn insert(&mut self, point: Point, payload: T) {
        if self.is_outside(point) {
            warn!(%point, region = %self.region(), "storing point outside quadtree region");
            self.strays += 1;
        }
        self.insert_at(ROOT, 0, Entry::new(point, payload));
        self.len += 1;
    }

    /// Like [`QuadTree::insert`], but rejects points outside the root box, NaN included.
    pub fn try_insert(&mut self, point: Point, payload: T) -> QuadtreeResult<()> {
        let extent = self.extent();
        if !extent.contains_point(point) {
            let Extent { min, max } = extent;
            return Err(QuadtreeError::PointOutOfBounds {
                x: point.x,
                y: point.y,
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        self.insert(point, payload);
        Ok(())
    }

    pub(crate) fn is_outside(&self, point: Point) -> bool {
        !point.x.is_nan() && !point.y.is_nan() && !self.extent().contains_point(point)
    }

    // Entries displaced by a subdivision wait on `pending`; the most recently
    // displaced ones are placed first.
    fn insert_at(&mut self, node_idx: u32, depth: usize, entry: Entry<T>) {
        let mut pending = vec![(node_idx, depth, entry)];
        while let Some((mut node_idx, mut depth, entry)) = pending.pop() {
            loop {
                let node = self.node(node_idx);
                if !node.is_leaf() {
                    node_idx = self.child_node(node_idx, entry.point);
                    depth += 1;
                    continue;
                }

                let capacity = self.config.bucket_capacity;
                if node.bucket.len() < capacity {
                    self.node_mut(node_idx).bucket.push(entry);
                    break;
                }

                if depth >= self.config.max_depth {
                    let node = self.node_mut(node_idx);
                    node.bucket.push(entry);
                    debug!(
                        depth,
                        entries = node.bucket.len(),
                        capacity,
                        "leaf at max depth over capacity"
                    );
                    break;
                }

                self.subdivide(node_idx, depth, entry, &mut pending);
                break;
            }
        }
    }

    // Turns a full leaf into a stem: the new entry goes down first, then every
    // previously stored entry is routed by its own point.
    fn subdivide(
        &mut self,
        node_idx: u32,
        depth: usize,
        entry: Entry<T>,
        pending: &mut Vec<(u32, usize, Entry<T>)>,
    ) {
        let bucket = std::mem::take(&mut self.node_mut(node_idx).bucket);
        trace!(
            depth,
            region = %self.node(node_idx).region,
            entries = bucket.len() + 1,
            "subdividing leaf"
        );

        let child = self.child_node(node_idx, entry.point);
        let first_existing = pending.len();
        for existing in bucket {
            let child = self.child_node(node_idx, existing.point);
            pending.push((child, depth + 1, existing));
        }
        pending[first_existing..].reverse();
        pending.push((child, depth + 1, entry));
    }
}
