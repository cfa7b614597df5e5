use super::*;
use tracing::debug;

impl<T> QuadTree<T> {
    /// Removes one entry stored exactly at `point`. Returns whether one was found.
    pub fn remove(&mut self, point: Point) -> bool {
        self.remove_entry(point).is_some()
    }

    /// Removes one entry stored exactly at `point` and returns its payload.
    pub fn take(&mut self, point: Point) -> Option<T> {
        self.remove_entry(point).map(|entry| entry.payload)
    }

    pub fn remove_entry(&mut self, point: Point) -> Option<Entry<T>> {
        let mut path = NodeStack::new();
        let leaf_idx = self.find_leaf(point, &mut path)?;

        // Buckets are unordered, so the whole bucket is scanned.
        let leaf = self.node_mut(leaf_idx);
        let pos = leaf.bucket.iter().position(|entry| entry.point == point)?;
        let entry = leaf.bucket.remove(pos);

        self.len -= 1;
        if self.is_outside(point) {
            self.strays -= 1;
        }

        path.pop();
        self.reduce(leaf_idx, &mut path);
        Some(entry)
    }

    /// Follows quadrants from the root down to the leaf that would own `point`,
    /// pushing every visited node. `None` if the path hits an empty slot.
    pub(crate) fn find_leaf(&self, point: Point, path: &mut NodeStack) -> Option<u32> {
        let mut node_idx = ROOT;
        path.push(node_idx);
        loop {
            let node = self.node(node_idx);
            if node.is_leaf() {
                return Some(node_idx);
            }
            node_idx = node.child(node.region.quadrant(point))?;
            path.push(node_idx);
        }
    }

    // Collapses ancestors whose children are all leaves holding no more than
    // `bucket_capacity` entries in total, stopping at the first one that cannot
    // collapse. `path` holds the ancestors of `leaf_idx`, root first.
    fn reduce(&mut self, leaf_idx: u32, path: &mut NodeStack) {
        let capacity = self.config.bucket_capacity;
        let mut collapsed = leaf_idx;
        while let Some(&top) = path.last() {
            let node = self.node(top);
            let mut total = 0;
            let mut all_leaves = true;
            for child in node.present_children() {
                let child = self.node(child);
                if !child.is_leaf() {
                    all_leaves = false;
                    break;
                }
                total += child.bucket.len();
            }
            if !all_leaves || total > capacity {
                break;
            }

            let children = std::mem::replace(&mut self.node_mut(top).children, [NO_CHILD; 4]);
            let mut bucket = std::mem::take(&mut self.node_mut(top).bucket);
            for child in children.into_iter().filter(|&idx| idx != NO_CHILD) {
                bucket.append(&mut self.node_mut(child).bucket);
                self.free_node(child);
            }
            let node = self.node_mut(top);
            node.bucket = bucket;
            debug!(
                region = %node.region,
                entries = node.bucket.len(),
                "merged children into leaf"
            );

            collapsed = top;
            path.pop();
        }

        if let Some(&parent) = path.last() {
            self.prune_empty_leaf(parent, collapsed);
        }
    }

    // Stems only keep children that hold something. The parent here could not
    // collapse, so it still has another child.
    fn prune_empty_leaf(&mut self, parent: u32, leaf_idx: u32) {
        let leaf = self.node(leaf_idx);
        if !leaf.is_leaf() || !leaf.bucket.is_empty() {
            return;
        }
        let parent_node = self.node_mut(parent);
        if let Some(slot) = parent_node.children.iter_mut().find(|slot| **slot == leaf_idx) {
            *slot = NO_CHILD;
            self.free_node(leaf_idx);
        }
    }
}
