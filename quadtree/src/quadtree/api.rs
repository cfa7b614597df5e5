use super::*;
use smallvec::SmallVec;
use std::fmt;

const QUADRANT_NAMES: [&str; 4] = ["lower-left", "upper-left", "lower-right", "upper-right"];

impl<T> QuadTree<T> {
    pub fn contains(&self, point: Point) -> bool {
        self.get(point).is_some()
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        let mut path = NodeStack::new();
        let leaf_idx = self.find_leaf(point, &mut path)?;
        self.node(leaf_idx)
            .bucket
            .iter()
            .find(|entry| entry.point == point)
            .map(|entry| &entry.payload)
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        let mut path = NodeStack::new();
        let leaf_idx = self.find_leaf(point, &mut path)?;
        self.node_mut(leaf_idx)
            .bucket
            .iter_mut()
            .find(|entry| entry.point == point)
            .map(|entry| &mut entry.payload)
    }

    /// Every stored entry, depth first.
    pub fn entries<'a>(&'a self) -> Vec<&'a Entry<T>> {
        let mut entries = Vec::with_capacity(self.len);
        let mut push = |entry: &'a Entry<T>| entries.push(entry);
        self.collect_subtree(ROOT, &mut push);
        entries
    }

    /// Every live node with its region, depth and kind, parents before children.
    pub fn node_regions(&self) -> Vec<NodeInfo> {
        let mut infos = Vec::with_capacity(self.node_count());
        let mut stack: SmallVec<[(u32, usize); 32]> = SmallVec::new();
        stack.push((ROOT, 0));
        while let Some((node_idx, depth)) = stack.pop() {
            let node = self.node(node_idx);
            infos.push(NodeInfo {
                region: node.region,
                extent: node.extent,
                depth,
                is_leaf: node.is_leaf(),
                entries: node.bucket.len(),
            });
            for child in node.present_children() {
                stack.push((child, depth + 1));
            }
        }
        infos
    }

    /// Depth of the deepest live node; 0 while the root is a leaf.
    pub fn depth(&self) -> usize {
        self.node_regions()
            .iter()
            .map(|info| info.depth)
            .max()
            .unwrap_or(0)
    }

    /// Human-readable listing of the node hierarchy and stored points.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node_idx: u32, label: &str, depth: usize) -> fmt::Result {
        let node = self.node(node_idx);
        let indent = depth * 2;
        if !node.is_leaf() {
            return writeln!(f, "{:indent$}{}stem {}", "", label, node.region);
        }
        write!(f, "{:indent$}{}leaf {}", "", label, node.region)?;
        if !node.bucket.is_empty() {
            write!(f, ":")?;
            for entry in &node.bucket {
                write!(f, " {}", entry.point)?;
            }
        }
        writeln!(f)
    }
}

impl<T> fmt::Display for QuadTree<T> {
    // Pre-order, children in quadrant order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: SmallVec<[(u32, Option<usize>, usize); 32]> = SmallVec::new();
        stack.push((ROOT, None, 0));
        while let Some((node_idx, quadrant, depth)) = stack.pop() {
            let label = match quadrant {
                Some(quadrant) => format!("[{}] ", QUADRANT_NAMES[quadrant]),
                None => String::new(),
            };
            self.fmt_node(f, node_idx, &label, depth)?;
            let node = self.node(node_idx);
            for quadrant in (0..4).rev() {
                if let Some(child) = node.child(quadrant) {
                    stack.push((child, Some(quadrant), depth + 1));
                }
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("region", &self.region())
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.node_count())
            .finish()
    }
}
