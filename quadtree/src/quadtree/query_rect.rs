use super::*;
use std::collections::VecDeque;

impl<T> QuadTree<T> {
    /// Entries whose point lies in `[min.x, max.x) x [min.y, max.y)`, in no particular order.
    pub fn query(&self, min: Point, max: Point) -> Vec<&Entry<T>> {
        let mut found = Vec::new();
        self.query_with(min, max, |entry| found.push(entry));
        found
    }

    pub fn query_points(&self, min: Point, max: Point) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_with(min, max, |entry| found.push(entry.point));
        found
    }

    pub fn query_with<'a, F>(&'a self, min: Point, max: Point, mut f: F)
    where
        F: FnMut(&'a Entry<T>),
    {
        let bounds = Bounds::new(min, max);
        if bounds.is_empty() || self.len == 0 {
            return;
        }
        if self.strays > 0 {
            // Stray entries sit outside their nodes' regions, so pruning could miss them.
            let mut filtered = |entry: &'a Entry<T>| {
                if bounds.contains_point(entry.point) {
                    f(entry);
                }
            };
            self.collect_subtree(ROOT, &mut filtered);
            return;
        }

        let mut queue = VecDeque::new();
        match self.classify(ROOT, &bounds) {
            EnclosureStatus::Contained => {
                self.collect_subtree(ROOT, &mut f);
                return;
            }
            EnclosureStatus::Partial => queue.push_back(ROOT),
            EnclosureStatus::NotInRegion => return,
        }

        while let Some(node_idx) = queue.pop_front() {
            let node = self.node(node_idx);
            if node.is_leaf() {
                for entry in &node.bucket {
                    if bounds.contains_point(entry.point) {
                        f(entry);
                    }
                }
                continue;
            }
            for child in node.present_children() {
                match self.classify(child, &bounds) {
                    EnclosureStatus::Contained => self.collect_subtree(child, &mut f),
                    EnclosureStatus::Partial => queue.push_back(child),
                    EnclosureStatus::NotInRegion => {}
                }
            }
        }
    }

    #[inline(always)]
    fn classify(&self, node_idx: u32, bounds: &Bounds) -> EnclosureStatus {
        let extent = &self.node(node_idx).extent;
        match self.config.enclosure {
            EnclosureTest::Overlap => enclosure_status(extent, bounds),
            EnclosureTest::Corners => corner_enclosure_status(extent, bounds),
        }
    }

    /// Depth-first visit of every entry under `node_idx`.
    pub(crate) fn collect_subtree<'a, F>(&'a self, node_idx: u32, f: &mut F)
    where
        F: FnMut(&'a Entry<T>),
    {
        let mut stack = NodeStack::new();
        stack.push(node_idx);
        while let Some(node_idx) = stack.pop() {
            let node = self.node(node_idx);
            for entry in &node.bucket {
                f(entry);
            }
            stack.extend(node.present_children());
        }
    }
}
