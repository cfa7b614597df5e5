use super::*;

pub(crate) struct Node<T> {
    pub(crate) region: Region,
    // Exact edges inherited from the parent; `region` only drives routing.
    pub(crate) extent: Extent,
    pub(crate) bucket: Vec<Entry<T>>,
    pub(crate) children: [u32; 4],
}

impl<T> Node<T> {
    #[inline(always)]
    fn new_leaf(region: Region, extent: Extent) -> Self {
        Self {
            region,
            extent,
            bucket: Vec::new(),
            children: [NO_CHILD; 4],
        }
    }

    // A stem always keeps at least one child, so an empty child array means leaf.
    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children == [NO_CHILD; 4]
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: usize) -> Option<u32> {
        match self.children[quadrant] {
            NO_CHILD => None,
            idx => Some(idx),
        }
    }

    #[inline(always)]
    pub(crate) fn present_children(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.iter().copied().filter(|&idx| idx != NO_CHILD)
    }
}

/// Dynamic 2-D point index. Nodes live in an arena and refer to each other by index.
pub struct QuadTree<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) free_nodes: Vec<u32>,
    pub(crate) config: Config,
    pub(crate) len: usize,
    // Entries stored outside the root region; while non-zero, queries scan everything.
    pub(crate) strays: usize,
}

impl<T> QuadTree<T> {
    #[inline(always)]
    pub(crate) fn node(&self, idx: u32) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    pub(crate) fn alloc_node(&mut self, region: Region, extent: Extent) -> u32 {
        match self.free_nodes.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = Node::new_leaf(region, extent);
                idx
            }
            None => {
                let idx = self.nodes.len() as u32;
                self.nodes.push(Node::new_leaf(region, extent));
                idx
            }
        }
    }

    // Releases a childless node. Its bucket must already be drained.
    pub(crate) fn free_node(&mut self, idx: u32) {
        debug_assert!(idx != ROOT, "root is never freed");
        let node = self.node_mut(idx);
        debug_assert!(node.is_leaf());
        node.bucket = Vec::new();
        self.free_nodes.push(idx);
    }

    /// Child in the quadrant that owns `point`, created as an empty leaf on first use.
    pub(crate) fn child_node(&mut self, idx: u32, point: Point) -> u32 {
        let node = self.node(idx);
        let quadrant = node.region.quadrant(point);
        if let Some(child) = node.child(quadrant) {
            return child;
        }
        let region = node.region.child(quadrant);
        let extent = node.extent.child(quadrant, node.region.center);
        let child = self.alloc_node(region, extent);
        self.node_mut(idx).children[quadrant] = child;
        child
    }

    pub(crate) fn new_root(region: Region, config: Config) -> Self {
        Self {
            nodes: vec![Node::new_leaf(region, Extent::from_region(&region))],
            free_nodes: Vec::new(),
            config,
            len: 0,
            strays: 0,
        }
    }
}
