/// Index of a node inside a [`PathArena`].
pub type NodeId = usize;

/// A step on a path through the edit graph.
///
/// Edit nodes mark where a run of inserts/deletes ends; their `prev` jumps
/// straight to the nearest earlier snake. Snake nodes close a run of matches
/// and point at the edit node the run started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// Position in the original sequence.
    pub i: isize,
    /// Position in the revised sequence.
    pub j: isize,
    pub snake: bool,
    /// Synthetic seed node sitting outside the graph (`j == -1`).
    pub bootstrap: bool,
    pub prev: Option<NodeId>,
}

/// Backing store for path nodes.
///
/// Nodes are never mutated once pushed. Frontier cells and `prev` links
/// refer to them by index, and [`PathArena::compact`] drops whatever the
/// frontier can no longer reach.
#[derive(Debug, Default)]
pub struct PathArena {
    nodes: Vec<PathNode>,
    live_after_compact: usize,
}

impl PathArena {
    pub fn with_capacity(capacity: usize) -> Self {
        PathArena {
            nodes: Vec::with_capacity(capacity),
            live_after_compact: 0,
        }
    }

    pub fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The synthetic node the search starts from.
    pub fn bootstrap(&mut self) -> NodeId {
        self.push(PathNode {
            i: 0,
            j: -1,
            snake: true,
            bootstrap: true,
            prev: None,
        })
    }

    /// Adds an edit node at `(i, j)` reached from `from`.
    pub fn edit(&mut self, i: isize, j: isize, from: Option<NodeId>) -> NodeId {
        let prev = from.and_then(|id| self.previous_snake(id));
        self.push(PathNode {
            i,
            j,
            snake: false,
            bootstrap: false,
            prev,
        })
    }

    /// Adds a snake node ending at `(i, j)` that started at edit node `from`.
    pub fn snake(&mut self, i: isize, j: isize, from: NodeId) -> NodeId {
        self.push(PathNode {
            i,
            j,
            snake: true,
            bootstrap: false,
            prev: Some(from),
        })
    }

    /// Walks back over edit nodes to the closest snake. Reaching the
    /// bootstrap node yields `None`; an edit node with no predecessor is
    /// returned as is.
    pub fn previous_snake(&self, mut id: NodeId) -> Option<NodeId> {
        loop {
            let node = &self.nodes[id];
            if node.bootstrap {
                return None;
            }
            match node.prev {
                Some(prev) if !node.snake => id = prev,
                _ => return Some(id),
            }
        }
    }

    /// Whether enough garbage has piled up since the last compaction.
    pub fn should_compact(&self) -> bool {
        self.nodes.len() > 64 && self.nodes.len() > 2 * self.live_after_compact
    }

    /// Drops every node unreachable from `roots` and rewrites `roots` to the
    /// new indices. Relative order is preserved, so a node's `prev` always
    /// has a smaller index than the node itself.
    pub fn compact(&mut self, roots: &mut [Option<NodeId>]) {
        let mut live = vec![false; self.nodes.len()];
        for root in roots.iter().flatten() {
            let mut cursor = Some(*root);
            while let Some(id) = cursor {
                if live[id] {
                    break;
                }
                live[id] = true;
                cursor = self.nodes[id].prev;
            }
        }

        let mut remap = vec![usize::MAX; self.nodes.len()];
        let mut kept = Vec::with_capacity(live.iter().filter(|l| **l).count());
        for (id, node) in self.nodes.iter().enumerate() {
            if live[id] {
                remap[id] = kept.len();
                let mut node = *node;
                node.prev = node.prev.map(|p| remap[p]);
                kept.push(node);
            }
        }

        for root in roots.iter_mut() {
            *root = root.map(|id| remap[id]);
        }
        self.nodes = kept;
        self.live_after_compact = self.nodes.len();
    }

    fn push(&mut self, node: PathNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
