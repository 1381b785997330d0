//! Activation-driven disjoint-set forest.
//!
//! Tracks connectivity among the *active* nodes of a fixed node set
//! `0..n` while nodes are switched on one at a time, as in the
//! Newman-Ziff percolation algorithm.
//!
//! # Algorithm
//!
//! Uses **union by size** when a newly active node meets already-active
//! neighbours: the smaller tree is attached under the root of the larger
//! one. `find` walks the full parent chain without path compression, so
//! the forest shape is a pure function of the activation order.
//!
//! A size of `0` marks an inactive node. Size values are exact only at
//! roots; an absorbed root keeps its last (non-zero) size, which still
//! serves as the "active" flag.
//!
//! # References
//!
//! - Newman & Ziff (2001), "A fast Monte Carlo algorithm for site or bond
//!   percolation", *Phys. Rev. E* 64, 016706.

/// Disjoint-set forest over nodes that become active one by one.
///
/// # Examples
/// ```
/// use u_percolation::collections::ClusterTracker;
///
/// // path 0 - 1 - 2
/// let mut tracker = ClusterTracker::new(3);
/// assert_eq!(tracker.activate(0, [1]), 1);
/// assert_eq!(tracker.activate(2, [1]), 1);
/// assert_eq!(tracker.activate(1, [0, 2]), 3);
/// assert_eq!(tracker.find(0), tracker.find(2));
/// ```
#[derive(Debug, Clone)]
pub struct ClusterTracker {
    parent: Vec<usize>,
    size: Vec<usize>,
    active: usize,
}

impl ClusterTracker {
    /// Creates a tracker for `n` nodes, all inactive.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![0; n],
            active: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Deactivates every node and drops all parent links.
    ///
    /// # Complexity
    /// O(n)
    pub fn reset(&mut self) {
        for (i, p) in self.parent.iter_mut().enumerate() {
            *p = i;
        }
        self.size.fill(0);
        self.active = 0;
    }

    /// Returns `true` if `x` has been activated since the last reset.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn is_active(&self, x: usize) -> bool {
        self.size[x] != 0
    }

    /// Number of active nodes.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Finds the root of the tree containing `x`.
    ///
    /// Walks the parent chain to the top; no path compression.
    /// An inactive node is its own root.
    ///
    /// # Complexity
    /// O(log n), since union by size bounds the tree height.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Returns the size of the cluster containing `x`, or `None` if `x`
    /// is inactive.
    pub fn component_size(&self, x: usize) -> Option<usize> {
        if !self.is_active(x) {
            return None;
        }
        Some(self.size[self.find(x)])
    }

    /// Iterates over the roots of all active clusters.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&x| self.is_active(x) && self.parent[x] == x)
    }

    /// Activates `node` and merges it with every active neighbour.
    ///
    /// Neighbours are processed in the order given. Inactive neighbours
    /// are skipped, as are neighbours already in the node's cluster.
    /// Otherwise the two roots merge by size; on equal sizes the
    /// neighbour's root is attached under the activating node's root.
    ///
    /// # Returns
    /// The size of the cluster `node` belongs to after all merges.
    ///
    /// # Panics
    /// Panics if `node` or a neighbour is out of range. Activating a node
    /// twice without a [`reset`](Self::reset) in between is a contract
    /// violation, caught in debug builds.
    pub fn activate<I>(&mut self, node: usize, neighbors: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        debug_assert!(!self.is_active(node), "node {node} activated twice");

        self.size[node] = 1;
        self.active += 1;
        let mut root = node;

        for neighbor in neighbors {
            if self.size[neighbor] == 0 {
                continue;
            }
            let other = self.find(neighbor);
            if other == root {
                continue;
            }

            if self.size[root] < self.size[other] {
                self.size[other] += self.size[root];
                self.parent[root] = other;
                root = other;
            } else {
                self.size[root] += self.size[other];
                self.parent[other] = root;
            }
        }

        self.size[root]
    }
}
