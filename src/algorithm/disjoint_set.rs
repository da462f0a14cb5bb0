//! # Disjoint sets
//!
//! Union-find over the indices `0..n`, with path compression and union by rank.
use std::cmp::Ordering;

/// Partition of `0..n` into disjoint sets.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    /// Upper bound on the height of the tree below each root.
    rank: Vec<u8>,
    nr_sets: usize,
}

impl DisjointSet {
    /// Every element in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            nr_sets: n,
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// All elements on the way to the representative are attached to it directly.
    pub fn find(&mut self, x: usize) -> usize {
        debug_assert!(x < self.len());

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// # Return value
    ///
    /// `false` if they were in the same set already, in which case nothing changes.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.nr_sets -= 1;

        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    pub fn nr_sets(&self) -> usize {
        self.nr_sets
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements at all.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::disjoint_set::DisjointSet;

    #[test]
    fn singletons() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets.nr_sets(), 4);
        assert!((0..4).all(|i| sets.find(i) == i));
        assert!(!sets.connected(0, 1));

        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn union() {
        let mut sets = DisjointSet::new(6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert_eq!(sets.nr_sets(), 3);
        assert!(sets.connected(0, 2));
        assert!(!sets.connected(0, 4));

        // Would close a cycle
        assert!(!sets.union(3, 0));
        assert_eq!(sets.nr_sets(), 3);

        assert!(sets.union(4, 5));
        assert!(sets.union(5, 0));
        assert_eq!(sets.nr_sets(), 1);
        let root = sets.find(0);
        assert!((0..6).all(|i| sets.find(i) == root));
    }

    #[test]
    fn long_chain() {
        let n = 1_000;
        let mut sets = DisjointSet::new(n);
        for i in 1..n {
            assert!(sets.union(i - 1, i));
        }
        assert_eq!(sets.nr_sets(), 1);
        assert!(sets.connected(0, n - 1));
    }
}
