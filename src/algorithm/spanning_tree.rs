//! # Minimum spanning tree
//!
//! Kruskal's algorithm: accept connections by increasing distance, unless they would close a
//! cycle. Directions are ignored. On a disconnected network, the result is a minimum spanning
//! forest with one tree for every connected component.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::Solve;
use crate::algorithm::disjoint_set::DisjointSet;
use crate::data::network::Weight;
use crate::data::network::connection::Connection;
use crate::data::network::problem::MstProblem;
use crate::data::network::representation::Network;
use crate::error::SolveError;

/// Minimum spanning forest found for a `MstProblem`.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<W> {
    /// Accepted connections, in the order they were accepted.
    connections: Vec<Connection<W>>,
    /// Sum of the distances of the accepted connections.
    distance: W,
    /// Number of connected components, each spanned by one tree.
    nr_trees: usize,
}

impl<W> MstResult<W> {
    /// Connections in the tree, or forest.
    pub fn connections(&self) -> &[Connection<W>] {
        &self.connections
    }

    /// Total distance.
    pub fn distance(&self) -> &W {
        &self.distance
    }

    /// Number of trees in the forest.
    pub fn nr_trees(&self) -> usize {
        self.nr_trees
    }

    /// Whether all nodes are connected by a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.nr_trees == 1
    }
}

impl<W: Display> Display for MstResult<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Minimum Spanning Tree Result:")?;
        writeln!(f, "Distance: {}", self.distance)?;
        if !self.is_spanning_tree() {
            writeln!(f, "Not connected, forest of {} trees", self.nr_trees)?;
        }
        writeln!(f, "Connections:")?;
        for connection in &self.connections {
            writeln!(f, "  {}", connection)?;
        }

        Ok(())
    }
}

impl<W: Weight> Solve for MstProblem<W> {
    type Solution = MstResult<W>;

    /// Compute a minimum spanning tree, or forest if the network isn't connected.
    ///
    /// Connections of equal distance are considered in input order.
    fn solve(&self) -> Result<Self::Solution, SolveError> {
        let network = Network::new(self.connections())?;
        let nr_nodes = network.nr_nodes();

        let mut sets = DisjointSet::new(nr_nodes);
        let mut connections = Vec::with_capacity(nr_nodes - 1);
        let mut distance = W::zero();

        let by_distance = network.connections().iter()
            .sorted_by(|left, right| {
                left.weight().partial_cmp(right.weight()).unwrap_or(Ordering::Equal)
            });
        for connection in by_distance {
            if connections.len() == nr_nodes - 1 {
                break;
            }

            let (from, to) = connection.endpoints();
            match (network.index_of(from), network.index_of(to)) {
                (Some(i), Some(j)) => if sets.union(i, j) {
                    distance = distance + connection.weight().clone();
                    connections.push(connection.clone());
                },
                _ => debug_assert!(false, "endpoints are nodes of the network"),
            }
        }

        let nr_trees = sets.nr_sets();
        debug_assert_eq!(connections.len(), nr_nodes - nr_trees);
        if nr_trees > 1 {
            log::debug!("Network is not connected, spanning forest of {} trees", nr_trees);
        }

        Ok(MstResult { connections, distance, nr_trees })
    }
}
