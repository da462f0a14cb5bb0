//! # Maximum flow
//!
//! Edmonds–Karp: augment along shortest paths in the residual network until the terminal can't
//! be reached anymore. Because every augmenting path is a shortest one, the number of
//! augmentations is bounded by the size of the network, also for capacities that aren't integer.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter;

use fifo_set::FIFOSet;
use itertools::Itertools;

use crate::algorithm::Solve;
use crate::data::network::{NodeId, Weight};
use crate::data::network::connection::Connection;
use crate::data::network::problem::MaximumFlowProblem;
use crate::data::network::representation::{Network, ResidualNetwork};
use crate::error::SolveError;

/// Maximum flow found for a `MaximumFlowProblem`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximumFlowResult<W> {
    /// Every connection carrying flow, in input order, with its weight replaced by that flow.
    path: Vec<Connection<W>>,
    /// Total flow from source to terminal.
    flow: W,
    /// Nodes on the source side of a minimum cut.
    source_side: Vec<NodeId>,
}

impl<W> MaximumFlowResult<W> {
    /// Connections carrying a positive flow, in input order.
    ///
    /// The weight of these connections is the flow sent over them, not their capacity. Together
    /// they form a flow, not necessarily a single path.
    pub fn path(&self) -> &[Connection<W>] {
        &self.path
    }

    /// Total flow from source to terminal.
    pub fn flow(&self) -> &W {
        &self.flow
    }

    /// Nodes still reachable from the source in the final residual network, ascending.
    ///
    /// The connections leaving this set form a minimum cut; their capacities add up to the flow.
    /// Empty when the source isn't part of the network.
    pub fn source_side(&self) -> &[NodeId] {
        &self.source_side
    }
}

impl<W: Weight> MaximumFlowResult<W> {
    /// Total flow arriving at a node.
    pub fn inflow(&self, node: NodeId) -> W {
        self.path.iter()
            .filter(|connection| connection.to() == node)
            .fold(W::zero(), |total, connection| total + connection.weight().clone())
    }

    /// Total flow leaving a node.
    pub fn outflow(&self, node: NodeId) -> W {
        self.path.iter()
            .filter(|connection| connection.from() == node)
            .fold(W::zero(), |total, connection| total + connection.weight().clone())
    }
}

impl<W: Display> Display for MaximumFlowResult<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Maximum Flow Result:")?;
        writeln!(f, "Flow: {}", self.flow)?;
        writeln!(f, "Minimum cut source side: {{{}}}", self.source_side.iter().join(", "))?;
        writeln!(f, "Path:")?;
        for connection in &self.path {
            writeln!(f, "  {}", connection)?;
        }

        Ok(())
    }
}

impl<W: Weight> Solve for MaximumFlowProblem<W> {
    type Solution = MaximumFlowResult<W>;

    /// Compute a maximum flow from source to terminal.
    ///
    /// The breadth-first search visits arcs by ascending head node id, so the flow found doesn't
    /// depend on anything but the connections and their order.
    ///
    /// A terminal that can't be reached, or that isn't part of the network, results in a zero
    /// flow rather than an error.
    fn solve(&self) -> Result<Self::Solution, SolveError> {
        let network = Network::new(self.connections())?;
        let (source, terminal) = self.terminals().resolve(&network)?;

        let mut residual = ResidualNetwork::new(&network);
        let mut flow = W::zero();
        while let Some(path) = augmenting_path(&residual, source, terminal) {
            let bottleneck = bottleneck(&residual, &path);
            log::debug!(
                "Augmenting {} along {}",
                bottleneck,
                iter::once(source).chain(path.iter().map(|&arc| residual.head(arc))).join(" -> "),
            );

            for &arc in &path {
                residual.push(arc, &bottleneck);
            }
            flow = flow + bottleneck;
        }

        let path = network.connections().iter()
            .enumerate()
            .map(|(j, connection)| (connection, residual.flow(j)))
            .filter(|(_, sent)| *sent > W::zero())
            .map(|(connection, sent)| connection.with_weight(sent))
            .collect();
        let source_side = if network.contains(source) {
            reachable(&residual, source).into_iter().collect()
        } else {
            Vec::new()
        };

        Ok(MaximumFlowResult { path, flow, source_side })
    }
}

/// Breadth-first search for a shortest path with positive residual capacity.
///
/// # Return value
///
/// The arcs of the path, in order from source to terminal, if there is such a path.
fn augmenting_path<W: Weight>(
    residual: &ResidualNetwork<W>,
    source: NodeId,
    terminal: NodeId,
) -> Option<Vec<usize>> {
    let mut reached_through = BTreeMap::new();
    let mut visited = BTreeSet::from([source]);
    let mut queue = iter::once(source).collect::<FIFOSet<_>>();

    while let Some(node) = queue.pop() {
        for arc in residual.leaving(node) {
            let head = residual.head(arc);
            if !residual.has_residual(arc) || !visited.insert(head) {
                continue;
            }
            reached_through.insert(head, arc);

            if head == terminal {
                let mut path = Vec::new();
                let mut current = terminal;
                while current != source {
                    let arc = reached_through[&current];
                    path.push(arc);
                    current = residual.tail(arc);
                }
                path.reverse();

                return Some(path);
            }

            queue.push(head);
        }
    }

    None
}

/// Smallest residual capacity along a path.
fn bottleneck<W: Weight>(residual: &ResidualNetwork<W>, path: &[usize]) -> W {
    debug_assert!(!path.is_empty());

    let mut arcs = path.iter().map(|&arc| residual.residual(arc));
    let first = arcs.next().cloned().unwrap_or_else(W::zero);
    arcs.fold(first, |smallest, capacity| {
        if *capacity < smallest { capacity.clone() } else { smallest }
    })
}

/// All nodes reachable from the source over arcs with residual capacity.
fn reachable<W: Weight>(residual: &ResidualNetwork<W>, source: NodeId) -> BTreeSet<NodeId> {
    let mut visited = BTreeSet::from([source]);
    let mut queue = iter::once(source).collect::<FIFOSet<_>>();

    while let Some(node) = queue.pop() {
        for arc in residual.leaving(node) {
            let head = residual.head(arc);
            if residual.has_residual(arc) && visited.insert(head) {
                queue.push(head);
            }
        }
    }

    visited
}
