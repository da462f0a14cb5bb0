//! # Shortest path
//!
//! Label-setting search (Dijkstra) over connections with nonnegative costs.
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::Solve;
use crate::data::network::{NodeId, Weight};
use crate::data::network::connection::Connection;
use crate::data::network::problem::ShortestPathProblem;
use crate::data::network::representation::Network;
use crate::error::SolveError;

/// Cheapest path found for a `ShortestPathProblem`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W> {
    /// Connections from source to terminal, in the order they are traversed.
    path: Vec<Connection<W>>,
    /// Sum of the weights along the path.
    cost: W,
}

impl<W> ShortestPathResult<W> {
    /// Connections from source to terminal, in the order they are traversed.
    pub fn path(&self) -> &[Connection<W>] {
        &self.path
    }

    /// Total cost of the path.
    pub fn cost(&self) -> &W {
        &self.cost
    }

    /// Nodes visited by the path, source and terminal included.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.path.first()
            .map(|connection| connection.from())
            .into_iter()
            .chain(self.path.iter().map(|connection| connection.to()))
            .collect()
    }
}

impl<W: Display> Display for ShortestPathResult<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Shortest Path Result:")?;
        writeln!(f, "Cost: {}", self.cost)?;
        writeln!(f, "Nodes: {}", self.nodes().iter().join(" -> "))?;
        writeln!(f, "Path:")?;
        for connection in &self.path {
            writeln!(f, "  {}", connection)?;
        }

        Ok(())
    }
}

impl<W: Weight> Solve for ShortestPathProblem<W> {
    type Solution = ShortestPathResult<W>;

    /// Find the cheapest path from source to terminal.
    ///
    /// When several unsettled nodes share the smallest tentative distance, the one with the lowest
    /// id is settled first. A label is only replaced by a strictly cheaper one. Together, these
    /// rules make the sequence of nodes on the path independent of the order of the connections.
    /// Of parallel connections with equal weight, the first one in input order is used.
    ///
    /// # Errors
    ///
    /// Besides an invalid network, `Unreachable` when the terminal can't be reached from the
    /// source. That includes terminals that aren't part of the network at all.
    fn solve(&self) -> Result<Self::Solution, SolveError> {
        let network = Network::new(self.connections())?;
        let (source, terminal) = self.terminals().resolve(&network)?;

        let (cost, predecessor) = search(&network, source, terminal)
            .ok_or(SolveError::Unreachable { from: source, to: terminal })?;

        let mut path = Vec::new();
        let mut node = terminal;
        while node != source {
            let connection = network.connection(predecessor[&node]);
            path.push(connection.clone());
            node = connection.from();
        }
        path.reverse();

        Ok(ShortestPathResult { path, cost })
    }
}

/// Tentative distance of a node, as stored in the priority queue.
#[derive(Debug, Clone)]
struct Label<W> {
    distance: W,
    node: NodeId,
}

impl<W: PartialOrd> Ord for Label<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, such that the max-heap yields the closest node, and the lowest id among equals
        other.distance.partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: PartialOrd> PartialOrd for Label<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> PartialEq for Label<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Label<W> {}

/// Settle nodes by increasing distance from the source until the terminal is settled.
///
/// # Return value
///
/// If the terminal was settled, its distance and for every labeled node the index of the
/// connection through which its label was set.
fn search<W: Weight>(
    network: &Network<'_, W>,
    source: NodeId,
    terminal: NodeId,
) -> Option<(W, BTreeMap<NodeId, usize>)> {
    let mut distance = BTreeMap::new();
    let mut predecessor = BTreeMap::new();
    let mut settled = BTreeSet::new();
    let mut frontier = BinaryHeap::new();

    distance.insert(source, W::zero());
    frontier.push(Label { distance: W::zero(), node: source });

    while let Some(Label { distance: current, node }) = frontier.pop() {
        if !settled.insert(node) {
            // A cheaper label for this node was popped before
            continue;
        }
        log::trace!("Settled node {} at distance {}", node, current);

        if node == terminal {
            return Some((current, predecessor));
        }

        for (j, connection) in network.outgoing(node) {
            let head = connection.to();
            if settled.contains(&head) {
                continue;
            }

            let candidate = current.clone() + connection.weight().clone();
            if distance.get(&head).is_none_or(|best| candidate < *best) {
                distance.insert(head, candidate.clone());
                predecessor.insert(head, j);
                frontier.push(Label { distance: candidate, node: head });
            }
        }
    }

    log::debug!("Node {} can't be reached from node {}", terminal, source);
    None
}
