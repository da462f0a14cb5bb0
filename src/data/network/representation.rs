//! # Representation
//!
//! Views on a list of connections that the algorithms can traverse. Views are built at the start
//! of every solve, after validating the connections, and dropped when it ends.
use std::collections::{BTreeMap, BTreeSet};

use crate::data::network::{NodeId, Weight};
use crate::data::network::connection::Connection;
use crate::error::{InvalidGraph, SolveError};

/// Forward adjacency of a validated list of connections.
///
/// Nodes that don't appear in any connection are not part of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<'a, W> {
    connections: &'a [Connection<W>],
    /// All nodes that are an endpoint of some connection, sorted.
    nodes: Vec<NodeId>,
    /// For each node, indices of the connections leaving it, in input order.
    outgoing: BTreeMap<NodeId, Vec<usize>>,
}

impl<'a, W> Network<'a, W>
where
    W: Weight,
{
    /// Validate connections and build their adjacency.
    ///
    /// # Errors
    ///
    /// `EmptyInput` if there are no connections, `InvalidGraph` for the first connection (in
    /// input order) that is a self-loop, refers to node 0 or has a negative weight.
    pub fn new(connections: &'a [Connection<W>]) -> Result<Self, SolveError> {
        if connections.is_empty() {
            return Err(SolveError::EmptyInput);
        }

        let mut nodes = BTreeSet::new();
        let mut outgoing: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for (j, connection) in connections.iter().enumerate() {
            validate(connection)?;

            let (from, to) = connection.endpoints();
            nodes.insert(from);
            nodes.insert(to);
            outgoing.entry(from).or_default().push(j);
        }

        log::debug!("Network with {} nodes and {} connections", nodes.len(), connections.len());

        Ok(Self {
            connections,
            nodes: nodes.into_iter().collect(),
            outgoing,
        })
    }
}

impl<'a, W> Network<'a, W> {
    /// The connections this network was built from.
    pub fn connections(&self) -> &'a [Connection<W>] {
        self.connections
    }

    /// Connection by its index in the input.
    pub fn connection(&self, j: usize) -> &'a Connection<W> {
        debug_assert!(j < self.nr_connections());

        &self.connections[j]
    }

    /// All nodes, ascending.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Whether the node is an endpoint of any connection.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index_of(node).is_some()
    }

    /// Position of a node in the ascending list of nodes.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    /// Lowest and highest node id.
    pub fn extremes(&self) -> (NodeId, NodeId) {
        // A validated network has at least one connection between two distinct nodes.
        debug_assert!(self.nr_nodes() >= 2);

        (self.nodes[0], self.nodes[self.nodes.len() - 1])
    }

    /// Connections leaving a node, with their input index, in input order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item=(usize, &'a Connection<W>)> {
        let connections = self.connections;
        self.outgoing.get(&node)
            .into_iter()
            .flatten()
            .map(move |&j| (j, &connections[j]))
    }

    /// Number of distinct nodes.
    pub fn nr_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connections, parallel ones counted separately.
    pub fn nr_connections(&self) -> usize {
        self.connections.len()
    }
}

fn validate<W: Weight>(connection: &Connection<W>) -> Result<(), InvalidGraph> {
    let (from, to) = connection.endpoints();

    if from == 0 || to == 0 {
        Err(InvalidGraph::ZeroNode { name: connection.name().to_string() })
    } else if from == to {
        Err(InvalidGraph::SelfLoop { name: connection.name().to_string(), node: from })
    } else if !connection.has_valid_weight() {
        Err(InvalidGraph::NegativeWeight {
            name: connection.name().to_string(),
            weight: connection.weight().to_string(),
        })
    } else {
        Ok(())
    }
}

/// Arc of a residual network.
#[derive(Debug, Clone, PartialEq)]
struct ResidualArc<W> {
    tail: NodeId,
    head: NodeId,
    residual: W,
}

/// Residual capacities of a network.
///
/// Every connection `j` contributes a forward arc `2 * j`, seeded with the connection's capacity,
/// and a reverse twin `2 * j + 1` seeded with zero. Arcs are identified by the connection they
/// stem from rather than by their endpoints only, such that parallel and anti-parallel
/// connections keep their own capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualNetwork<W> {
    arcs: Vec<ResidualArc<W>>,
    /// Original capacity, per connection.
    capacity: Vec<W>,
    /// For each node, the arcs leaving it, sorted by head and then by arc index.
    leaving: BTreeMap<NodeId, Vec<usize>>,
}

impl<W> ResidualNetwork<W>
where
    W: Weight,
{
    /// Seed the residual network of a validated network; no flow is sent yet.
    pub fn new(network: &Network<'_, W>) -> Self {
        let nr_arcs = 2 * network.nr_connections();
        let mut arcs = Vec::with_capacity(nr_arcs);
        let mut capacity = Vec::with_capacity(network.nr_connections());
        let mut leaving: BTreeMap<_, Vec<_>> = BTreeMap::new();

        for connection in network.connections() {
            let (from, to) = connection.endpoints();

            leaving.entry(from).or_default().push(arcs.len());
            arcs.push(ResidualArc { tail: from, head: to, residual: connection.weight().clone() });
            leaving.entry(to).or_default().push(arcs.len());
            arcs.push(ResidualArc { tail: to, head: from, residual: W::zero() });

            capacity.push(connection.weight().clone());
        }
        debug_assert_eq!(arcs.len(), nr_arcs);

        for arc_indices in leaving.values_mut() {
            arc_indices.sort_unstable_by_key(|&arc| (arcs[arc].head, arc));
        }

        Self { arcs, capacity, leaving }
    }

    /// Move `amount` of residual capacity from an arc to its twin.
    ///
    /// Sending flow over a forward arc makes the same amount available for cancelling it later.
    pub fn push(&mut self, arc: usize, amount: &W) {
        debug_assert!(arc < self.nr_arcs());
        debug_assert!(*amount <= self.arcs[arc].residual);

        let twin = self.twin(arc);
        let residual = self.arcs[arc].residual.clone();
        self.arcs[arc].residual = residual - amount.clone();
        let residual = self.arcs[twin].residual.clone();
        self.arcs[twin].residual = residual + amount.clone();
    }

    /// Flow currently sent over connection `j`.
    ///
    /// This is the original capacity minus what remains on the forward arc.
    pub fn flow(&self, j: usize) -> W {
        debug_assert!(j < self.capacity.len());

        self.capacity[j].clone() - self.arcs[2 * j].residual.clone()
    }

    /// Whether any residual capacity is left on an arc.
    pub fn has_residual(&self, arc: usize) -> bool {
        self.arcs[arc].residual > W::zero()
    }
}

impl<W> ResidualNetwork<W> {
    /// Arcs leaving a node, by ascending head node id.
    pub fn leaving(&self, node: NodeId) -> impl Iterator<Item=usize> {
        self.leaving.get(&node).into_iter().flatten().copied()
    }

    /// Node an arc leaves.
    pub fn tail(&self, arc: usize) -> NodeId {
        self.arcs[arc].tail
    }

    /// Node an arc arrives at.
    pub fn head(&self, arc: usize) -> NodeId {
        self.arcs[arc].head
    }

    /// Residual capacity of an arc.
    pub fn residual(&self, arc: usize) -> &W {
        &self.arcs[arc].residual
    }

    /// The arc running in the opposite direction for the same connection.
    pub fn twin(&self, arc: usize) -> usize {
        debug_assert!(arc < self.nr_arcs());

        arc ^ 1
    }

    /// Connection an arc stems from.
    pub fn connection_index(&self, arc: usize) -> usize {
        debug_assert!(arc < self.nr_arcs());

        arc / 2
    }

    /// Number of arcs, twice the number of connections.
    pub fn nr_arcs(&self) -> usize {
        self.arcs.len()
    }
}
