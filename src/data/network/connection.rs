//! # Connections
//!
//! A connection is the single entity all network problems are built from: a named, weighted arc
//! from one node to another.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::hash::{Hash, Hasher};

use crate::data::network::{NodeId, Weight};

/// Weighted, directed edge between two nodes.
///
/// Connections are immutable once created. Algorithms that report different weights, like the
/// realized flow of a maximum flow, create a derived copy through `with_weight`.
///
/// The name only serves display purposes, it plays no role in comparisons or in any of the
/// algorithms.
#[derive(Debug, Clone)]
pub struct Connection<W> {
    from: NodeId,
    to: NodeId,
    weight: W,
    name: String,
}

impl<W> Connection<W> {
    /// Create a new connection, named after its endpoints.
    ///
    /// # Arguments
    ///
    /// * `from`: Node the connection leaves.
    /// * `to`: Node the connection arrives at.
    /// * `weight`: Cost, capacity or distance, depending on the problem.
    ///
    /// # Return value
    ///
    /// A connection with name `"x"` followed by both node ids, e.g. `"x13"`.
    pub fn new(from: NodeId, to: NodeId, weight: W) -> Self {
        Self::named(from, to, weight, format!("x{}{}", from, to))
    }

    /// Create a new connection with an explicit name.
    pub fn named(from: NodeId, to: NodeId, weight: W, name: impl Into<String>) -> Self {
        Self {
            from,
            to,
            weight,
            name: name.into(),
        }
    }

    /// Node this connection leaves.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Node this connection arrives at.
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Cost, capacity or distance of this connection.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Both endpoints, ordered as `(from, to)`.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    /// Copy of this connection, keeping the endpoints and name but carrying another weight.
    pub fn with_weight<V>(&self, weight: V) -> Connection<V> {
        Connection {
            from: self.from,
            to: self.to,
            weight,
            name: self.name.clone(),
        }
    }
}

impl<W: Weight> Connection<W> {
    /// Whether the weight is usable, i.e. not negative and comparable to zero.
    ///
    /// `NaN` weights don't compare to anything and are rejected as well.
    pub(crate) fn has_valid_weight(&self) -> bool {
        self.weight >= W::zero()
    }
}

impl<W: PartialEq> PartialEq for Connection<W> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.weight == other.weight
    }
}

impl<W: Eq> Eq for Connection<W> {}

impl<W: Hash> Hash for Connection<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.hash(state);
    }
}

impl<W: Display> Display for Connection<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "Connection({}, {}, {}, {:?})", self.from, self.to, self.weight, self.name)
    }
}
