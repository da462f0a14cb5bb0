//! # Errors
//!
//! Everything that can go wrong while solving a network problem. Errors are detected eagerly,
//! either while building the view of a network or directly after a search ended; a failed solve
//! never produces a partial result.
use thiserror::Error;

use crate::data::network::NodeId;

/// Reasons a `solve` call can fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The connections don't describe a valid network.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),
    /// There is no path between the requested nodes.
    #[error("no path from node {from} to node {to}")]
    Unreachable {
        /// Node the path should start at.
        from: NodeId,
        /// Node the path should end at.
        to: NodeId,
    },
    /// No connections were supplied.
    #[error("no connections supplied")]
    EmptyInput,
}

/// A structural problem with the connections or terminals of a problem.
///
/// The offending connection is referred to by its name.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidGraph {
    /// A connection leaves and arrives at the same node.
    #[error("connection \"{name}\" is a self-loop on node {node}")]
    SelfLoop {
        /// Name of the connection.
        name: String,
        /// Node the loop is on.
        node: NodeId,
    },
    /// A connection has a weight below zero, or one that can't be compared to zero.
    #[error("connection \"{name}\" has weight {weight}, which is not a nonnegative number")]
    NegativeWeight {
        /// Name of the connection.
        name: String,
        /// The weight, formatted.
        weight: String,
    },
    /// Node ids are positive.
    #[error("connection \"{name}\" refers to node 0, node ids should be positive")]
    ZeroNode {
        /// Name of the connection.
        name: String,
    },
    /// Source and terminal of a path or flow problem are the same node.
    #[error("source and terminal are both node {node}")]
    CoincidingTerminals {
        /// The node used as both source and terminal.
        node: NodeId,
    },
}
