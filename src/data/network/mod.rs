//! # Network representation
//!
//! Networks are described by a list of weighted, directed connections between positive node
//! ids. Depending on the problem, the weight of a connection is read as a cost (shortest path),
//! a capacity (maximum flow) or a distance (minimum spanning tree).
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

use num_traits::Zero;

pub mod connection;
pub mod problem;
pub mod representation;

/// Identifier of a node in a network.
///
/// Valid ids are positive, `0` is rejected when a network is built.
pub type NodeId = usize;

/// Number type that can be used as the weight of a connection.
///
/// Implemented for all types that support the few operations the network algorithms need, most
/// notably `f64` and the exact rational types of `relp_num`.
///
/// Weights are summed along paths and flows without overflow checks. Integer types should be wide
/// enough to hold the total weight of all connections; arithmetic that overflows panics in debug
/// builds and wraps in release builds.
pub trait Weight:
    Clone +
    PartialOrd +
    Zero +
    Add<Output=Self> +
    Sub<Output=Self> +
    Debug +
    Display
{
}

impl<W> Weight for W
where
    W: Clone + PartialOrd + Zero + Add<Output=W> + Sub<Output=W> + Debug + Display,
{
}
