//! # Network optimization
//!
//! Classical operations research problems over a list of weighted, directed connections:
//!
//! * shortest paths, with Dijkstra's algorithm;
//! * maximum flows, with the Edmonds–Karp algorithm;
//! * minimum spanning trees (or forests), with Kruskal's algorithm.
//!
//! Problems are solved through the `Solve` trait:
//!
//! ```
//! use orgraph::algorithm::Solve;
//! use orgraph::data::network::connection::Connection;
//! use orgraph::data::network::problem::ShortestPathProblem;
//!
//! let connections = vec![
//!     Connection::new(1, 2, 3.0),
//!     Connection::new(1, 3, 1.0),
//!     Connection::new(3, 2, 1.0),
//! ];
//! let result = ShortestPathProblem::new(connections).between(1, 2).solve().unwrap();
//! assert_eq!(result.cost(), &2.0);
//! assert_eq!(result.nodes(), vec![1, 3, 2]);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
