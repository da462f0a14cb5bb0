//! # Network problems
//!
//! Problem objects own the connections they are posed over, together with the parameters specific
//! to the algorithm that solves them. They are solved through `algorithm::Solve`.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::network::NodeId;
use crate::data::network::connection::Connection;
use crate::data::network::representation::Network;
use crate::error::{InvalidGraph, SolveError};

/// Which nodes a path or flow runs between.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Terminals {
    /// From the lowest node id that appears in any connection, to the highest.
    #[default]
    Extremes,
    /// Between two explicitly chosen nodes.
    Between {
        /// Node the path or flow starts at.
        source: NodeId,
        /// Node the path or flow ends at.
        terminal: NodeId,
    },
}

impl Terminals {
    /// Resolve the source and terminal for a network.
    ///
    /// # Errors
    ///
    /// When the source and terminal are the same node.
    pub fn resolve<W>(self, network: &Network<'_, W>) -> Result<(NodeId, NodeId), SolveError> {
        let (source, terminal) = match self {
            Terminals::Extremes => network.extremes(),
            Terminals::Between { source, terminal } => (source, terminal),
        };

        if source == terminal {
            Err(InvalidGraph::CoincidingTerminals { node: source }.into())
        } else {
            Ok((source, terminal))
        }
    }
}

impl Display for Terminals {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Terminals::Extremes => write!(f, "lowest to highest node id"),
            Terminals::Between { source, terminal } => write!(f, "{} to {}", source, terminal),
        }
    }
}

/// Find the cheapest path between two nodes, reading weights as costs.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathProblem<W> {
    connections: Vec<Connection<W>>,
    terminals: Terminals,
}

/// Find the largest flow between two nodes, reading weights as capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct MaximumFlowProblem<W> {
    connections: Vec<Connection<W>>,
    terminals: Terminals,
}

/// Find a minimum spanning tree (or forest), reading weights as distances and ignoring the
/// direction of connections.
#[derive(Debug, Clone, PartialEq)]
pub struct MstProblem<W> {
    connections: Vec<Connection<W>>,
}

macro_rules! with_terminals {
    ($problem:ident) => {
        impl<W> $problem<W> {
            /// Pose the problem between the lowest and highest node id.
            ///
            /// The connections are only validated once the problem is solved.
            pub fn new(connections: Vec<Connection<W>>) -> Self {
                Self {
                    connections,
                    terminals: Terminals::default(),
                }
            }

            /// Pose the problem between two given nodes instead.
            #[must_use]
            pub fn between(mut self, source: NodeId, terminal: NodeId) -> Self {
                self.terminals = Terminals::Between { source, terminal };
                self
            }

            /// Change which nodes the problem is posed between.
            #[must_use]
            pub fn with_terminals(mut self, terminals: Terminals) -> Self {
                self.terminals = terminals;
                self
            }

            /// All connections of the problem, in input order.
            pub fn connections(&self) -> &[Connection<W>] {
                &self.connections
            }

            /// Nodes the problem is posed between.
            pub fn terminals(&self) -> Terminals {
                self.terminals
            }
        }
    };
}

with_terminals!(ShortestPathProblem);
with_terminals!(MaximumFlowProblem);

impl<W> MstProblem<W> {
    /// Create a new spanning tree problem.
    pub fn new(connections: Vec<Connection<W>>) -> Self {
        Self { connections }
    }

    /// All connections of the problem, in input order.
    pub fn connections(&self) -> &[Connection<W>] {
        &self.connections
    }
}

fn write_connections<W: Display>(f: &mut Formatter, connections: &[Connection<W>]) -> FormatResult {
    for connection in connections {
        writeln!(f, "  {}", connection)?;
    }

    Ok(())
}

impl<W: Display> Display for ShortestPathProblem<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Shortest Path Problem:")?;
        writeln!(f, "Connections: {}\tTerminals: {}", self.connections.len(), self.terminals)?;
        write_connections(f, &self.connections)
    }
}

impl<W: Display> Display for MaximumFlowProblem<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Maximum Flow Problem:")?;
        writeln!(f, "Connections: {}\tTerminals: {}", self.connections.len(), self.terminals)?;
        write_connections(f, &self.connections)
    }
}

impl<W: Display> Display for MstProblem<W> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Minimum Spanning Tree Problem:")?;
        writeln!(f, "Connections: {}", self.connections.len())?;
        write_connections(f, &self.connections)
    }
}
