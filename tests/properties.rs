//! # Properties checked against brute force
//!
//! Small random networks are solved both by the algorithms of the crate and by exhaustive
//! enumeration, after which the results are compared.
use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use orgraph::algorithm::Solve;
use orgraph::data::network::NodeId;
use orgraph::data::network::connection::Connection;
use orgraph::data::network::problem::{MaximumFlowProblem, MstProblem, ShortestPathProblem};
use orgraph::error::SolveError;

const NR_ROUNDS: usize = 200;

/// Random connections between nodes `1..=nr_nodes`, with integer weights.
///
/// All weights are small integers, so floating point sums are exact.
fn random_connections(rng: &mut impl Rng, nr_nodes: usize, nr_connections: usize) -> Vec<Connection<f64>> {
    (0..nr_connections)
        .map(|_| {
            let from = rng.random_range(1..=nr_nodes);
            let to = loop {
                let to = rng.random_range(1..=nr_nodes);
                if to != from {
                    break to;
                }
            };
            Connection::new(from, to, rng.random_range(0..10) as f64)
        })
        .collect()
}

fn random_terminals(rng: &mut impl Rng, nr_nodes: usize) -> (NodeId, NodeId) {
    let source = rng.random_range(1..=nr_nodes);
    let terminal = loop {
        let terminal = rng.random_range(1..=nr_nodes);
        if terminal != source {
            break terminal;
        }
    };

    (source, terminal)
}

/// Cheapest simple path by enumerating all of them.
fn brute_force_shortest_path(connections: &[Connection<f64>], source: NodeId, terminal: NodeId) -> Option<f64> {
    fn extend(
        connections: &[Connection<f64>],
        node: NodeId,
        terminal: NodeId,
        visited: &mut BTreeSet<NodeId>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if node == terminal {
            if best.is_none_or(|value| cost < value) {
                *best = Some(cost);
            }
            return;
        }

        for connection in connections.iter().filter(|connection| connection.from() == node) {
            if visited.insert(connection.to()) {
                extend(connections, connection.to(), terminal, visited, cost + connection.weight(), best);
                visited.remove(&connection.to());
            }
        }
    }

    let mut best = None;
    extend(connections, source, terminal, &mut BTreeSet::from([source]), 0.0, &mut best);
    best
}

/// Capacity of the connections leaving a set of nodes.
fn cut_capacity(connections: &[Connection<f64>], source_side: &BTreeSet<NodeId>) -> f64 {
    connections.iter()
        .filter(|c| source_side.contains(&c.from()) && !source_side.contains(&c.to()))
        .map(|c| c.weight())
        .sum()
}

/// Minimum cut capacity by enumerating all cuts of nodes `1..=nr_nodes`.
fn brute_force_minimum_cut(connections: &[Connection<f64>], nr_nodes: usize, source: NodeId, terminal: NodeId) -> f64 {
    (0_u32..1 << nr_nodes)
        .map(|mask| (1..=nr_nodes).filter(|&node| mask & (1 << (node - 1)) != 0).collect::<BTreeSet<_>>())
        .filter(|side| side.contains(&source) && !side.contains(&terminal))
        .map(|side| cut_capacity(connections, &side))
        .fold(f64::INFINITY, f64::min)
}

/// Merge the components of both endpoints of a connection.
///
/// # Return value
///
/// `false` if they were in the same component already.
fn merge(label: &mut [usize], connection: &Connection<f64>) -> bool {
    let (keep, replace) = (label[connection.from()], label[connection.to()]);
    for value in label.iter_mut() {
        if *value == replace {
            *value = keep;
        }
    }

    keep != replace
}

/// Component label for each node `1..=nr_nodes`, merging along the given connections.
///
/// # Return value
///
/// The labels, or `None` if one of the connections closes a cycle.
fn forest_components<'a>(nr_nodes: usize, connections: impl IntoIterator<Item=&'a Connection<f64>>) -> Option<Vec<usize>> {
    let mut label = (0..=nr_nodes).collect::<Vec<_>>();
    for connection in connections {
        if !merge(&mut label, connection) {
            return None;
        }
    }

    Some(label)
}

fn nr_components(label: &[usize], nodes: &BTreeSet<NodeId>) -> usize {
    nodes.iter().map(|&node| label[node]).collect::<BTreeSet<_>>().len()
}

/// Lightest spanning forest by enumerating all subsets of connections of the right size.
fn brute_force_spanning_forest(connections: &[Connection<f64>], nr_nodes: usize, nr_edges: usize) -> f64 {
    (0_u32..1 << connections.len())
        .filter(|mask| mask.count_ones() as usize == nr_edges)
        .filter_map(|mask| {
            let subset = connections.iter()
                .enumerate()
                .filter(|&(j, _)| mask & (1 << j) != 0)
                .map(|(_, connection)| connection)
                .collect::<Vec<_>>();
            forest_components(nr_nodes, subset.iter().copied())
                .map(|_| subset.iter().map(|connection| connection.weight()).sum::<f64>())
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn shortest_path() {
    let mut rng = Pcg64Mcg::seed_from_u64(12345);

    for _ in 0..NR_ROUNDS {
        let nr_nodes = rng.random_range(2..=7);
        let nr_connections = rng.random_range(1..=12);
        let connections = random_connections(&mut rng, nr_nodes, nr_connections);
        let (source, terminal) = random_terminals(&mut rng, nr_nodes);

        let problem = ShortestPathProblem::new(connections.clone()).between(source, terminal);
        let expected = brute_force_shortest_path(&connections, source, terminal);
        match (problem.solve(), expected) {
            (Ok(result), Some(cost)) => {
                assert_eq!(result.cost(), &cost);
                assert_eq!(result.path().iter().map(|c| c.weight()).sum::<f64>(), cost);

                let nodes = result.nodes();
                assert_eq!(nodes.first(), Some(&source));
                assert_eq!(nodes.last(), Some(&terminal));
                assert!(result.path().windows(2).all(|pair| pair[0].to() == pair[1].from()));
                assert!(result.path().iter().all(|c| connections.contains(c)));
            },
            (Err(error), None) => assert_eq!(error, SolveError::Unreachable { from: source, to: terminal }),
            (result, expected) => panic!("solver found {:?}, brute force {:?}", result, expected),
        }

        assert_eq!(problem.solve(), problem.solve());
    }
}

#[test]
fn max_flow() {
    let mut rng = Pcg64Mcg::seed_from_u64(54321);

    for _ in 0..NR_ROUNDS {
        let nr_nodes = rng.random_range(2..=7);
        let nr_connections = rng.random_range(1..=14);
        let connections = random_connections(&mut rng, nr_nodes, nr_connections);
        let (source, terminal) = random_terminals(&mut rng, nr_nodes);

        let problem = MaximumFlowProblem::new(connections.clone()).between(source, terminal);
        let result = problem.solve().unwrap();
        let flow = *result.flow();

        assert_eq!(flow, brute_force_minimum_cut(&connections, nr_nodes, source, terminal));
        assert_eq!(flow, result.outflow(source) - result.inflow(source));
        assert_eq!(flow, result.inflow(terminal) - result.outflow(terminal));
        for node in (1..=nr_nodes).filter(|&node| node != source && node != terminal) {
            assert_eq!(result.inflow(node), result.outflow(node));
        }

        // Never more flow than capacity
        assert!(result.path().iter().all(|sent| {
            *sent.weight() > 0.0 && connections.iter().any(|c| {
                c.endpoints() == sent.endpoints() && c.name() == sent.name() && c.weight() >= sent.weight()
            })
        }));

        let source_side = result.source_side().iter().copied().collect::<BTreeSet<_>>();
        let source_in_network = connections.iter().any(|c| c.from() == source || c.to() == source);
        assert_eq!(source_side.contains(&source), source_in_network);
        assert!(!source_side.contains(&terminal));
        assert_eq!(cut_capacity(&connections, &source_side), flow);

        assert_eq!(problem.solve(), problem.solve());
    }
}

#[test]
fn spanning_tree() {
    let mut rng = Pcg64Mcg::seed_from_u64(31415);

    for _ in 0..NR_ROUNDS {
        let nr_nodes = rng.random_range(2..=8);
        let nr_connections = rng.random_range(1..=10);
        let connections = random_connections(&mut rng, nr_nodes, nr_connections);
        let nodes = connections.iter()
            .flat_map(|c| [c.from(), c.to()])
            .collect::<BTreeSet<_>>();

        let mut label = (0..=nr_nodes).collect::<Vec<_>>();
        for connection in &connections {
            merge(&mut label, connection);
        }
        let nr_trees = nr_components(&label, &nodes);

        let problem = MstProblem::new(connections.clone());
        let result = problem.solve().unwrap();

        assert_eq!(result.nr_trees(), nr_trees);
        assert_eq!(result.connections().len(), nodes.len() - nr_trees);
        assert!(forest_components(nr_nodes, result.connections()).is_some(), "contains a cycle");
        assert_eq!(result.connections().iter().map(|c| c.weight()).sum::<f64>(), *result.distance());
        assert_eq!(
            *result.distance(),
            brute_force_spanning_forest(&connections, nr_nodes, nodes.len() - nr_trees),
        );

        assert_eq!(problem.solve(), problem.solve());
    }
}
