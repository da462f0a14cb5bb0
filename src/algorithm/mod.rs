//! # Algorithms
//!
//! Each network problem is solved by its own algorithm; all of them share the `Solve` contract.
use crate::error::SolveError;

pub mod disjoint_set;
pub mod max_flow;
pub mod shortest_path;
pub mod spanning_tree;

/// A problem that can be solved into a self-contained solution.
///
/// Solving is a pure, deterministic computation: all intermediate structures are created for the
/// call and dropped at its end, so solving the same problem twice yields the same solution and
/// problems can be solved on different threads independently.
pub trait Solve {
    /// What a successful solve produces.
    type Solution;

    /// Solve this problem.
    ///
    /// # Errors
    ///
    /// If the connections of the problem don't form a valid network, or if the problem has no
    /// solution.
    fn solve(&self) -> Result<Self::Solution, SolveError>;
}

/// Solve any problem, see `Solve::solve`.
///
/// # Errors
///
/// Whatever the problem's `Solve` implementation reports.
pub fn solve<P: Solve>(problem: &P) -> Result<P::Solution, SolveError> {
    problem.solve()
}
