//! # Shortest path problem
use relp_num::{R64, Rational64};

use orgraph::algorithm::Solve;
use orgraph::data::network::connection::Connection;
use orgraph::data::network::problem::ShortestPathProblem;

fn main() {
    // Example from Papadimitriou's Combinatorial Optimization, with nodes s = 1, a = 2, b = 3, t = 4
    let connections = vec![
        Connection::named(1, 2, R64!(1), "sa"),
        Connection::named(1, 3, R64!(2), "sb"),
        Connection::named(2, 3, R64!(2), "ab"),
        Connection::named(2, 4, R64!(3), "at"),
        Connection::named(3, 4, R64!(1), "bt"),
    ];
    let problem = ShortestPathProblem::<Rational64>::new(connections);
    println!("{}", problem);

    match problem.solve() {
        Ok(result) => {
            assert_eq!(result.cost(), &R64!(3));
            println!("{}", result);
        },
        Err(error) => println!("{}", error),
    }
}
