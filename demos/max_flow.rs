//! # Maximum flow problem
use relp_num::{R64, Rational64};

use orgraph::algorithm::Solve;
use orgraph::data::network::connection::Connection;
use orgraph::data::network::problem::MaximumFlowProblem;

fn main() {
    // Example from Papadimitriou's Combinatorial Optimization, with nodes s = 1, a = 2, b = 3, t = 4
    let connections = vec![
        Connection::named(1, 2, R64!(2), "sa"),
        Connection::named(1, 3, R64!(1), "sb"),
        Connection::named(2, 3, R64!(1), "ab"),
        Connection::named(2, 4, R64!(1), "at"),
        Connection::named(3, 4, R64!(2), "bt"),
    ];
    let problem = MaximumFlowProblem::<Rational64>::new(connections);
    println!("{}", problem);

    match problem.solve() {
        Ok(result) => {
            assert_eq!(result.flow(), &R64!(3));
            println!("{}", result);
        },
        Err(error) => println!("{}", error),
    }
}
