//! # Minimum spanning tree problem
use orgraph::algorithm::Solve;
use orgraph::data::network::connection::Connection;
use orgraph::data::network::problem::MstProblem;

fn main() {
    // Two separate components: the result is a forest of two trees
    let connections = vec![
        Connection::new(1, 2, 4.0),
        Connection::new(2, 3, 1.5),
        Connection::new(1, 3, 2.0),
        Connection::new(4, 5, 3.0),
    ];
    let problem = MstProblem::new(connections);
    println!("{}", problem);

    match problem.solve() {
        Ok(result) => {
            assert_eq!(result.nr_trees(), 2);
            println!("{}", result);
        },
        Err(error) => println!("{}", error),
    }
}
