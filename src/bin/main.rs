use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};

use orgraph::algorithm::Solve;
use orgraph::data::network::NodeId;
use orgraph::data::network::connection::Connection;
use orgraph::data::network::problem::{MaximumFlowProblem, MstProblem, ShortestPathProblem, Terminals};
use orgraph::io::import;

/// Shortest paths, maximum flows and minimum spanning trees over a list of connections.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Problem to solve over the connections
    #[arg(value_enum)]
    problem: ProblemKind,
    /// File containing the connections, one `from to weight [name]` per line
    problem_file: PathBuf,
    /// Node a path or flow starts at, the lowest node id by default
    #[arg(long, requires = "terminal")]
    source: Option<NodeId>,
    /// Node a path or flow ends at, the highest node id by default
    #[arg(long, requires = "source")]
    terminal: Option<NodeId>,
}

#[derive(Copy, Clone, ValueEnum)]
enum ProblemKind {
    ShortestPath,
    MaxFlow,
    Mst,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let connections: Vec<Connection<f64>> = match import(&opts.problem_file) {
        Ok(connections) => connections,
        Err(error) => {
            eprintln!("Couldn't read the file: {}", error);
            exit(1);
        },
    };

    let terminals = match (opts.source, opts.terminal) {
        (Some(source), Some(terminal)) => Terminals::Between { source, terminal },
        _ => Terminals::Extremes,
    };

    println!("Solving...");
    let result = match opts.problem {
        ProblemKind::ShortestPath => ShortestPathProblem::new(connections)
            .with_terminals(terminals)
            .solve()
            .map(|result| result.to_string()),
        ProblemKind::MaxFlow => MaximumFlowProblem::new(connections)
            .with_terminals(terminals)
            .solve()
            .map(|result| result.to_string()),
        ProblemKind::Mst => MstProblem::new(connections)
            .solve()
            .map(|result| result.to_string()),
    };

    match result {
        Ok(solution) => print!("{}", solution),
        Err(error) => {
            eprintln!("Problem could not be solved: {}", error);
            exit(1);
        },
    }
}
