//! Command-line breadth-first reachability over graph files.
//!
//! Loads a graph from the text format (`n m type` header followed by one
//! `src dst weight` line per edge), runs BFS from the given source node,
//! reports how many nodes are reachable, and — when a destination is given —
//! writes the shortest-hop path to an output artifact.
//!
//! # Examples
//!
//! ```bash
//! # Reachability report only
//! hopgraph 0 graph100.in
//!
//! # Shortest-hop path from 0 to 49, written to graph100.in.out
//! hopgraph 0 graph100.in --dest 49
//!
//! # Read the graph from standard input, print the path to stdout
//! cat graph100.in | hopgraph 0 - --dest 49
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hopgraph_core::{bfs, format_path, graph::io::read_graph, Graph};

#[derive(Parser)]
#[command(name = "hopgraph", version, about = "Breadth-first reachability and shortest-hop paths")]
struct Cli {
    /// Source node index
    source: usize,

    /// Graph file in the `n m type` text format, or `-` for standard input
    file: String,

    /// Destination node: also reconstruct the shortest-hop path to it
    #[arg(short, long)]
    dest: Option<usize>,

    /// Where to write the path (default: `<FILE>.out`, stdout when reading
    /// from standard input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let graph = load_graph(&cli.file)?;
    let n = graph.node_count();

    if cli.source >= n {
        bail!("source node {} out of range: this graph has nodes 0..{n}", cli.source);
    }
    if let Some(dest) = cli.dest {
        if dest >= n {
            bail!("destination node {dest} out of range: this graph has nodes 0..{n}");
        }
    }

    let result = bfs(&graph, cli.source);
    println!(
        "{} of {} nodes reachable from node {}",
        result.reachable_count(),
        n,
        cli.source
    );

    if let Some(dest) = cli.dest {
        let rendered = match result.path_to(dest) {
            Some(path) => format_path(&path),
            None => "unreachable".to_string(),
        };
        match output_target(&cli) {
            Some(path) => {
                fs::write(&path, format!("{rendered}\n"))
                    .with_context(|| format!("cannot write {}", path.display()))?;
                info!(path = %path.display(), "path written");
                println!("path written to {}", path.display());
            }
            None => println!("{rendered}"),
        }
    }

    Ok(())
}

fn load_graph(file: &str) -> Result<Graph> {
    if file == "-" {
        let stdin = io::stdin();
        read_graph(stdin.lock()).context("cannot read graph from standard input")
    } else {
        Graph::from_path(file).with_context(|| format!("cannot read graph from {file}"))
    }
}

/// The path artifact destination: an explicit `--output`, the input file
/// name with `.out` appended, or `None` (stdout) for stdin input.
fn output_target(cli: &Cli) -> Option<PathBuf> {
    match (&cli.output, cli.file.as_str()) {
        (Some(path), _) => Some(path.clone()),
        (None, "-") => None,
        (None, file) => Some(PathBuf::from(format!("{file}.out"))),
    }
}
