//! Reads a graph file and prints it back, formatted and in its plain text form.
//!
//! ```bash
//! ringgraph -f graph.txt
//! ringgraph -f graph.txt --mode directed --names
//! ```

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ringgraph::{read_str, write, Direction, Graph, VertexKey};
use tracing::info;

#[derive(Parser)]
#[command(name = "ringgraph")]
#[command(about = "Reads a graph from a text file and prints it back", long_about = None)]
#[command(version)]
struct Cli {
    /// Graph file: one vertex or one `source target` edge per line
    #[arg(short, long)]
    file: PathBuf,

    /// Which readings of the file to print
    #[arg(short, long, value_enum, default_value = "both")]
    mode: ModeArg,

    /// Treat vertex keys as names instead of integer ids
    #[arg(long)]
    names: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Directed,
    Undirected,
    Both,
}

impl ModeArg {
    fn directions(self) -> &'static [Direction] {
        match self {
            ModeArg::Directed => &[Direction::Directed],
            ModeArg::Undirected => &[Direction::Undirected],
            ModeArg::Both => &[Direction::Undirected, Direction::Directed],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("unable to open {}", cli.file.display()))?;
    info!(file = %cli.file.display(), "loaded graph file");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, &direction) in cli.mode.directions().iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        if cli.names {
            print_reading::<String>(&text, direction, &mut out)?;
        } else {
            print_reading::<i64>(&text, direction, &mut out)?;
        }
    }

    Ok(())
}

fn print_reading<K: VertexKey>(
    text: &str,
    direction: Direction,
    out: &mut impl Write,
) -> Result<()> {
    let (name, title) = match direction {
        Direction::Undirected => ("und_graph", "undirected graph example"),
        Direction::Directed => ("d_graph", "directed graph example"),
    };

    let mut graph: Graph<K> =
        read_str(name, text, direction).with_context(|| format!("unable to read {}", name))?;

    writeln!(out, "-------------------------")?;
    writeln!(out, "{}", title)?;
    writeln!(out, "-------------------------")?;
    writeln!(out, "\nformatted output:\n")?;
    write!(out, "{}", graph.display(direction))?;
    writeln!(out, "\nnormal output:\n")?;
    write(&graph, &mut *out, direction)?;

    graph.clear()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("ringgraph=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ringgraph=warn,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
