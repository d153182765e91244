use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use htkviz::{Format, Grammar, Renderer};
use tracing_subscriber::EnvFilter;

/// A basic parser to turn HTK grammar networks into rendered images.
///
/// The image is written next to the grammar, as `<GRAMMAR>multi.<FILETYPE>`.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The grammar to be rendered.
    grammar: Option<PathBuf>,
    /// Type of file to render.
    #[arg(short, long, default_value = "svg")]
    filetype: Filetype,
    /// Show null nodes.
    #[arg(short, long)]
    null: bool,
    /// The graphviz program to lay out the graph with.
    #[arg(long, value_name = "PROGRAM", default_value = "dot")]
    dot: PathBuf,
}

#[derive(ValueEnum, Clone, Copy)]
enum Filetype {
    Svg,
    Png,
}

impl From<Filetype> for Format {
    fn from(value: Filetype) -> Self {
        match value {
            Filetype::Svg => Format::Svg,
            Filetype::Png => Format::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    let Args {
        grammar,
        filetype,
        null,
        dot,
    } = args;
    let path = grammar.context("no grammar given")?;
    let grammar = Grammar::load(&path).context("error reading grammar")?;
    let graph = grammar.graph(null);
    Renderer::new(dot)
        .render(&graph, filetype.into(), &path)
        .context("error rendering grammar")?;
    Ok(())
}
