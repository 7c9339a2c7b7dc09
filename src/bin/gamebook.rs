use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use gamebook::{read_nodes_from_file, render_document};

#[derive(Debug, Parser)]
#[command(version, about = "Compile a narrative script into a cross-linked gamebook document")]
struct Args {
    /// Script file: one paragraph per line, headers like `Scene 1:`,
    /// `Choice 2:` or `Continuation of Choice 1.2:`.
    input: PathBuf,

    /// Output file. Defaults to the input path with an `.html` extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title.
    #[arg(long, default_value = "Story scheme")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let nodes = read_nodes_from_file(&args.input)?;
    let document = render_document(&nodes, &args.title);

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("html"));

    fs::write(&output, document)
        .with_context(|| format!("could not write document to '{}'", output.display()))?;

    println!("Nodes written: {}", nodes.len());
    println!("File: {}", output.display());

    Ok(())
}
