//! `scaffold` CLI: reconstruct Kotlin views and print the results.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use scaffold_analysis::{Analyzer, ParseContext};
use scaffold_core::ScaffoldConfig;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Reconstruct class models and UI view hierarchies for test scaffolding")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct Kotlin source files and print the full run output
    Analyze {
        /// Kotlin source files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Reconstruct a generic syntax tree given as JSON
    Tree {
        /// JSON file holding one `file` node
        path: PathBuf,
    },

    /// Print the per-view bundles a test generator consumes
    Views {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print each class's view hierarchy as an indented outline
    Hierarchy {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    scaffold_core::tracing::init_tracing_with_default("warn");
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScaffoldConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScaffoldConfig::default(),
    };
    let analyzer = Analyzer::new(&config);
    tracing::debug!(strategies = ?analyzer.strategies().names(), "analyzer ready");

    match &cli.command {
        Commands::Analyze { files } => {
            let cx = run_files(&analyzer, files)?;
            print_json(&cx, cli.pretty)
        }
        Commands::Tree { path } => {
            let json = read(path)?;
            let mut cx = ParseContext::new();
            analyzer
                .analyze_json(&json, &mut cx)
                .with_context(|| format!("reconstructing {}", path.display()))?;
            print_json(&cx, cli.pretty)
        }
        Commands::Views { files } => {
            let cx = run_files(&analyzer, files)?;
            print_json(&cx.test_class_infos(), cli.pretty)
        }
        Commands::Hierarchy { files } => {
            let cx = run_files(&analyzer, files)?;
            for (class, digraph) in cx.digraphs.iter().filter(|(_, g)| !g.is_empty()) {
                println!("{class}");
                print!("{}", digraph.render_tree());
            }
            Ok(())
        }
    }
}

fn run_files(analyzer: &Analyzer, files: &[PathBuf]) -> Result<ParseContext> {
    let sources = files
        .iter()
        .map(|p| Ok((p.display().to_string(), read(p)?)))
        .collect::<Result<Vec<_>>>()?;
    let batch = analyzer.analyze_sources(&sources);
    for (path, err) in &batch.failures {
        eprintln!("scaffold: {path}: {err}");
    }
    if !sources.is_empty() && batch.failures.len() == sources.len() {
        bail!("every input file failed");
    }
    Ok(batch.context)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
