use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use fd_graph::{Extraction, extract_path, flow};

#[derive(Parser)]
#[command(name = "fd-cli")]
#[command(about = "flowdoc CLI - business documentation for graph definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a graph definition and list skipped lines
    Inspect {
        /// Path to the graph definition (.mp) file
        graph_path: PathBuf,
    },
    /// Render the narrative business document
    Report {
        /// Path to the graph definition (.mp) file
        graph_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the dependency-ordered data flow
    Flow {
        /// Path to the graph definition (.mp) file
        graph_path: PathBuf,
    },
    /// Export the model for external collaborators
    #[command(subcommand)]
    Export(ExportCommands),
}

#[derive(Subcommand)]
enum ExportCommands {
    /// Interchange JSON for the narrative-generation service
    Json {
        /// Path to the graph definition (.mp) file
        graph_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Graphviz DOT text for diagram renderers
    Dot {
        /// Path to the graph definition (.mp) file
        graph_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Extract(#[from] fd_graph::ExtractError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { graph_path } => cmd_inspect(&graph_path),
        Commands::Report { graph_path, output } => cmd_report(&graph_path, output.as_deref()),
        Commands::Flow { graph_path } => cmd_flow(&graph_path),
        Commands::Export(export_cmd) => match export_cmd {
            ExportCommands::Json { graph_path, output } => {
                cmd_export_json(&graph_path, output.as_deref())
            }
            ExportCommands::Dot { graph_path, output } => {
                cmd_export_dot(&graph_path, output.as_deref())
            }
        },
    }
}

fn cmd_inspect(graph_path: &Path) -> Result<(), CliError> {
    let extraction = extract_path(graph_path)?;
    let model = &extraction.model;

    if model.name().is_empty() {
        println!("Graph: (unnamed)");
    } else {
        println!("Graph: {}", model.name());
    }
    println!("  Components: {}", model.components().len());
    println!("  Connections: {}", model.edges().len());
    for comp in model.components() {
        println!(
            "  {} ({}) - {} parameter(s)",
            comp.name,
            comp.ctype,
            comp.parameters.len()
        );
    }

    if extraction.skipped.is_empty() {
        println!("✓ No lines skipped");
    } else {
        println!("Skipped {} line(s):", extraction.skipped.len());
        for skip in &extraction.skipped {
            println!("  line {}: {}", skip.line, skip.text);
        }
    }
    Ok(())
}

fn cmd_report(graph_path: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let extraction = extract_path(graph_path)?;
    write_artifact(&fd_report::render_report(&extraction), output)
}

fn cmd_flow(graph_path: &Path) -> Result<(), CliError> {
    let extraction = extract_path(graph_path)?;
    let model = &extraction.model;
    let traversal = flow::order(model);

    if traversal.fell_back() {
        println!("No full dependency order exists; showing declaration order");
    }
    for (i, name) in traversal.sequence().iter().enumerate() {
        let targets = model.successors(name);
        if targets.is_empty() {
            println!("{:>3}. {}", i + 1, name);
        } else {
            println!("{:>3}. {} -> {}", i + 1, name, targets.join(", "));
        }
    }
    Ok(())
}

fn cmd_export_json(graph_path: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let Extraction { model, .. } = extract_path(graph_path)?;
    write_artifact(&fd_report::to_json(&model)?, output)
}

fn cmd_export_dot(graph_path: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let Extraction { model, .. } = extract_path(graph_path)?;
    write_artifact(&fd_report::to_dot(&model), output)
}

fn write_artifact(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("✓ Written: {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
