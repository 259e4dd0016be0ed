use clap::Parser;
use std::fs;

use assetgraph::prelude::*;

/// Validate, preview, and lay out node-graph JSON documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file ({nodes, edges, positions?})
    graph_path: String,

    /// Print the canonical spec as pretty JSON instead of compact
    #[arg(long)]
    pretty: bool,

    /// Discard saved positions and show freshly assigned grid positions
    #[arg(long)]
    layout: bool,

    /// Only validate; do not print the canonical spec
    #[arg(short = 'c', long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });

    let registry = NodeTypeRegistry::builtin();
    let transformer = GraphTransformer::new(&registry);

    // Import runs the full validation pass; an invalid document surfaces
    // every accumulated error at once.
    let mut imported = transformer
        .import_json(&json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    for warning in &imported.warnings {
        eprintln!("warning: {}", warning);
    }
    println!(
        "Graph OK: {} nodes, {} edges",
        imported.nodes.len(),
        imported.edges.len()
    );

    if cli.layout {
        let edges = imported.edges.clone();
        assetgraph::layout::assign_positions(&mut imported.nodes, &edges);
        for node in &imported.nodes {
            if let Some(pos) = node.position {
                println!("  {} ({}) at ({}, {})", node.id, node.label, pos.x, pos.y);
            }
        }
    }

    if cli.check {
        return;
    }

    let spec = transformer.to_backend_format(&imported.nodes, &imported.edges);
    let rendered = if cli.pretty {
        export_json(&spec).unwrap_or_else(|e| exit_with_error(&e.to_string()))
    } else {
        serde_json::to_string(&spec).unwrap_or_else(|e| exit_with_error(&e.to_string()))
    };
    println!("{}", rendered);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
