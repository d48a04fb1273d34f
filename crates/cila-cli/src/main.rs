use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "cila")]
#[command(about = "Cila — indentation-based document markup to XML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a .cila file to XML
    Build {
        /// Input .cila file
        path: String,
    },

    /// Parse a .cila file and report what it contains
    Check {
        /// Input .cila file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path } => cmd_build(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str) {
    let source = read_source(path);

    let doc = cila_parser::Parser::parse(&source);
    let xml = cila_codegen::render(&doc);

    // Write output next to the source
    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let dir = Path::new(path).parent().unwrap_or(Path::new("."));
    let xml_path = dir.join(format!("{stem}.xml"));

    if let Err(e) = std::fs::write(&xml_path, &xml) {
        eprintln!("Error writing {}: {e}", xml_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", xml_path.display());
}

fn cmd_check(path: &str) {
    let source = read_source(path);

    let doc = cila_parser::Parser::parse(&source);
    let (elements, text_runs) = count_nodes(&doc.nodes);

    eprintln!("OK: {path} ({elements} elements, {text_runs} text runs)");
}

fn count_nodes(nodes: &[cila_parser::Node]) -> (usize, usize) {
    let mut elements = 0;
    let mut text_runs = 0;
    for node in nodes {
        match node {
            cila_parser::Node::Element(el) => {
                elements += 1;
                let (e, t) = count_nodes(&el.content);
                elements += e;
                text_runs += t;
            }
            cila_parser::Node::Text(_) => text_runs += 1,
        }
    }
    (elements, text_runs)
}
