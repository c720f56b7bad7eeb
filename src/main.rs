//! CLI entry point for mdtoc

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdtoc::{OUTPUT_FILENAME, Scanner, render_outline};

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate an aggregated toc.md outline for a tree of Markdown documents")]
#[command(version)]
struct Args {
    /// Directory to scan
    path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // The path is optional at the clap level so a missing argument exits 1,
    // not clap's default 2
    let Some(path) = args.path else {
        eprintln!("mdtoc: please provide a directory path:");
        eprintln!("  mdtoc <directory>");
        process::exit(1);
    };

    let root = if path.is_absolute() {
        path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&path)
    };

    if !root.exists() {
        eprintln!("mdtoc: directory does not exist: {}", root.display());
        process::exit(1);
    }

    if !root.is_dir() {
        eprintln!("mdtoc: path is not a directory: {}", root.display());
        process::exit(1);
    }

    println!("Scanning directory: {}", root.display());

    let structure = Scanner::new(&root).scan();
    let outline = render_outline(&structure);

    let output_path = root.join(OUTPUT_FILENAME);
    if let Err(e) = std::fs::write(&output_path, &outline) {
        eprintln!("mdtoc: error writing '{}': {}", output_path.display(), e);
        process::exit(1);
    }

    println!("Created {}", output_path.display());
}
