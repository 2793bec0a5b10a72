//! CLI entry point for dirmap

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use dirmap::{
    Error, ExclusionSet, OutputFormat, Result, TreeWalker, WalkerConfig, logging, output_path,
    write_output,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Write a directory tree to output/ as tree text, YAML-like text, or JSON")]
#[command(version)]
struct Args {
    /// Directory to scan
    target_dir: Option<PathBuf>,

    /// Output format: tree, yaml or json
    #[arg(default_value = "tree")]
    format: String,

    /// Comma-separated directory names to show as omitted instead of expanding
    #[arg(default_value = "")]
    excluded_dirs: String,

    /// Only omit directories; files with an excluded name are listed normally
    #[arg(long = "exclude-dirs-only")]
    exclude_dirs_only: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace; RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version are not failures
        if !e.use_stderr() {
            e.exit();
        }
        eprintln!("dirmap: argument parsing error: {}", e);
        process::exit(1);
    });

    logging::init(args.verbose);

    match run(&args) {
        Ok(path) => println!("Wrote directory structure to {}", path.display()),
        Err(e) => {
            eprintln!("dirmap: {}", e);
            process::exit(1);
        }
    }
}

/// Validate arguments, walk, render and write. Returns the written path.
fn run(args: &Args) -> Result<PathBuf> {
    let target = args
        .target_dir
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(Error::MissingArgument)?;

    if !target.exists() {
        return Err(Error::PathNotFound {
            path: target.clone(),
        });
    }

    let format: OutputFormat = args.format.parse()?;

    let config = WalkerConfig::new(ExclusionSet::from_arg(&args.excluded_dirs))
        .with_exclude_dirs_only(args.exclude_dirs_only);
    if !config.excluded.is_empty() {
        info!(
            count = config.excluded.len(),
            dirs_only = config.exclude_dirs_only,
            "excluding names"
        );
    }
    let tree = TreeWalker::new(config).walk(target)?;

    let stats = tree.stats();
    info!(
        directories = stats.directories,
        files = stats.files,
        elided = stats.elided,
        "walked {}",
        target.display()
    );

    let text = format.render(&tree)?;
    let path = output_path(&tree.name, format);
    write_output(&path, &text)?;
    info!(path = %path.display(), bytes = text.len(), %format, "wrote output");

    Ok(path)
}
