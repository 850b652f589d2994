use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use blockgen::config::{GeneratorConfig, find_config};
use blockgen::diagnostics::{GenError, render_error};
use blockgen::session::load_session;
use blockgen::tree::{blocks_to_flattened_nodes, blocks_to_tree_nodes, print_nodes};

#[derive(Parser)]
#[command(name = "blockgen", version, about = "Synthesize source code from block sessions")]
struct Cli {
    /// Path to blockgen.toml (defaults to searching upward from the input file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log block construction and lowering to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the function for a session
    Generate {
        /// Session JSON: a state object or an array of blocks
        file: PathBuf,
        /// Output path. If omitted, prints to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the block forest as trees
    Tree {
        /// Session JSON file
        file: PathBuf,
    },
    /// Print the pre-order flattening as `depth index blockType` lines
    Flatten {
        /// Session JSON file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn resolve_config(explicit: Option<&Path>, input: &Path) -> Result<GeneratorConfig, GenError> {
    if let Some(path) = explicit {
        return GeneratorConfig::load(path);
    }
    let start = input.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    match find_config(start) {
        Some(path) => GeneratorConfig::load(&path),
        None => Ok(GeneratorConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), GenError> {
    match cli.command {
        Commands::Generate { file, output } => {
            let config = resolve_config(cli.config.as_deref(), &file)?;
            let state = load_session(&file)?;
            let code = blockgen::generate_code(&state.blocks, &state, &config)?;
            match output {
                Some(path) => std::fs::write(&path, &code)
                    .map_err(|e| GenError::io(format!("could not write output: {e}"), path.clone()))?,
                None => print!("{code}"),
            }
        }
        Commands::Tree { file } => {
            let state = load_session(&file)?;
            print_nodes(&blocks_to_tree_nodes(&state.blocks, 0));
        }
        Commands::Flatten { file } => {
            let state = load_session(&file)?;
            for node in blocks_to_flattened_nodes(&state.blocks) {
                println!("{} {} {}", node.depth, node.block.index(), node.block.block_type());
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        render_error(&err);
        std::process::exit(1);
    }
}
