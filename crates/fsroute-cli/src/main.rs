mod commands;
mod config;
mod scan;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "fsroute")]
#[command(version, about = "fsroute CLI - compile file-based route patterns", long_about = None)]
struct Cli {
    /// Project root containing fsroute.toml
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a single route pattern
    Compile {
        /// Pattern like /users/[id:number]/posts/[[slug]]
        pattern: String,

        /// Enable strict validation
        #[arg(long)]
        strict: bool,

        /// Also list the named parameters
        #[arg(short, long)]
        params: bool,
    },

    /// List plugins, middleware and routes found in the source directory
    Routes {
        /// Source directory (overrides src_dir)
        #[arg(long)]
        src_dir: Option<String>,

        /// URL prefix (overrides prefix)
        #[arg(long)]
        prefix: Option<String>,

        /// Enable strict validation
        #[arg(long)]
        strict: bool,

        /// Print the route table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every route in strict mode
    Check {
        /// Source directory (overrides src_dir)
        #[arg(long)]
        src_dir: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_from_root(&cli.root)?;

    // Execute command
    match cli.command {
        Commands::Compile {
            pattern,
            strict,
            params,
        } => {
            let config = config.with_overrides(None, None, strict);
            commands::compile::execute(&config, &pattern, params)?;
        }
        Commands::Routes {
            src_dir,
            prefix,
            strict,
            json,
        } => {
            let config = config.with_overrides(src_dir, prefix, strict);
            commands::routes::execute(&config, &cli.root, json)?;
        }
        Commands::Check { src_dir } => {
            let config = config.with_overrides(src_dir, None, true);
            commands::check::execute(&config, &cli.root)?;
        }
    }

    Ok(())
}
