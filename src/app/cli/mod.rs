//! CLI Adapter.

mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::adapters::DEFAULT_DOCKER_PROGRAM;
use crate::app::api;
use crate::domain::AppError;
use crate::domain::tool_listing::render_table;
use crate::ports::BuildStatus;

const RULE: &str = "==================================================";

#[derive(Parser)]
#[command(name = "cli-tools")]
#[command(version)]
#[command(
    about = "Build a Docker image bundling the command-line tools listed in cli-tools.yml",
    long_about = None
)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = api::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Increase diagnostic output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Dockerfile.generated and build the image
    #[clap(visible_alias = "b")]
    Build {
        /// Container build executable
        #[arg(long, env = "CLI_TOOLS_DOCKER", default_value = DEFAULT_DOCKER_PROGRAM)]
        docker: String,
    },
    /// Generate the Dockerfile without building
    #[clap(visible_aliases = ["g", "dry-run"])]
    Generate {
        /// Output Dockerfile path
        #[arg(short, long, default_value = api::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// List configured tools and their status
    #[clap(visible_alias = "ls")]
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a starter cli-tools.yml and entrypoint.sh
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Build { docker } => run_build(&cli.config, &docker),
        Commands::Generate { output } => run_generate(&cli.config, &output).map(|_| 0),
        Commands::List { json } => run_list(&cli.config, json).map(|_| 0),
        Commands::Init { force } => run_init(&cli.config, force).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_build(config_path: &Path, docker: &str) -> Result<i32, AppError> {
    let config = api::load_config(config_path)?;
    ensure_enabled(&config)?;

    let prepared = api::prepare_build(&config, docker)?;
    println!("Generated Dockerfile: {}", prepared.request.dockerfile.display());

    println!("\nBuilding Docker image: {}", prepared.request.tag);
    println!("{}", RULE);

    let outcome = api::run_build(prepared, docker)?;
    match outcome.status {
        BuildStatus::Succeeded => {
            println!("{}", RULE);
            println!("Successfully built: {}", outcome.image);
            Ok(0)
        }
        BuildStatus::Failed { exit_code: Some(code) } => {
            eprintln!("Build failed with exit code: {}", code);
            Ok(1)
        }
        BuildStatus::Failed { exit_code: None } => {
            eprintln!("Build failed: builder terminated by signal");
            Ok(1)
        }
    }
}

fn run_generate(config_path: &Path, output: &Path) -> Result<(), AppError> {
    let config = api::load_config(config_path)?;
    ensure_enabled(&config)?;

    let outcome = api::generate(&config, output)?;
    println!("\nGenerated Dockerfile: {}", outcome.output.display());
    println!("\nTo build manually:");
    println!("  docker build -t {} -f {} .", config.image_reference(), outcome.output.display());
    Ok(())
}

fn run_list(config_path: &Path, json: bool) -> Result<(), AppError> {
    let config = api::load_config(config_path)?;
    let rows = api::list(&config);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", render_table(&rows));
    }
    Ok(())
}

fn run_init(config_path: &Path, force: bool) -> Result<(), AppError> {
    let outcome = api::init(config_path, force)?;

    println!("✅ Wrote {}", outcome.config.display());
    if let Some(entrypoint) = outcome.entrypoint {
        println!("✅ Wrote {}", entrypoint.display());
    }
    Ok(())
}

/// Print the enabled tools, or fail when there are none.
fn ensure_enabled(config: &api::ToolsConfig) -> Result<(), AppError> {
    let enabled = config.enabled_tools();
    if enabled.is_empty() {
        return Err(AppError::NoEnabledTools);
    }

    let names: Vec<&str> = enabled.iter().map(|tool| tool.name.as_str()).collect();
    println!("Enabled tools: {}", names.join(", "));
    Ok(())
}
