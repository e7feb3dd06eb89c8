use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod catalog;
mod classify;
mod config;
mod data;
mod links;
mod render;
mod types;

use config::Settings;
use data::DATA_FILE;
use render::{OUTPUT_FILE, TEMPLATE_FILE};

const CONFIG_FILE: &str = "checklist.conl";

#[derive(Parser)]
#[command(name = "elden-ring-checklist")]
#[command(about = "Elden Ring achievement checklist generator")]
struct Cli {
    /// Optional CONL settings file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build achievements.json, checking wiki links
    Data {
        /// Output JSON file
        #[arg(short, long, default_value = DATA_FILE)]
        output: PathBuf,
        /// Skip link checks; only manual override links are kept
        #[arg(long)]
        offline: bool,
    },
    /// Render the checklist page from achievements.json
    Render {
        /// Input JSON file
        #[arg(short, long, default_value = DATA_FILE)]
        input: PathBuf,
        /// Page template
        #[arg(short, long, default_value = TEMPLATE_FILE)]
        template: PathBuf,
        /// Output HTML file
        #[arg(short, long, default_value = OUTPUT_FILE)]
        output: PathBuf,
    },
    /// Run data, then render, with default paths
    Build,
    /// Remove achievements.json and index.html
    Clean,
}

fn run_clean() -> Result<()> {
    for name in [DATA_FILE, OUTPUT_FILE] {
        let path = Path::new(name);
        if path.exists() {
            fs::remove_file(path).with_context(|| format!("Failed to remove {}", name))?;
            log::info!("Removed {}", name);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Data { output, offline } => {
            let settings = Settings::load(&cli.config)?;
            data::run_data(&output, &settings, offline)
        }
        Commands::Render {
            input,
            template,
            output,
        } => render::run_render(&input, &template, &output),
        Commands::Build => {
            let settings = Settings::load(&cli.config)?;
            data::run_data(Path::new(DATA_FILE), &settings, false)?;
            render::run_render(
                Path::new(DATA_FILE),
                Path::new(TEMPLATE_FILE),
                Path::new(OUTPUT_FILE),
            )
        }
        Commands::Clean => run_clean(),
    }
}
