//! CLI module for Bli.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Bli - Personalized Retention Videos
///
/// A CLI tool for generating short personalized retention-message videos
/// for employees. The name "Bli" comes from the Norwegian/Scandinavian
/// word for "stay."
#[derive(Parser, Debug)]
#[command(name = "bli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Bli and verify system requirements
    Init,

    /// Check system requirements and configuration
    Doctor,

    /// Generate the shared assets and one retention video per employee
    Run {
        /// Output directory (overrides the configured one)
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
