//! Bli - Personalized Retention Videos
//!
//! A CLI tool for generating short personalized "retention message" videos
//! for employees.
//!
//! The name "Bli" comes from the Norwegian/Scandinavian word for "stay."
//!
//! # Overview
//!
//! Bli runs a single sequential batch:
//! - Generate one shared base video through a remote generative-video tool
//! - Generate one shared base audio message through a remote text-to-speech tool
//! - Mux the two into one personalized file per employee with ffmpeg
//! - Report a summary of the produced files
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `employee` - Employee roster model
//! - `dispatch` - Remote tool invocation and response parsing
//! - `generation` - Video and audio generation flows
//! - `mux` - Media combination via ffmpeg
//! - `orchestrator` - Batch coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use bli::config::Settings;
//! use bli::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let summary = orchestrator.run_batch().await?;
//!     println!("Generated {} of {} videos", summary.outputs.len(), summary.total);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod employee;
pub mod error;
pub mod generation;
pub mod mux;
pub mod orchestrator;

pub use error::{BliError, Result};
