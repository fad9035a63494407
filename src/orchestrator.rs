//! Batch orchestrator for Bli.
//!
//! Coordinates the entire run: shared video, shared audio, then one
//! personalized mux per employee.

use crate::config::Settings;
use crate::dispatch::{CliDispatcher, ToolDispatcher};
use crate::error::Result;
use crate::generation::{AudioGenerator, VideoGenerator};
use crate::mux::MediaCombiner;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// The main orchestrator for the Bli batch.
pub struct Orchestrator {
    settings: Settings,
    dispatcher: Arc<dyn ToolDispatcher>,
    combiner: MediaCombiner,
    output_dir: PathBuf,
}

impl Orchestrator {
    /// Create a new orchestrator with the production dispatcher.
    pub fn new(settings: Settings) -> Result<Self> {
        let dispatcher = Arc::new(CliDispatcher::new(settings.dispatch.command.clone()));
        Self::with_components(settings, dispatcher)
    }

    /// Create an orchestrator with a custom dispatcher.
    pub fn with_components(settings: Settings, dispatcher: Arc<dyn ToolDispatcher>) -> Result<Self> {
        let output_dir = settings.output_dir();
        std::fs::create_dir_all(&output_dir)?;

        let combiner = MediaCombiner::new(settings.mux.ffmpeg_path.clone(), output_dir.clone());

        Ok(Self {
            settings,
            dispatcher,
            combiner,
            output_dir,
        })
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the whole batch: shared assets once, then one mux per employee.
    ///
    /// A failure generating either shared asset aborts the run; a failed
    /// mux for one employee is logged and the batch continues.
    pub async fn run_batch(&self) -> Result<BatchSummary> {
        let employees = self.settings.roster();

        info!("Generating base retention video...");
        let video_generator =
            VideoGenerator::new(self.dispatcher.clone(), self.settings.video.clone());
        let video_path = video_generator.generate(&self.output_dir).await?;

        info!("Generating base audio message...");
        let audio_generator =
            AudioGenerator::new(self.dispatcher.clone(), self.settings.audio.clone());
        let audio_path = audio_generator.generate(&self.output_dir).await?;

        info!("Creating personalized videos for employees...");
        let mut outputs = Vec::new();
        let mut failures = Vec::new();

        for employee in &employees {
            match self
                .combiner
                .combine(&video_path, &audio_path, employee)
                .await
            {
                Ok(path) => {
                    info!(
                        "Created retention video for {}: {}",
                        employee.name,
                        path.display()
                    );
                    outputs.push(path);
                }
                Err(e) => {
                    error!("Failed to create retention video for {}: {}", employee.name, e);
                    failures.push(employee.name.clone());
                }
            }
        }

        Ok(BatchSummary {
            total: employees.len(),
            outputs,
            failures,
        })
    }
}

/// Result of one batch run.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of employees processed.
    pub total: usize,
    /// Paths of successfully generated videos.
    pub outputs: Vec<PathBuf>,
    /// Names of employees whose mux failed.
    pub failures: Vec<String>,
}
