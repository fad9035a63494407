//! Run command - the retention-video batch.

use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the batch: shared assets once, one personalized video per employee.
pub async fn run_batch(output_dir: Option<String>, mut settings: Settings) -> Result<()> {
    if let Some(dir) = output_dir {
        settings.general.output_dir = dir;
    }

    // Pre-flight checks
    if let Err(e) = preflight::check(&settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'bli doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let employees = settings.roster();
    Output::info(&format!(
        "Generating retention videos for {} employees in {}",
        employees.len(),
        settings.output_dir().display()
    ));

    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Generating shared video and audio, then muxing...");
    let result = orchestrator.run_batch().await;
    spinner.finish_and_clear();

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            Output::error(&format!("Batch failed: {}", e));
            return Err(e.into());
        }
    };

    println!();
    Output::header("Generation Summary");
    Output::kv("Total employees processed", &summary.total.to_string());
    Output::kv(
        "Successfully generated videos",
        &summary.outputs.len().to_string(),
    );

    if !summary.outputs.is_empty() {
        println!();
        Output::info("Generated video files:");
        for file in &summary.outputs {
            Output::list_item(&file.display().to_string());
        }
    }

    if !summary.failures.is_empty() {
        println!();
        Output::warning(&format!(
            "No video produced for: {}",
            summary.failures.join(", ")
        ));
    }

    Ok(())
}
