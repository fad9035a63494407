//! Video generation flow.
//!
//! Submits an asynchronous generation request, then polls the status tool
//! at a fixed interval until the task stops processing or the attempt
//! ceiling is exhausted.

use super::SHARED_VIDEO_FILE;
use crate::config::VideoSettings;
use crate::dispatch::{extract_task_id, is_still_processing, ToolDispatcher};
use crate::error::{BliError, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Generates the shared base video through the remote video tool.
pub struct VideoGenerator {
    dispatcher: Arc<dyn ToolDispatcher>,
    settings: VideoSettings,
}

impl VideoGenerator {
    pub fn new(dispatcher: Arc<dyn ToolDispatcher>, settings: VideoSettings) -> Self {
        Self {
            dispatcher,
            settings,
        }
    }

    /// Generate the base video and return its path.
    pub async fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        let response = self
            .dispatcher
            .call(
                &self.settings.generate_tool,
                json!({
                    "model": self.settings.model,
                    "prompt": self.settings.prompt,
                    "duration": self.settings.duration_seconds,
                    "resolution": self.settings.resolution,
                    "output_directory": output_dir.to_string_lossy(),
                    "async_mode": true,
                }),
            )
            .await?;

        let task_id = extract_task_id(response.as_ref()).ok_or(BliError::TaskIdMissing)?;
        info!("Video generation started with task ID: {}", task_id);

        self.wait_for_video(&task_id, output_dir).await
    }

    /// Poll until the generation task finishes or the attempt ceiling hits.
    ///
    /// A dispatch error during a poll consumes the attempt and the loop
    /// carries on. A response without the processing marker means the task
    /// finished; the expected output file must exist at that point.
    async fn wait_for_video(&self, task_id: &str, output_dir: &Path) -> Result<PathBuf> {
        let max_attempts = self.settings.max_poll_attempts;
        let interval = Duration::from_secs(self.settings.poll_interval_seconds);

        for attempt in 1..=max_attempts {
            info!("Checking video status (attempt {}/{})", attempt, max_attempts);

            let status = self
                .dispatcher
                .call(
                    &self.settings.status_tool,
                    json!({
                        "task_id": task_id,
                        "output_directory": output_dir.to_string_lossy(),
                    }),
                )
                .await;

            match status {
                Err(e) => warn!("Error checking video status: {}", e),
                Ok(response) => {
                    if !response.as_ref().is_some_and(is_still_processing) {
                        let video_path = output_dir.join(SHARED_VIDEO_FILE);
                        if video_path.exists() {
                            info!("Video generation completed successfully");
                            return Ok(video_path);
                        }
                        error!("Video file not found after generation");
                        return Err(BliError::OutputMissing(
                            video_path.to_string_lossy().into_owned(),
                        ));
                    }
                }
            }

            info!(
                "Video still processing, waiting {} seconds...",
                self.settings.poll_interval_seconds
            );
            tokio::time::sleep(interval).await;
        }

        error!("Video generation timed out");
        Err(BliError::GenerationTimeout(max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicU32, Ordering};

    enum StatusMode {
        AlwaysProcessing,
        ErrorThenProcessing,
        DoneImmediately,
    }

    struct MockDispatcher {
        submit_response: Value,
        mode: StatusMode,
        status_calls: AtomicU32,
    }

    impl MockDispatcher {
        fn new(submit_response: Value, mode: StatusMode) -> Self {
            Self {
                submit_response,
                mode,
                status_calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl ToolDispatcher for MockDispatcher {
        async fn call(&self, tool: &str, _params: Value) -> Result<Option<Value>> {
            if tool != "mini_max___query_video_generation" {
                return Ok(Some(self.submit_response.clone()));
            }

            let call = self.status_calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                StatusMode::AlwaysProcessing => {
                    Ok(Some(json!("Video generation task is still processing")))
                }
                StatusMode::ErrorThenProcessing => {
                    if call == 0 {
                        Err(BliError::Dispatch("transient".to_string()))
                    } else {
                        Ok(Some(json!("Video generation task is still processing")))
                    }
                }
                StatusMode::DoneImmediately => Ok(Some(json!("Video generation completed"))),
            }
        }
    }

    fn fast_settings(max_poll_attempts: u32) -> VideoSettings {
        VideoSettings {
            max_poll_attempts,
            poll_interval_seconds: 0,
            ..VideoSettings::default()
        }
    }

    fn submitted() -> Value {
        json!("Video generation started. Task ID: task42. Processing")
    }

    #[tokio::test]
    async fn test_polling_stops_at_attempt_ceiling() {
        let dispatcher = Arc::new(MockDispatcher::new(
            submitted(),
            StatusMode::AlwaysProcessing,
        ));
        let generator = VideoGenerator::new(dispatcher.clone(), fast_settings(3));
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::GenerationTimeout(3))));
        assert_eq!(dispatcher.status_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_dispatch_error_consumes_attempt() {
        let dispatcher = Arc::new(MockDispatcher::new(
            submitted(),
            StatusMode::ErrorThenProcessing,
        ));
        let generator = VideoGenerator::new(dispatcher.clone(), fast_settings(2));
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::GenerationTimeout(2))));
        assert_eq!(dispatcher.status_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_completed_when_file_exists() {
        let dispatcher = Arc::new(MockDispatcher::new(
            submitted(),
            StatusMode::DoneImmediately,
        ));
        let generator = VideoGenerator::new(dispatcher, fast_settings(3));
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SHARED_VIDEO_FILE), b"mp4").unwrap();

        let path = generator.generate(dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join(SHARED_VIDEO_FILE));
    }

    #[tokio::test]
    async fn test_missing_file_after_completion_is_failure() {
        let dispatcher = Arc::new(MockDispatcher::new(
            submitted(),
            StatusMode::DoneImmediately,
        ));
        let generator = VideoGenerator::new(dispatcher, fast_settings(3));
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::OutputMissing(_))));
    }

    #[tokio::test]
    async fn test_missing_task_id_fails_before_polling() {
        let dispatcher = Arc::new(MockDispatcher::new(
            json!("request accepted"),
            StatusMode::DoneImmediately,
        ));
        let generator = VideoGenerator::new(dispatcher.clone(), fast_settings(3));
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::TaskIdMissing)));
        assert_eq!(dispatcher.status_calls.load(Ordering::SeqCst), 0);
    }
}
