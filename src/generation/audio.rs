//! Audio generation flow.

use super::SHARED_AUDIO_FILE;
use crate::config::AudioSettings;
use crate::dispatch::ToolDispatcher;
use crate::error::{BliError, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// Generates the shared base audio message through the remote
/// text-to-speech tool.
pub struct AudioGenerator {
    dispatcher: Arc<dyn ToolDispatcher>,
    settings: AudioSettings,
}

impl AudioGenerator {
    pub fn new(dispatcher: Arc<dyn ToolDispatcher>, settings: AudioSettings) -> Self {
        Self {
            dispatcher,
            settings,
        }
    }

    /// Generate the base audio message and return its path.
    ///
    /// The text-to-speech tool is synchronous; success is the presence of
    /// the output file afterwards, whatever the response says.
    pub async fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        self.dispatcher
            .call(
                &self.settings.tool,
                json!({
                    "text": self.settings.message,
                    "voice_id": self.settings.voice_id,
                    "emotion": self.settings.emotion,
                    "speed": self.settings.speed,
                    "output_directory": output_dir.to_string_lossy(),
                }),
            )
            .await?;

        let audio_path = output_dir.join(SHARED_AUDIO_FILE);
        if audio_path.exists() {
            info!("Audio message generated successfully");
            Ok(audio_path)
        } else {
            error!("Audio file not found after generation");
            Err(BliError::OutputMissing(
                audio_path.to_string_lossy().into_owned(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    struct StaticDispatcher {
        response: Result<Option<Value>>,
    }

    #[async_trait]
    impl ToolDispatcher for StaticDispatcher {
        async fn call(&self, _tool: &str, _params: Value) -> Result<Option<Value>> {
            match &self.response {
                Ok(v) => Ok(v.clone()),
                Err(_) => Err(BliError::Dispatch("boom".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_returns_path_when_file_exists() {
        let dispatcher = Arc::new(StaticDispatcher {
            response: Ok(Some(json!("audio written"))),
        });
        let generator = AudioGenerator::new(dispatcher, AudioSettings::default());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SHARED_AUDIO_FILE), b"mp3").unwrap();

        let path = generator.generate(dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join(SHARED_AUDIO_FILE));
    }

    #[tokio::test]
    async fn test_missing_file_is_failure() {
        let dispatcher = Arc::new(StaticDispatcher {
            response: Ok(Some(json!("audio written"))),
        });
        let generator = AudioGenerator::new(dispatcher, AudioSettings::default());
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::OutputMissing(_))));
    }

    #[tokio::test]
    async fn test_dispatch_error_propagates() {
        let dispatcher = Arc::new(StaticDispatcher {
            response: Err(BliError::Dispatch("boom".to_string())),
        });
        let generator = AudioGenerator::new(dispatcher, AudioSettings::default());
        let dir = tempfile::tempdir().unwrap();

        let result = generator.generate(dir.path()).await;

        assert!(matches!(result, Err(BliError::Dispatch(_))));
    }
}
