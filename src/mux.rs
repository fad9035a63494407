//! Media combination via ffmpeg.
//!
//! Merges the shared base video and audio into one personalized output
//! file per employee.

use crate::employee::Employee;
use crate::error::{BliError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

/// Combines one video stream and one audio stream with ffmpeg.
pub struct MediaCombiner {
    /// ffmpeg executable. Plain name resolves through PATH.
    ffmpeg_path: String,
    output_dir: PathBuf,
}

impl MediaCombiner {
    pub fn new(ffmpeg_path: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Mux one personalized video for an employee and return its path.
    ///
    /// The video stream is copied unchanged, the audio stream is re-encoded
    /// to AAC, and the output is truncated to the shorter input.
    pub async fn combine(
        &self,
        video: &Path,
        audio: &Path,
        employee: &Employee,
    ) -> Result<PathBuf> {
        let output_path = self.output_dir.join(employee.output_filename());

        info!("Combining media for {}", employee.name);

        let result = Command::new(&self.ffmpeg_path)
            .arg("-i").arg(video)
            .arg("-i").arg(audio)
            .arg("-c:v").arg("copy")
            .arg("-c:a").arg("aac")
            .arg("-shortest")
            .arg("-y")
            .arg("-loglevel").arg("error")
            .arg(&output_path)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        match result {
            Ok(out) if out.status.success() => Ok(output_path),
            Ok(out) => {
                let err = String::from_utf8_lossy(&out.stderr);
                Err(BliError::Mux(format!(
                    "ffmpeg failed for {}: {}",
                    employee.name,
                    err.trim()
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BliError::ToolNotFound(self.ffmpeg_path.clone()))
            }
            Err(e) => Err(BliError::Mux(format!("ffmpeg error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee::new("Research Scientist", "NLP Team")
    }

    #[tokio::test]
    async fn test_combine_returns_sanitized_output_path() {
        let dir = tempfile::tempdir().unwrap();
        // `true` ignores its arguments and exits 0
        let combiner = MediaCombiner::new("true", dir.path());

        let path = combiner
            .combine(Path::new("v.mp4"), Path::new("a.mp3"), &employee())
            .await
            .unwrap();

        assert_eq!(
            path,
            dir.path().join("retention_message_Research_Scientist.mp4")
        );
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_mux_error() {
        let dir = tempfile::tempdir().unwrap();
        let combiner = MediaCombiner::new("false", dir.path());

        let result = combiner
            .combine(Path::new("v.mp4"), Path::new("a.mp3"), &employee())
            .await;

        assert!(matches!(result, Err(BliError::Mux(_))));
    }

    #[tokio::test]
    async fn test_missing_ffmpeg_is_tool_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let combiner = MediaCombiner::new("bli-no-such-ffmpeg", dir.path());

        let result = combiner
            .combine(Path::new("v.mp4"), Path::new("a.mp3"), &employee())
            .await;

        assert!(matches!(result, Err(BliError::ToolNotFound(_))));
    }
}
