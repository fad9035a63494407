//! Configuration settings for Bli.

use crate::employee::Employee;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub dispatch: DispatchSettings,
    pub video: VideoSettings,
    pub audio: AudioSettings,
    pub mux: MuxSettings,
    /// Employees to generate personalized videos for.
    pub employees: Vec<Employee>,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory where all generated media is written.
    pub output_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            output_dir: "retention_videos".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Settings for the remote tool dispatch command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Command used to dispatch remote tool calls.
    pub command: String,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            command: "aws".to_string(),
        }
    }
}

/// Video generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Remote tool that starts an asynchronous video generation job.
    pub generate_tool: String,
    /// Remote tool that reports the status of a generation job.
    pub status_tool: String,
    /// Generation model identifier.
    pub model: String,
    /// Scene prompt for the base video.
    pub prompt: String,
    /// Clip duration in seconds.
    pub duration_seconds: u32,
    /// Output resolution.
    pub resolution: String,
    /// Maximum number of status polls before giving up.
    pub max_poll_attempts: u32,
    /// Seconds to wait between status polls.
    pub poll_interval_seconds: u64,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            generate_tool: "mini_max___generate_video".to_string(),
            status_tool: "mini_max___query_video_generation".to_string(),
            model: "MiniMax-Hailuo-02".to_string(),
            prompt: "\
                A young woman in a modern, well-lit office space singing emotionally. \
                She's wearing professional attire and is surrounded by colorful balloons. \
                As she sings 'Please Don't Go' with genuine emotion, she gracefully throws \
                balloons into the air. The balloons float down around her creating a \
                visually striking scene. Her expression conveys both sincerity and warmth."
                .to_string(),
            duration_seconds: 6,
            resolution: "1080P".to_string(),
            max_poll_attempts: 30,
            poll_interval_seconds: 10,
        }
    }
}

/// Audio message settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Remote text-to-speech tool.
    pub tool: String,
    /// Message text spoken in the base audio.
    pub message: String,
    /// Voice identifier.
    pub voice_id: String,
    /// Emotional tone.
    pub emotion: String,
    /// Speech speed multiplier.
    pub speed: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            tool: "mini_max___text_to_audio".to_string(),
            message: "\
                You're an invaluable part of our team. \
                Your expertise has helped us achieve amazing things. \
                We see your potential and have exciting opportunities ahead. \
                Please don't go - let's build the future together."
                .to_string(),
            voice_id: "female-shaonv".to_string(),
            emotion: "sad".to_string(),
            speed: 0.8,
        }
    }
}

/// Media combination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MuxSettings {
    /// ffmpeg executable. Plain name resolves through PATH.
    pub ffmpeg_path: String,
}

impl Default for MuxSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::BliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bli")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded output directory path.
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.output_dir)
    }

    /// Employees to process, falling back to the built-in roster when the
    /// configuration names none.
    pub fn roster(&self) -> Vec<Employee> {
        if self.employees.is_empty() {
            Employee::default_roster()
        } else {
            self.employees.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let settings = Settings::default();

        assert_eq!(settings.general.output_dir, "retention_videos");
        assert_eq!(settings.dispatch.command, "aws");
        assert_eq!(settings.video.generate_tool, "mini_max___generate_video");
        assert_eq!(settings.video.status_tool, "mini_max___query_video_generation");
        assert_eq!(settings.video.model, "MiniMax-Hailuo-02");
        assert_eq!(settings.video.duration_seconds, 6);
        assert_eq!(settings.video.resolution, "1080P");
        assert_eq!(settings.video.max_poll_attempts, 30);
        assert_eq!(settings.video.poll_interval_seconds, 10);
        assert_eq!(settings.audio.tool, "mini_max___text_to_audio");
        assert_eq!(settings.audio.voice_id, "female-shaonv");
        assert_eq!(settings.audio.emotion, "sad");
        assert_eq!(settings.audio.speed, 0.8);
        assert_eq!(settings.mux.ffmpeg_path, "ffmpeg");
    }

    #[test]
    fn test_empty_roster_falls_back_to_builtin() {
        let settings = Settings::default();
        let roster = settings.roster();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].name, "Technical Lead");
    }

    #[test]
    fn test_roster_from_config_wins() {
        let toml_str = r#"
            [[employees]]
            name = "Staff Engineer"
            position = "Platform Team"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        let roster = settings.roster();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Staff Engineer");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: Settings = toml::from_str("[general]\nlog_level = \"debug\"").unwrap();

        assert_eq!(settings.general.log_level, "debug");
        assert_eq!(settings.general.output_dir, "retention_videos");
        assert_eq!(settings.video.max_poll_attempts, 30);
    }
}
