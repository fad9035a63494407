//! Pre-flight checks before expensive operations.
//!
//! Validates that required tools are available before starting a batch
//! that would otherwise fail midway.

use crate::config::Settings;
use crate::error::{BliError, Result};
use std::process::Command;

/// Run pre-flight checks for a batch run.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(settings: &Settings) -> Result<()> {
    check_tool(&settings.mux.ffmpeg_path)?;
    check_tool(&settings.dispatch.command)?;
    Ok(())
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    // ffmpeg uses -version (single dash), others use --version
    let version_arg = if name.contains("ffmpeg") {
        "-version"
    } else {
        "--version"
    };
    match Command::new(name).arg(version_arg).output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(BliError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(BliError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(BliError::ToolNotFound(format!("{}: {}", name, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_fails() {
        assert!(check_tool("bli-no-such-tool").is_err());
    }
}
