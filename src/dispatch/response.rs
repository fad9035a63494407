//! Free-text response parsing.
//!
//! The upstream tools report status and task identifiers inside prose
//! rather than structured fields, so detection is substring matching over
//! the stringified response.

use serde_json::Value;

/// Marker preceding the task identifier in a generation response.
pub const TASK_ID_MARKER: &str = "Task ID:";

/// Marker present while a video generation task is still running.
pub const STILL_PROCESSING_MARKER: &str = "Video generation task is still processing";

/// Extract a task identifier from a generation response.
///
/// Searches the stringified response for the last `Task ID:` marker and
/// returns the text after it up to the first `.`, trimmed. Returns `None`
/// when the marker is absent or there is no response.
pub fn extract_task_id(response: Option<&Value>) -> Option<String> {
    let text = response?.to_string();
    let idx = text.rfind(TASK_ID_MARKER)?;
    let tail = text[idx + TASK_ID_MARKER.len()..].trim();
    let id = tail.split('.').next().unwrap_or_default().trim();

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Whether a status response still carries the processing marker.
pub fn is_still_processing(response: &Value) -> bool {
    response.to_string().contains(STILL_PROCESSING_MARKER)
}
