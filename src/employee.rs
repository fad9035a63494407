//! Employee roster model.

use serde::{Deserialize, Serialize};

/// An employee receiving a personalized retention video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// Display name; also derives the output filename.
    pub name: String,
    /// Role description. Not used in generation.
    pub position: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }

    /// Filename for this employee's personalized video, with spaces in the
    /// name replaced by underscores.
    pub fn output_filename(&self) -> String {
        format!("retention_message_{}.mp4", self.name.replace(' ', "_"))
    }

    /// Built-in roster used when the configuration lists no employees.
    pub fn default_roster() -> Vec<Employee> {
        vec![
            Employee::new("Technical Lead", "AI/ML Division"),
            Employee::new("Research Scientist", "NLP Team"),
            Employee::new("ML Engineer", "Infrastructure Team"),
            Employee::new("AI Ethics", "Ethics Team"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename_replaces_spaces() {
        let employee = Employee::new("Research Scientist", "NLP Team");
        assert_eq!(
            employee.output_filename(),
            "retention_message_Research_Scientist.mp4"
        );
    }

    #[test]
    fn test_output_filename_single_word() {
        let employee = Employee::new("Lead", "Core");
        assert_eq!(employee.output_filename(), "retention_message_Lead.mp4");
    }

    #[test]
    fn test_default_roster() {
        let roster = Employee::default_roster();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[1].name, "Research Scientist");
        assert_eq!(roster[1].position, "NLP Team");
    }
}
