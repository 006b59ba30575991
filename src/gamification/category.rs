//! Kinds of learning task a completion can come from

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Tasks generated from a submitted concept
    #[default]
    Concept,
    /// Tasks generated from a pasted transcript
    Transcript,
    Quiz,
    CodePractice,
    Interview,
    Chat,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Transcript => "transcript",
            Self::Quiz => "quiz",
            Self::CodePractice => "code_practice",
            Self::Interview => "interview",
            Self::Chat => "chat",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "concept" => Some(Self::Concept),
            "transcript" => Some(Self::Transcript),
            "quiz" => Some(Self::Quiz),
            "code_practice" | "code" | "practice" => Some(Self::CodePractice),
            "interview" => Some(Self::Interview),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }

    /// Parse a category name, falling back to the default category.
    ///
    /// A completion is never rejected over its category label.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(category = s, "Unknown task category, using default");
            Self::default()
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Concept => "Concept",
            Self::Transcript => "Transcript",
            Self::Quiz => "Quiz",
            Self::CodePractice => "Code Practice",
            Self::Interview => "Interview",
            Self::Chat => "Chat",
        }
    }

    pub fn all() -> &'static [TaskCategory] {
        &[
            Self::Concept,
            Self::Transcript,
            Self::Quiz,
            Self::CodePractice,
            Self::Interview,
            Self::Chat,
        ]
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for category in TaskCategory::all() {
            assert_eq!(TaskCategory::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(TaskCategory::parse("Code-Practice"), Some(TaskCategory::CodePractice));
        assert_eq!(TaskCategory::parse(" QUIZ "), Some(TaskCategory::Quiz));
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(TaskCategory::parse("flashcards"), None);
        assert_eq!(TaskCategory::parse_or_default("flashcards"), TaskCategory::Concept);
    }
}
