use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::shared::validate_title;

/// Difficulty label shown in assignment lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coding assignment within a course.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    /// Problem statement, markdown.
    #[serde(default)]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    /// Judge language ids accepted for this assignment. Empty means all.
    #[serde(default)]
    pub allowed_language_ids: Vec<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Whether the given judge language id may be submitted here.
    pub fn accepts_language(&self, language_id: i32) -> bool {
        self.allowed_language_ids.is_empty()
            || self.allowed_language_ids.contains(&language_id)
    }
}

/// Request body for creating an assignment (lecturers).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_language_ids: Vec<i32>,
}

impl NewAssignment {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// PATCH body for updating an assignment.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl UpdateAssignment {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}
