use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::shared::validate_title;

/// A video tutorial attached to a course.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Position within the course outline (0-based).
    pub position: i32,
}

/// Request body for adding a tutorial.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTutorial {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl NewTutorial {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

/// PATCH body for updating a tutorial.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<Option<String>>,
}

impl UpdateTutorial {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }
}
