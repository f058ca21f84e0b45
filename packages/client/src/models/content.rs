use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::shared::validate_title;

/// A markdown content page attached to a course.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Position within the course outline (0-based).
    pub position: i32,
}

/// Request body for adding a content page.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContentPage {
    pub title: String,
    pub body: String,
}

impl NewContentPage {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if self.body.trim().is_empty() {
            return Err(ClientError::Validation(
                "Content body must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// PATCH body for updating a content page.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl UpdateContentPage {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(body) = &self.body
            && body.trim().is_empty()
        {
            return Err(ClientError::Validation(
                "Content body must not be empty".into(),
            ));
        }
        Ok(())
    }
}
