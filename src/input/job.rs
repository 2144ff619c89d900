//! Job posting descriptor and loading

use crate::error::{Result, ResumeTailorError};
use std::path::Path;

/// The job being applied to
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, company: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
        }
    }

    /// Build a posting with the description read from a text or markdown file
    pub async fn from_file(title: &str, company: &str, description_path: &Path) -> Result<Self> {
        if !description_path.exists() {
            return Err(ResumeTailorError::InvalidInput(
                format!("Job description does not exist: {}", description_path.display())
            ));
        }

        let description = tokio::fs::read_to_string(description_path).await?;
        Ok(Self::new(title, company, description))
    }

    /// The text embedded as the ranking query, shared by every category
    pub fn query_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
