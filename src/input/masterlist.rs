//! Master list loading and data model
//!
//! The master list is the full record of a candidate's career history.
//! Field names follow the masterlist.json schema, so an existing file
//! loads without conversion.

use crate::error::{Result, ResumeTailorError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterList {
    pub about: About,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub subskills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub minor: String,
    #[serde(rename = "start-date", default)]
    pub start_date: String,
    #[serde(rename = "end-date", default)]
    pub end_date: String,
    #[serde(default)]
    pub thesis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub jobtitle: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    /// Accomplishment bullets. Stored under "projects" in masterlist.json.
    #[serde(rename = "projects", default)]
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<u32>,
    #[serde(default)]
    pub subskills: Vec<u32>,
}

/// Top-level skill or subskill. Subskills carry no children of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub skill: String,
    #[serde(default)]
    pub subskills: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "skillsUsed", default)]
    pub skills_used: Vec<u32>,
    #[serde(rename = "subSkillsUsed", default)]
    pub sub_skills_used: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub award: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl MasterList {
    /// Load a master list from a JSON file
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeTailorError::InvalidInput(
                format!("Master list does not exist: {}", path.display())
            ));
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            return Err(ResumeTailorError::UnsupportedFormat(
                format!("Master list must be a .json file: {}", path.display())
            ));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let master: MasterList = serde_json::from_str(&content)
            .map_err(|e| ResumeTailorError::MasterList(format!("Failed to parse master list: {}", e)))?;

        Ok(master)
    }

    /// Top-level skills and subskills concatenated, the pool the skills
    /// ranking runs over
    pub fn all_skills(&self) -> Vec<Skill> {
        let mut all = self.skills.clone();
        all.extend(self.subskills.iter().cloned());
        all
    }
}
