//! Resume renderers for the tailored content

pub mod html;
pub mod markdown;

use crate::error::Result;
use crate::input::job::JobPosting;
use crate::input::masterlist::MasterList;
use crate::ranking::engine::TailoredContent;
use serde_json::json;

/// Structured dump of the tailored resume for downstream tooling
pub fn render_json(
    master: &MasterList,
    job: &JobPosting,
    content: &TailoredContent,
) -> Result<String> {
    let value = json!({
        "about": master.about,
        "job": {
            "title": job.title,
            "company": job.company,
        },
        "experiences": content.groups,
        "skills": content.skills,
        "projects": content.projects,
    });

    Ok(serde_json::to_string_pretty(&value)?)
}

/// Host portion of a URL, for display text
pub(crate) fn display_host(url: &str) -> &str {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    without_scheme
        .split_once('/')
        .map(|(host, _)| host)
        .unwrap_or(without_scheme)
}
