//! Quota selection over ranked content

use crate::error::Result;
use crate::input::masterlist::Bullet;
use crate::ranking::embedder::Embedder;
use crate::ranking::ranker::{rank_against, ScoreableItem};
use log::debug;
use serde::{Deserialize, Serialize};

/// Tag distinguishing work experience from project experience.
/// Serialized as the numeric tags used in stored results (1 = work,
/// 2 = project).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ExperienceKind {
    Work,
    Project,
}

impl From<ExperienceKind> for u8 {
    fn from(kind: ExperienceKind) -> u8 {
        match kind {
            ExperienceKind::Work => 1,
            ExperienceKind::Project => 2,
        }
    }
}

impl TryFrom<u8> for ExperienceKind {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(ExperienceKind::Work),
            2 => Ok(ExperienceKind::Project),
            other => Err(format!("unknown experience type tag: {}", other)),
        }
    }
}

/// One experience's bullets, as fed into the ranking pass. Group
/// membership is fixed input; ranking reorders bullets within a group
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletGroup {
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub title: String,
    pub bullets: Vec<Bullet>,
}

/// One experience's selected bullets with their scores, aligned by
/// index and descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGroup {
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub title: String,
    pub bullets: Vec<Bullet>,
    pub scores: Vec<f32>,
}

/// Keep the `count` most relevant items from a flat pool.
///
/// If the whole pool fits within `count` it is returned as-is, in input
/// order, without any ranking work.
pub fn select_top<T, E>(
    embedder: &mut E,
    query_embedding: &[f32],
    items: Vec<T>,
    count: usize,
) -> Result<Vec<T>>
where
    T: ScoreableItem,
    E: Embedder + ?Sized,
{
    if items.len() <= count {
        debug!(
            "Pool of {} fits within quota of {}, skipping ranking",
            items.len(),
            count
        );
        return Ok(items);
    }

    let ranked = rank_against(embedder, query_embedding, items)?;
    Ok(ranked.into_iter().take(count).map(|r| r.item).collect())
}

/// Rank each experience group's bullets against the job description and
/// keep the `min_points` best per group.
///
/// A group never contributes more bullets than it holds, and bullets
/// never move between groups. A `min_points` of 0 removes experiences
/// from the output entirely instead of truncating them to zero bullets.
pub fn select_bullets<E>(
    embedder: &mut E,
    query_embedding: &[f32],
    groups: Vec<BulletGroup>,
    min_points: usize,
) -> Result<Vec<RankedGroup>>
where
    E: Embedder + ?Sized,
{
    let mut selected = Vec::with_capacity(groups.len());

    for group in groups {
        if min_points == 0 {
            debug!("Dropping experience '{}' (bullet quota is 0)", group.title);
            continue;
        }

        let limit = group.bullets.len().min(min_points);
        let ranked = rank_against(embedder, query_embedding, group.bullets)?;

        let mut bullets = Vec::with_capacity(limit);
        let mut scores = Vec::with_capacity(limit);
        for ranked_item in ranked.into_iter().take(limit) {
            scores.push(ranked_item.score);
            bullets.push(ranked_item.item);
        }

        selected.push(RankedGroup {
            kind: group.kind,
            title: group.title,
            bullets,
            scores,
        });
    }

    Ok(selected)
}
