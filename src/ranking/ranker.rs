//! Relevance ranking of scoreable content against a job description

use crate::error::Result;
use crate::input::masterlist::{Bullet, Project, Skill};
use crate::ranking::embedder::Embedder;
use crate::ranking::similarity::cosine_similarity;
use log::debug;
use std::borrow::Cow;

/// Content that can be ranked against a job description.
pub trait ScoreableItem {
    /// The text compared against the job description.
    fn comparison_text(&self) -> Cow<'_, str>;

    /// Stable identifier from the master list.
    fn item_id(&self) -> u32;
}

impl ScoreableItem for Bullet {
    fn comparison_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.description)
    }

    fn item_id(&self) -> u32 {
        self.id
    }
}

impl ScoreableItem for Skill {
    fn comparison_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.skill)
    }

    fn item_id(&self) -> u32 {
        self.id
    }
}

impl ScoreableItem for Project {
    fn comparison_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} - {}", self.title, self.description))
    }

    fn item_id(&self) -> u32 {
        self.id
    }
}

/// An item paired with its relevance score.
#[derive(Debug, Clone)]
pub struct RankedItem<T> {
    pub score: f32,
    pub item: T,
}

/// Score every item against an already-embedded query and sort by
/// descending relevance.
///
/// The sort is stable on score alone: items with equal scores keep their
/// relative input order.
pub fn rank_against<T, E>(
    embedder: &mut E,
    query_embedding: &[f32],
    items: Vec<T>,
) -> Result<Vec<RankedItem<T>>>
where
    T: ScoreableItem,
    E: Embedder + ?Sized,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranked = Vec::with_capacity(items.len());
    for item in items {
        let embedding = embedder.embed(item.comparison_text().as_ref())?;
        let score = cosine_similarity(query_embedding, &embedding)?;
        ranked.push(RankedItem { score, item });
    }

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!("Ranked {} items", ranked.len());
    Ok(ranked)
}

/// Embed the query text, then rank items against it.
///
/// An empty pool returns immediately without any embedding calls.
pub fn rank<T, E>(embedder: &mut E, query: &str, items: Vec<T>) -> Result<Vec<RankedItem<T>>>
where
    T: ScoreableItem,
    E: Embedder + ?Sized,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let query_embedding = embedder.embed(query)?;
    rank_against(embedder, &query_embedding, items)
}
