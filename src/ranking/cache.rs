//! Durable cache for ranking results
//!
//! One JSON document per category per job fingerprint. Entries persist
//! until explicitly invalidated; there is no TTL or eviction.

use crate::error::{Result, ResumeTailorError};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Content category a cached result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bullets,
    Skills,
    Projects,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bullets => "bullets",
            Category::Skills => "skills",
            Category::Projects => "projects",
        }
    }
}

/// Deterministic fingerprint of a ranking run.
///
/// Covers the job identity (company, title), the candidate-pool size,
/// and the embedding model. Pool *content* is deliberately not part of
/// the key: two pools of equal size for the same job and model resolve
/// to the same entry.
#[derive(Debug, Clone)]
pub struct CacheKey {
    pub category: Category,
    pub company: String,
    pub title: String,
    pub pool_size: usize,
    pub model: String,
}

impl CacheKey {
    pub fn new(
        category: Category,
        company: &str,
        title: &str,
        pool_size: usize,
        model: &str,
    ) -> Self {
        Self {
            category,
            company: company.to_string(),
            title: title.to_string(),
            pool_size,
            model: model.to_string(),
        }
    }

    /// File stem of the form
    /// `bullets_acmeInc_experimentalPhysicist_poolcount2_model-...`.
    pub fn file_stem(&self) -> String {
        // Model IDs may contain path separators (HF repo IDs)
        let model = self.model.replace(['/', '\\'], "-");
        format!(
            "{}_{}_{}_poolcount{}_model-{}",
            self.category.as_str(),
            prepare_text_for_filename(&self.company),
            prepare_text_for_filename(&self.title),
            self.pool_size,
            model
        )
    }
}

/// Lower-case, strip punctuation, and camel-case text for use in a
/// file name.
pub fn prepare_text_for_filename(text: &str) -> String {
    let punct_regex = Regex::new(r"[[:punct:]]").expect("Invalid punctuation regex");
    let cleaned = punct_regex.replace_all(text, "");
    let lowered = cleaned.to_lowercase();

    let mut words = lowered.split_whitespace();
    let mut camelcased = String::new();

    if let Some(first) = words.next() {
        camelcased.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            camelcased.extend(c.to_uppercase());
            camelcased.push_str(chars.as_str());
        }
    }

    camelcased
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope<T> {
    created_at: DateTime<Utc>,
    model: String,
    result: T,
}

/// File-backed store of ranking results.
pub struct ResultCache {
    cache_dir: PathBuf,
    enabled: bool,
}

impl ResultCache {
    pub fn new(cache_dir: &Path, enabled: bool) -> Result<Self> {
        if enabled {
            std::fs::create_dir_all(cache_dir)?;
        }
        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
            enabled,
        })
    }

    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key.file_stem()))
    }

    /// Retrieve a stored result. A corrupt entry is treated as a miss
    /// and left to be overwritten by the recompute.
    pub fn load<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        if !self.enabled {
            return None;
        }

        let path = self.entry_path(key);
        if !path.is_file() {
            debug!("Cache miss: {}", path.display());
            return None;
        }

        match self.read_entry(&path) {
            Ok(result) => {
                info!("Found cached ranking results: {}", path.display());
                Some(result)
            }
            Err(e) => {
                warn!("{}, recomputing", e);
                None
            }
        }
    }

    fn read_entry<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path)?;
        let envelope: CacheEnvelope<T> = serde_json::from_str(&content).map_err(|e| {
            ResumeTailorError::CacheCorrupt(format!("{}: {}", path.display(), e))
        })?;
        Ok(envelope.result)
    }

    /// Store a result for future runs.
    pub fn store<T: Serialize>(&self, key: &CacheKey, result: &T) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let envelope = CacheEnvelope {
            created_at: Utc::now(),
            model: key.model.clone(),
            result,
        };

        let path = self.entry_path(key);
        let content = serde_json::to_string_pretty(&envelope)?;
        std::fs::write(&path, content)?;
        info!("Saved ranking results to {}", path.display());
        Ok(())
    }

    /// Delete any stored entry for the key, guaranteeing the next run
    /// recomputes.
    pub fn invalidate(&self, key: &CacheKey) -> Result<()> {
        let path = self.entry_path(key);
        if path.is_file() {
            std::fs::remove_file(&path)?;
            info!("Invalidated cache entry {}", path.display());
        }
        Ok(())
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
