//! Ranking-and-selection engine
//!
//! Scores candidate resume content against a job description with
//! embedding cosine similarity, selects a bounded subset per category
//! under quota rules, and caches results per job fingerprint.

pub mod cache;
pub mod embedder;
pub mod engine;
pub mod ranker;
pub mod selector;
pub mod similarity;
