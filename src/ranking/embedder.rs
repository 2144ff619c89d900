//! Embedding generation using Model2Vec

use crate::error::{Result, ResumeTailorError};
use log::{debug, info};
use model2vec_rs::model::StaticModel;
use std::collections::HashMap;
use std::time::Instant;

/// Text-embedding capability.
///
/// Injected into the ranking engine so tests can substitute a stub
/// returning fixed vectors. Implementations must be deterministic for
/// identical input and model.
pub trait Embedder {
    /// Encode text into a fixed-length vector.
    fn embed(&mut self, text: &str) -> Result<Vec<f32>>;

    /// Identifier of the backing model, used in cache fingerprints.
    fn model_id(&self) -> &str;
}

/// Production embedder backed by a Model2Vec static model.
///
/// The model is loaded on first use and held for the lifetime of the
/// instance. Per-text results are memoized so no string is encoded twice
/// within one tailoring run.
pub struct Model2VecEmbedder {
    model_id: String,
    model: Option<StaticModel>,
    memo: HashMap<String, Vec<f32>>,
}

impl Model2VecEmbedder {
    /// Create an embedder for a HuggingFace repo ID or local model folder.
    /// The model itself is not loaded until the first `embed` call.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            model: None,
            memo: HashMap::new(),
        }
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.model.is_some() {
            return Ok(());
        }

        info!("Loading embedding model: {}", self.model_id);
        let start_time = Instant::now();

        let model = StaticModel::from_pretrained(
            &self.model_id,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| {
            ResumeTailorError::ModelUnavailable(format!(
                "Failed to load model {}: {}",
                self.model_id, e
            ))
        })?;

        info!("Model loaded in {:.2?}", start_time.elapsed());
        self.model = Some(model);
        Ok(())
    }

    pub fn memo_size(&self) -> usize {
        self.memo.len()
    }
}

impl Embedder for Model2VecEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>> {
        if let Some(cached) = self.memo.get(text) {
            debug!("Embedding memo hit ({} chars)", text.len());
            return Ok(cached.clone());
        }

        self.ensure_loaded()?;
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ResumeTailorError::ModelUnavailable("model not loaded".to_string()))?;

        let embedding = model.encode_single(text);
        self.memo.insert(text.to_string(), embedding.clone());
        Ok(embedding)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
