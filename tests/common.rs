//! Shared test helpers

#![allow(dead_code)]

use resume_tailor::error::Result;
use resume_tailor::input::masterlist::{Bullet, Project, Skill};
use resume_tailor::ranking::embedder::Embedder;
use std::collections::HashMap;

/// Deterministic embedder returning fixed vectors per text, for testing
/// the ranking engine without a model.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    pub calls: usize,
}

impl StubEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            vectors: HashMap::new(),
            fallback: vec![0.0; dim],
            calls: 0,
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl Embedder for StubEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>> {
        self.calls += 1;
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn model_id(&self) -> &str {
        "stub-model"
    }
}

pub fn bullet(id: u32, description: &str) -> Bullet {
    Bullet {
        id,
        description: description.to_string(),
        skills: Vec::new(),
        subskills: Vec::new(),
    }
}

pub fn skill(id: u32, name: &str) -> Skill {
    Skill {
        id,
        skill: name.to_string(),
        subskills: Vec::new(),
    }
}

pub fn project(id: u32, title: &str, description: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        link: String::new(),
        description: description.to_string(),
        skills_used: Vec::new(),
        sub_skills_used: Vec::new(),
    }
}
