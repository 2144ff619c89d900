//! Tailoring engine coordinating ranking, selection, and caching

use crate::config::Config;
use crate::error::Result;
use crate::input::job::JobPosting;
use crate::input::masterlist::{MasterList, Project, Skill};
use crate::ranking::cache::{CacheKey, Category, ResultCache};
use crate::ranking::embedder::Embedder;
use crate::ranking::selector::{
    select_bullets, select_top, BulletGroup, ExperienceKind, RankedGroup,
};
use log::info;
use serde::{Deserialize, Serialize};

/// Knobs for one tailoring run.
#[derive(Debug, Clone)]
pub struct TailorOptions {
    /// Bullets kept per experience; 0 drops experiences from the resume.
    pub min_bullets: usize,
    pub skills_count: usize,
    pub projects_count: usize,
    /// Recompute rankings even when cached results exist.
    pub force_rebuild: bool,
}

impl TailorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_bullets: config.selection.bullets_per_experience,
            skills_count: config.selection.skills_count,
            projects_count: config.selection.projects_count,
            force_rebuild: false,
        }
    }
}

/// The ranked and capped content for one job application, in the shape
/// the document renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredContent {
    pub groups: Vec<RankedGroup>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// Coordinates the embedding provider, quota selection, and the result
/// cache across the three content categories.
///
/// Each instance owns its embedder and cache connection. Categories run
/// sequentially; a fatal error in an earlier category aborts the run.
pub struct TailorEngine<E: Embedder> {
    embedder: E,
    cache: ResultCache,
    options: TailorOptions,
}

impl<E: Embedder> TailorEngine<E> {
    pub fn new(embedder: E, cache: ResultCache, options: TailorOptions) -> Self {
        Self {
            embedder,
            cache,
            options,
        }
    }

    /// Rank the master list's content against the job posting and select
    /// the top subset of each category.
    pub fn tailor(&mut self, job: &JobPosting, master: &MasterList) -> Result<TailoredContent> {
        let groups = self.tailor_bullets(job, master)?;
        let skills = self.tailor_skills(job, master)?;
        let projects = self.tailor_projects(job, master)?;

        Ok(TailoredContent {
            groups,
            skills,
            projects,
        })
    }

    fn tailor_bullets(&mut self, job: &JobPosting, master: &MasterList) -> Result<Vec<RankedGroup>> {
        let groups: Vec<BulletGroup> = master
            .experiences
            .iter()
            .map(|exp| BulletGroup {
                kind: ExperienceKind::Work,
                title: exp.jobtitle.clone(),
                bullets: exp.bullets.clone(),
            })
            .collect();

        let key = self.cache_key(Category::Bullets, job, groups.len());
        if let Some(cached) = self.check_cache::<Vec<RankedGroup>>(&key)? {
            return Ok(cached);
        }

        info!("Ranking bullets for {} experiences", groups.len());
        let query_embedding = self.embedder.embed(&job.query_text())?;
        let selected = select_bullets(
            &mut self.embedder,
            &query_embedding,
            groups,
            self.options.min_bullets,
        )?;

        self.cache.store(&key, &selected)?;
        Ok(selected)
    }

    fn tailor_skills(&mut self, job: &JobPosting, master: &MasterList) -> Result<Vec<Skill>> {
        let pool = master.all_skills();

        let key = self.cache_key(Category::Skills, job, pool.len());
        if let Some(cached) = self.check_cache::<Vec<Skill>>(&key)? {
            return Ok(cached);
        }

        info!("Ranking {} skills", pool.len());
        let query_embedding = self.embedder.embed(&job.query_text())?;
        let selected = select_top(
            &mut self.embedder,
            &query_embedding,
            pool,
            self.options.skills_count,
        )?;

        self.cache.store(&key, &selected)?;
        Ok(selected)
    }

    fn tailor_projects(&mut self, job: &JobPosting, master: &MasterList) -> Result<Vec<Project>> {
        let pool = master.projects.clone();

        let key = self.cache_key(Category::Projects, job, pool.len());
        if let Some(cached) = self.check_cache::<Vec<Project>>(&key)? {
            return Ok(cached);
        }

        info!("Ranking {} projects", pool.len());
        let query_embedding = self.embedder.embed(&job.query_text())?;
        let selected = select_top(
            &mut self.embedder,
            &query_embedding,
            pool,
            self.options.projects_count,
        )?;

        self.cache.store(&key, &selected)?;
        Ok(selected)
    }

    fn cache_key(&self, category: Category, job: &JobPosting, pool_size: usize) -> CacheKey {
        CacheKey::new(
            category,
            &job.company,
            &job.title,
            pool_size,
            self.embedder.model_id(),
        )
    }

    /// Apply force-rebuild, then look the key up. A hit is used
    /// unconditionally: no embedding or ranking work happens for that
    /// category.
    fn check_cache<T: serde::de::DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        if self.options.force_rebuild {
            self.cache.invalidate(key)?;
            return Ok(None);
        }
        Ok(self.cache.load(key))
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }
}
