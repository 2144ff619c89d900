//! Integration tests for the ranking result cache

mod common;

use common::bullet;
use resume_tailor::ranking::cache::{
    prepare_text_for_filename, CacheKey, Category, ResultCache,
};
use resume_tailor::ranking::selector::{ExperienceKind, RankedGroup};
use tempfile::TempDir;

fn sample_key() -> CacheKey {
    CacheKey::new(
        Category::Bullets,
        "ACME inc.",
        "Experimental Physicist",
        2,
        "stub-model",
    )
}

fn sample_result() -> Vec<RankedGroup> {
    vec![RankedGroup {
        kind: ExperienceKind::Work,
        title: "Acme".to_string(),
        bullets: vec![bullet(1, "first"), bullet(2, "second")],
        scores: vec![0.8, 0.3],
    }]
}

#[test]
fn test_cache_round_trip() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), true).unwrap();
    let key = sample_key();
    let result = sample_result();

    cache.store(&key, &result).unwrap();
    let loaded: Vec<RankedGroup> = cache.load(&key).unwrap();
    assert_eq!(loaded, result);
}

#[test]
fn test_cache_miss_on_unknown_key() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), true).unwrap();

    let loaded: Option<Vec<RankedGroup>> = cache.load(&sample_key());
    assert!(loaded.is_none());
}

#[test]
fn test_corrupt_entry_treated_as_miss() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), true).unwrap();
    let key = sample_key();

    std::fs::write(cache.entry_path(&key), "{ not valid json").unwrap();
    let loaded: Option<Vec<RankedGroup>> = cache.load(&key);
    assert!(loaded.is_none());

    // Recompute path overwrites the corrupt entry
    let result = sample_result();
    cache.store(&key, &result).unwrap();
    let loaded: Vec<RankedGroup> = cache.load(&key).unwrap();
    assert_eq!(loaded, result);
}

#[test]
fn test_invalidate_removes_entry() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), true).unwrap();
    let key = sample_key();

    cache.store(&key, &sample_result()).unwrap();
    assert!(cache.entry_path(&key).is_file());

    cache.invalidate(&key).unwrap();
    assert!(!cache.entry_path(&key).is_file());
    let loaded: Option<Vec<RankedGroup>> = cache.load(&key);
    assert!(loaded.is_none());
}

#[test]
fn test_invalidate_missing_entry_is_ok() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), true).unwrap();
    assert!(cache.invalidate(&sample_key()).is_ok());
}

#[test]
fn test_disabled_cache_never_stores() {
    let dir = TempDir::new().unwrap();
    let cache = ResultCache::new(dir.path(), false).unwrap();
    let key = sample_key();

    cache.store(&key, &sample_result()).unwrap();
    assert!(!cache.entry_path(&key).is_file());
    let loaded: Option<Vec<RankedGroup>> = cache.load(&key);
    assert!(loaded.is_none());
}

#[test]
fn test_fingerprint_shape() {
    let key = sample_key();
    assert_eq!(
        key.file_stem(),
        "bullets_acmeInc_experimentalPhysicist_poolcount2_model-stub-model"
    );
}

#[test]
fn test_fingerprint_sanitizes_model_paths() {
    let key = CacheKey::new(Category::Skills, "Acme", "Engineer", 9, "minishlab/potion-base-8M");
    assert!(!key.file_stem().contains('/'));
    assert!(key.file_stem().starts_with("skills_acme_engineer_poolcount9_model-"));
}

// The fingerprint covers pool size but not pool content, so equal-sized
// pools for the same job and model share an entry
#[test]
fn test_fingerprint_ignores_pool_content() {
    let a = CacheKey::new(Category::Projects, "Acme", "Engineer", 4, "stub-model");
    let b = CacheKey::new(Category::Projects, "Acme", "Engineer", 4, "stub-model");
    assert_eq!(a.file_stem(), b.file_stem());

    let c = CacheKey::new(Category::Projects, "Acme", "Engineer", 5, "stub-model");
    assert_ne!(a.file_stem(), c.file_stem());
}

#[test]
fn test_prepare_text_for_filename() {
    assert_eq!(prepare_text_for_filename("ACME inc."), "acmeInc");
    assert_eq!(
        prepare_text_for_filename("Senior Software Engineer, ML/AI"),
        "seniorSoftwareEngineerMlai"
    );
    assert_eq!(prepare_text_for_filename(""), "");
}
