//! Knowledge data discovery.
//!
//! Builds the [`KnowledgeBase`] from the bundled data (or a replacement
//! file) and merges every extra JSON file found under
//! `knowledge.extra_dir`, walking the directory with include and exclude
//! globs.

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use krishi_advisor_core::KnowledgeBase;

use crate::config::KnowledgeConfig;

pub fn load_knowledge(config: &KnowledgeConfig) -> Result<KnowledgeBase> {
    let kb = match &config.data_path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read knowledge data: {}", path.display()))?;
            KnowledgeBase::load_or_empty(&data)
        }
        None => KnowledgeBase::bundled().context("Bundled knowledge data is invalid")?,
    }
    .with_threshold(config.match_threshold);

    if let Some(dir) = &config.extra_dir {
        for path in discover_files(dir, config)? {
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match kb.extend_from_json(&data) {
                Ok(merged) => tracing::info!(file = %path.display(), merged, "merged knowledge file"),
                Err(e) => tracing::warn!(file = %path.display(), error = %e, "skipping knowledge file"),
            }
        }
    }

    tracing::debug!(entries = kb.total_entries(), "knowledge base ready");
    Ok(kb)
}

/// Files under `root` matching the include globs and none of the excludes,
/// sorted by relative path.
pub fn discover_files(root: &Path, config: &KnowledgeConfig) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Knowledge directory does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;

    let mut excludes = vec!["**/.git/**".to_string()];
    excludes.extend(config.exclude_globs.clone());
    let exclude_set = build_globset(&excludes)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(config.follow_symlinks) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }
        files.push((rel_str, path.to_path_buf()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {pattern}"))?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXTRA: &str = r#"{
        "pest_control": [{
            "id": "mango_hopper",
            "question": "How do I control mango hoppers?",
            "keywords": ["mango hopper", "hopper"],
            "answer": "Spray imidacloprid 0.3 ml per litre at panicle emergence."
        }]
    }"#;

    #[test]
    fn test_discover_respects_globs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("nested")).unwrap();
        fs::create_dir_all(tmp.path().join("drafts")).unwrap();
        fs::write(tmp.path().join("b.json"), "{}").unwrap();
        fs::write(tmp.path().join("nested/a.json"), "{}").unwrap();
        fs::write(tmp.path().join("drafts/c.json"), "{}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let config = KnowledgeConfig {
            exclude_globs: vec!["drafts/**".to_string()],
            ..Default::default()
        };
        let files = discover_files(tmp.path(), &config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.json", "nested/a.json"]);
    }

    #[test]
    fn test_missing_dir_fails() {
        let config = KnowledgeConfig::default();
        assert!(discover_files(Path::new("/nonexistent/knowledge"), &config).is_err());
    }

    #[test]
    fn test_load_merges_extra_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("extra.json"), EXTRA).unwrap();
        fs::write(tmp.path().join("broken.json"), "not json").unwrap();

        let config = KnowledgeConfig {
            extra_dir: Some(tmp.path().to_path_buf()),
            ..Default::default()
        };
        let kb = load_knowledge(&config).unwrap();
        assert_eq!(kb.total_entries(), 23);
        assert!(kb.search("mango hopper attack", 3).iter().any(|h| h.entry.id == "mango_hopper"));
    }

    #[test]
    fn test_unparsable_data_path_degrades_to_schemes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kb.json");
        fs::write(&path, "{ broken").unwrap();

        let config = KnowledgeConfig {
            data_path: Some(path),
            match_threshold: 0.5,
            ..Default::default()
        };
        let kb = load_knowledge(&config).unwrap();
        assert_eq!(kb.total_entries(), 4);
        assert_eq!(kb.threshold(), 0.5);
    }
}
