use crate::domain::cv::CvData;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads and validates a CV document in TOML form.
pub fn load_cv(path: &Path) -> Result<CvData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CV file {}", path.display()))?;
    let cv: CvData = toml::from_str(&content)
        .with_context(|| format!("Failed to parse CV file {}", path.display()))?;
    cv.validate()
        .with_context(|| format!("Invalid CV file {}", path.display()))?;
    Ok(cv)
}

/// Resolves the CV for this run: the configured file, or the built-in data
/// when no file is configured. A broken file yields `None` so CV commands
/// report the data as unavailable.
pub fn resolve_cv(path: Option<&Path>) -> Option<CvData> {
    match path {
        None => Some(CvData::builtin()),
        Some(path) => match load_cv(path) {
            Ok(cv) => {
                log::info!("Loaded CV from {}", path.display());
                Some(cv)
            }
            Err(e) => {
                log::warn!("CV data unavailable: {e:#}");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_cv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
skills = ["Rust", "Swift"]

[[projects]]
title = "folio"
description = "A [TUI](https://ratatui.rs) portfolio"
tags = ["Rust"]
"#
        )
        .unwrap();

        let cv = load_cv(file.path()).unwrap();
        assert_eq!(cv.skills, vec!["Rust", "Swift"]);
        assert_eq!(cv.projects[0].title, "folio");
        assert!(cv.education.is_empty());
    }

    #[test]
    fn test_invalid_cv_resolves_to_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[projects]]\ndescription = \"untitled\"").unwrap();

        assert!(load_cv(file.path()).is_err());
        assert_eq!(resolve_cv(Some(file.path())), None);
    }

    #[test]
    fn test_missing_file_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_cv(Some(&dir.path().join("nope.toml"))), None);
    }

    #[test]
    fn test_no_path_uses_builtin() {
        assert_eq!(resolve_cv(None), Some(CvData::builtin()));
    }
}
