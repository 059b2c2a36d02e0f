//! Loading content bundles from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::definitions::ContentBundle;
use crate::document::{read_document, DocumentError};
use crate::error::{Result, RunetrackError};

/// Load a single bundle file. JSON or YAML is picked from the extension.
///
/// # Errors
///
/// Returns `ContentNotFound` if the file is missing and `ContentParseError`
/// if it does not match the bundle format, including requirements with an
/// unrecognized `type`.
pub fn load_bundle(path: &Path) -> Result<ContentBundle> {
    let bundle: ContentBundle = read_document(path).map_err(|e| match e {
        DocumentError::NotFound => RunetrackError::ContentNotFound {
            path: path.to_path_buf(),
        },
        DocumentError::Io(e) => RunetrackError::Io(e),
        DocumentError::Parse(message) => RunetrackError::ContentParseError {
            path: path.to_path_buf(),
            message,
        },
    })?;

    tracing::debug!(
        "Loaded {}: {} quest(s), {} diary(ies), {} combat achievement(s), {} guide(s)",
        path.display(),
        bundle.quests.len(),
        bundle.diaries.len(),
        bundle.combat_achievements.len(),
        bundle.guides.len()
    );
    Ok(bundle)
}

/// Bundle files directly inside a directory, sorted by name.
pub fn bundle_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_bundle = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e, "json" | "yml" | "yaml"));
        if path.is_file() && is_bundle {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every path (files, or directories of bundle files) into one bundle.
pub fn load_bundles<P: AsRef<Path>>(paths: &[P]) -> Result<ContentBundle> {
    let mut bundles = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            for file in bundle_files(path)? {
                bundles.push(load_bundle(&file)?);
            }
        } else {
            bundles.push(load_bundle(path)?);
        }
    }
    Ok(merge_bundles(bundles))
}

/// Concatenate bundles in order.
pub fn merge_bundles<I>(bundles: I) -> ContentBundle
where
    I: IntoIterator<Item = ContentBundle>,
{
    bundles
        .into_iter()
        .fold(ContentBundle::default(), |mut merged, bundle| {
            merged.merge(bundle);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const QUESTS_YAML: &str = r#"
quests:
  - id: cooks_assistant
    name: Cook's Assistant
    questPoints: 1
  - id: recipe_for_disaster
    name: Recipe for Disaster
    members: true
    requirements:
      - type: quest-complete
        questId: cooks_assistant
      - type: skill-level
        skill: cooking
        level: 70
"#;

    const DIARIES_JSON: &str = r#"{
        "diaries": [{
            "id": "varrock",
            "name": "Varrock Diary",
            "region": "Varrock",
            "tiers": [{"tier": "easy", "name": "Easy", "tasks": []}]
        }]
    }"#;

    #[test]
    fn loads_yaml_bundle() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quests.yml");
        fs::write(&path, QUESTS_YAML).unwrap();

        let bundle = load_bundle(&path).unwrap();
        assert_eq!(bundle.quests.len(), 2);
        assert!(bundle.quest("recipe_for_disaster").unwrap().members);
    }

    #[test]
    fn missing_bundle_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_bundle(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RunetrackError::ContentNotFound { .. }));
    }

    #[test]
    fn unknown_requirement_type_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(
            &path,
            r#"{"quests": [{"id": "a", "name": "A", "requirements": [{"type": "prayer-book"}]}]}"#,
        )
        .unwrap();

        let err = load_bundle(&path).unwrap_err();
        match err {
            RunetrackError::ContentParseError { path: p, message } => {
                assert_eq!(p, path);
                assert!(message.contains("prayer-book"), "{}", message);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_directory_and_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("content");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("quests.yaml"), QUESTS_YAML).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        let diaries = temp.path().join("diaries.json");
        fs::write(&diaries, DIARIES_JSON).unwrap();

        let bundle = load_bundles(&[dir, diaries]).unwrap();
        assert_eq!(bundle.quests.len(), 2);
        assert_eq!(bundle.diaries.len(), 1);
    }

    #[test]
    fn merge_preserves_order() {
        let first: ContentBundle = serde_yaml::from_str(QUESTS_YAML).unwrap();
        let second: ContentBundle = serde_json::from_str(DIARIES_JSON).unwrap();
        let merged = merge_bundles(vec![first, second]);
        assert_eq!(merged.quests[0].id, "cooks_assistant");
        assert_eq!(merged.diaries[0].id, "varrock");
        assert!(merge_bundles(Vec::new()).is_empty());
    }
}
