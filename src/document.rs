//! Reading JSON or YAML documents from disk.
//!
//! Content bundles, fact sources and snapshots may be authored in either
//! format. Files ending in `.json` are parsed as JSON; everything else is
//! parsed as YAML.

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// Document encoding chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Failure reading a document.
#[derive(Debug)]
pub enum DocumentError {
    /// The file does not exist.
    NotFound,
    /// Any other IO failure.
    Io(io::Error),
    /// The content did not deserialize; carries the parser message.
    Parse(String),
}

/// Parse document text in the given format.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: DocumentFormat,
) -> Result<T, String> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Read and parse a document, choosing the format from the extension.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            DocumentError::NotFound
        } else {
            DocumentError::Io(e)
        }
    })?;

    tracing::debug!("Parsing {} ({} bytes)", path.display(), content.len());
    parse_document(&content, DocumentFormat::from_path(path)).map_err(DocumentError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        name: String,
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.JSON")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.yml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b")),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn reads_json_and_yaml() {
        let temp = TempDir::new().unwrap();
        let json = temp.path().join("doc.json");
        let yaml = temp.path().join("doc.yaml");
        fs::write(&json, r#"{"name": "zulrah"}"#).unwrap();
        fs::write(&yaml, "name: vorkath\n").unwrap();

        let a: Doc = read_document(&json).unwrap();
        let b: Doc = read_document(&yaml).unwrap();
        assert_eq!(a.name, "zulrah");
        assert_eq!(b.name, "vorkath");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = read_document::<Doc>(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(DocumentError::NotFound)));
    }

    #[test]
    fn malformed_content_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let result = read_document::<Doc>(&path);
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }
}
