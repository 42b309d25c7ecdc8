use crate::dataset::Payload;
use crate::ports::PayloadSource;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// FileSystemSource adapter reading the two source documents from disk.
///
/// The flags path is optional; an absent flags document defaults to an
/// empty mapping, matching a scanner run with no flag configuration.
pub struct FileSystemSource {
    payload_path: PathBuf,
    flags_path: Option<PathBuf>,
}

impl FileSystemSource {
    pub fn new(payload_path: impl Into<PathBuf>, flags_path: Option<PathBuf>) -> Self {
        Self {
            payload_path: payload_path.into(),
            flags_path,
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON document: {}", path.display()))
    }
}

#[async_trait]
impl PayloadSource for FileSystemSource {
    async fn fetch_payload(&self) -> Result<Payload> {
        Self::read_json(&self.payload_path)
    }

    async fn fetch_flags(&self) -> Result<Value> {
        match &self.flags_path {
            Some(path) => Self::read_json(path),
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }
}

/// InMemorySource adapter holding directly injected documents.
///
/// Mirrors the scanner embedding case where the payload never crosses a
/// transport; also the natural source for tests.
pub struct InMemorySource {
    payload: Payload,
    flags: Value,
}

impl InMemorySource {
    pub fn new(payload: Payload, flags: Value) -> Self {
        Self { payload, flags }
    }
}

#[async_trait]
impl PayloadSource for InMemorySource {
    async fn fetch_payload(&self) -> Result<Payload> {
        Ok(self.payload.clone())
    }

    async fn fetch_flags(&self) -> Result<Value> {
        Ok(self.flags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_filesystem_source_reads_both_documents() {
        let payload_file = write_temp(r#"{ "warnings": [], "dependencies": {} }"#);
        let flags_file = write_temp(r#"{ "hasWarnings": { "emoji": "⚠️" } }"#);

        let source = FileSystemSource::new(
            payload_file.path(),
            Some(flags_file.path().to_path_buf()),
        );

        let payload = source.fetch_payload().await.unwrap();
        assert!(payload.dependencies.is_empty());

        let flags = source.fetch_flags().await.unwrap();
        assert_eq!(flags["hasWarnings"]["emoji"], "⚠️");
    }

    #[tokio::test]
    async fn test_filesystem_source_defaults_flags_to_empty_mapping() {
        let payload_file = write_temp(r#"{ "warnings": [], "dependencies": {} }"#);
        let source = FileSystemSource::new(payload_file.path(), None);

        let flags = source.fetch_flags().await.unwrap();
        assert_eq!(flags, json!({}));
    }

    #[tokio::test]
    async fn test_filesystem_source_missing_payload_fails() {
        let source = FileSystemSource::new("/nonexistent/payload.json", None);
        let err = source.fetch_payload().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[tokio::test]
    async fn test_filesystem_source_malformed_payload_fails() {
        let payload_file = write_temp("not json at all");
        let source = FileSystemSource::new(payload_file.path(), None);
        let err = source.fetch_payload().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON document"));
    }

    #[tokio::test]
    async fn test_in_memory_source_returns_injected_documents() {
        let payload: Payload =
            serde_json::from_value(json!({ "warnings": ["w"], "dependencies": {} })).unwrap();
        let source = InMemorySource::new(payload, json!({ "k": 1 }));

        assert_eq!(source.fetch_payload().await.unwrap().warnings, vec!["w"]);
        assert_eq!(source.fetch_flags().await.unwrap(), json!({ "k": 1 }));
    }
}
