//! Document delivery - SOP Word files from the local disk / 文档下发
//!
//! Paths come from each SOP's `document` field, joined under the configured
//! base directory. The whole file is read into memory; there is no streaming
//! and no range support.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::utils::join_under;

/// MIME type of every served document / 文档MIME类型
pub const DOCX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Error, Debug)]
pub enum DocumentError {
    /// Unknown SOP, or SOP without a document / 未映射文件
    #[error("No file found for SOP {0}")]
    NotMapped(String),

    #[error("Could not resolve file path for SOP {0}")]
    Unresolvable(String),

    #[error("File not found on disk: {}", .path.display())]
    FileMissing { path: PathBuf },

    #[error("Path is not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read file: {0}")]
    Io(String),
}

/// Buffered document / 已读取的文档
#[derive(Debug, Clone)]
pub struct SopDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SopDocument {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Document store / 文档存储
#[derive(Debug, Clone)]
pub struct DocumentStore {
    base_dir: PathBuf,
    catalog: Arc<Catalog>,
}

impl DocumentStore {
    pub fn new(base_dir: impl Into<PathBuf>, catalog: Arc<Catalog>) -> Self {
        Self {
            base_dir: base_dir.into(),
            catalog,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// SOP id -> absolute file path / 解析文件路径
    pub fn resolve(&self, sop_id: &str) -> Result<PathBuf, DocumentError> {
        let sop_id = sop_id.trim();
        let relative = self
            .catalog
            .sop(sop_id)
            .and_then(|(_, sop)| sop.document.as_deref())
            .ok_or_else(|| DocumentError::NotMapped(sop_id.to_string()))?;

        join_under(&self.base_dir, relative).ok_or_else(|| DocumentError::Unresolvable(sop_id.to_string()))
    }

    /// Read the SOP's document into memory / 读取文档
    pub async fn fetch(&self, sop_id: &str) -> Result<SopDocument, DocumentError> {
        let path = self.resolve(sop_id)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocumentError::FileMissing { path });
            }
            Err(e) => return Err(DocumentError::Io(e.to_string())),
        };

        if !metadata.is_file() {
            return Err(DocumentError::NotAFile { path });
        }

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            tracing::error!("fetch document {}: {}", path.display(), e);
            DocumentError::Io(e.to_string())
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.docx", sop_id.trim()));

        tracing::debug!("document {} -> {} ({} bytes)", sop_id.trim(), path.display(), bytes.len());

        Ok(SopDocument { file_name, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "departments": [
            {"id": "HR", "name": "Human Resources", "icon": "👥", "owner": "Head of HR", "description": "People",
             "sops": [
                {"id": "SOP-HR-001", "title": "Recruitment", "owner": "HR Manager", "version": "V1.0",
                 "purpose": "Hiring.", "kpis": {"target": "-", "accuracy": "-", "sla": "-"},
                 "flow": ["Requisition"], "document": "HR/Recruitment & Hiring/SOP-HR-001.docx"},
                {"id": "SOP-HR-002", "title": "Onboarding", "owner": "HR Manager", "version": "V1.0",
                 "purpose": "Onboarding.", "kpis": {"target": "-", "accuracy": "-", "sla": "-"},
                 "flow": ["Welcome"]},
                {"id": "SOP-HR-003", "title": "Appraisal", "owner": "HR Manager", "version": "V1.0",
                 "purpose": "Appraisal.", "kpis": {"target": "-", "accuracy": "-", "sla": "-"},
                 "flow": ["Review"], "document": "HR/Appraisal"},
                {"id": "SOP-HR-004", "title": "Leave", "owner": "HR Manager", "version": "V1.0",
                 "purpose": "Leave.", "kpis": {"target": "-", "accuracy": "-", "sla": "-"},
                 "flow": ["Request"], "document": "./"}
             ]}
        ]
    }"#;

    fn store(base: &Path) -> DocumentStore {
        DocumentStore::new(base, Arc::new(Catalog::from_json_str(CATALOG).unwrap()))
    }

    #[test]
    fn test_resolve() {
        let store = store(Path::new("/srv/sops"));
        let path = store.resolve("SOP-HR-001").unwrap();
        assert_eq!(path, Path::new("/srv/sops/HR/Recruitment & Hiring/SOP-HR-001.docx"));
        // case-insensitive, trimmed
        assert_eq!(store.resolve(" sop-hr-001 ").unwrap(), path);

        assert!(matches!(store.resolve("SOP-HR-002"), Err(DocumentError::NotMapped(_))));
        assert!(matches!(store.resolve("SOP-XX-999"), Err(DocumentError::NotMapped(_))));
        assert!(matches!(store.resolve("SOP-HR-004"), Err(DocumentError::Unresolvable(_))));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("HR").join("Recruitment & Hiring");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("SOP-HR-001.docx"), b"PK\x03\x04fake-docx").unwrap();

        let doc = store(dir.path()).fetch("SOP-HR-001").await.unwrap();
        assert_eq!(doc.file_name, "SOP-HR-001.docx");
        assert_eq!(doc.bytes, b"PK\x03\x04fake-docx");
        assert_eq!(doc.len(), 13);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        match store(dir.path()).fetch("SOP-HR-001").await {
            Err(DocumentError::FileMissing { path }) => assert!(path.ends_with("SOP-HR-001.docx")),
            other => panic!("unexpected: {:?}", other.map(|d| d.file_name)),
        }
    }

    #[tokio::test]
    async fn test_fetch_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("HR").join("Appraisal")).unwrap();
        assert!(matches!(
            store(dir.path()).fetch("SOP-HR-003").await,
            Err(DocumentError::NotAFile { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_unmapped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            store(dir.path()).fetch("SOP-HR-002").await,
            Err(DocumentError::NotMapped(id)) if id == "SOP-HR-002"
        ));
    }
}
