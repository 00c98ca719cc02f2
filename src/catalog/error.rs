//! Catalog load errors / 目录加载错误

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Embedded catalog not found: {0}")]
    MissingBuiltin(&'static str),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Department #{index} has an empty {field}")]
    EmptyDepartmentField { index: usize, field: &'static str },

    #[error("Duplicate department id: {0}")]
    DuplicateDepartment(String),

    #[error("Malformed SOP id '{id}' in department {department}, expected SOP-<DEPT>-<NNN>")]
    MalformedSopId { id: String, department: String },

    #[error("SOP {id} is filed under department {department}")]
    DepartmentMismatch { id: String, department: String },

    #[error("Duplicate SOP id: {0}")]
    DuplicateSop(String),

    #[error("SOP {0} has an empty title")]
    EmptySopTitle(String),

    #[error("SOP {id} has an unsafe document path: {path}")]
    UnsafeDocumentPath { id: String, path: String },
}
