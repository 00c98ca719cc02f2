//! Catalog store - immutable department/SOP collection / 目录存储
//!
//! Loaded once at startup (embedded JSON or a file from config) and shared
//! read-only as `Arc<Catalog>`; there is no write path.

pub mod error;
pub mod validate;

pub use error::CatalogError;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::models::{Department, Sop};

/// Catalog shipped inside the binary / 编译时嵌入的目录数据
#[derive(RustEmbed)]
#[folder = "catalog/"]
#[include = "*.json"]
struct BuiltinCatalog;

const BUILTIN_FILE: &str = "departments.json";

fn default_organization() -> String {
    "ONE Development".to_string()
}

/// On-disk catalog layout / 目录文件格式
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_organization")]
    organization: String,
    departments: Vec<Department>,
}

/// Catalog totals / 目录统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_departments: usize,
    pub total_sops: usize,
    pub total_flows: usize,
    pub total_flow_steps: usize,
    pub documented_sops: usize,
}

/// Immutable department/SOP catalog / 不可变的部门与SOP目录
#[derive(Debug)]
pub struct Catalog {
    organization: String,
    departments: Vec<Department>,
    /// SOP id -> (department index, sop index) / SOP位置索引
    sop_index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// Build a catalog from already parsed departments / 从部门列表构建目录
    pub fn new(organization: impl Into<String>, departments: Vec<Department>) -> Result<Self, CatalogError> {
        validate::validate_departments(&departments)?;

        let mut sop_index = HashMap::new();
        for (d, dept) in departments.iter().enumerate() {
            for (s, sop) in dept.sops.iter().enumerate() {
                sop_index.insert(sop.id.to_uppercase(), (d, s));
            }
        }

        Ok(Self {
            organization: organization.into(),
            departments,
            sop_index,
        })
    }

    /// Parse and validate catalog JSON / 解析并校验目录JSON
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::new(file.organization, file.departments)
    }

    /// Load the catalog embedded at compile time / 加载内置目录
    pub fn builtin() -> Result<Self, CatalogError> {
        let content = BuiltinCatalog::get(BUILTIN_FILE)
            .ok_or(CatalogError::MissingBuiltin(BUILTIN_FILE))?;
        let text = String::from_utf8_lossy(&content.data);
        let catalog = Self::from_json_str(&text)?;
        tracing::debug!(
            "Loaded builtin catalog: {} departments, {} SOPs",
            catalog.departments.len(),
            catalog.sop_index.len()
        );
        Ok(catalog)
    }

    /// Load a catalog file from disk / 从文件加载目录
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&text)?;
        tracing::info!(
            "Loaded catalog from {:?}: {} departments, {} SOPs",
            path,
            catalog.departments.len(),
            catalog.sop_index.len()
        );
        Ok(catalog)
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Departments in catalog order / 按目录顺序的部门列表
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Find department by short code (case-insensitive) / 按简码查找部门
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id.eq_ignore_ascii_case(id.trim()))
    }

    /// Find SOP and its owning department by id (case-insensitive) / 按ID查找SOP及其所属部门
    pub fn sop(&self, id: &str) -> Option<(&Department, &Sop)> {
        let (d, s) = *self.sop_index.get(&id.trim().to_uppercase())?;
        let dept = &self.departments[d];
        Some((dept, &dept.sops[s]))
    }

    /// Iterate all SOPs with their department, in catalog order / 按目录顺序遍历所有SOP
    pub fn sops(&self) -> impl Iterator<Item = (&Department, &Sop)> {
        self.departments
            .iter()
            .flat_map(|dept| dept.sops.iter().map(move |sop| (dept, sop)))
    }

    pub fn sop_count(&self) -> usize {
        self.sop_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Browse filter used by the department grid / 部门浏览过滤
    ///
    /// Blank query returns every department. Otherwise a department is kept when
    /// its name or code contains the query, or one of its SOP titles does.
    pub fn filter_departments(&self, query: &str) -> Vec<&Department> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.departments.iter().collect();
        }

        self.departments
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&q)
                    || d.id.to_lowercase().contains(&q)
                    || d.sops.iter().any(|s| s.title.to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Catalog totals / 目录统计
    pub fn stats(&self) -> CatalogStats {
        let total_sops = self.sop_index.len();
        CatalogStats {
            total_departments: self.departments.len(),
            total_sops,
            // 每个SOP对应一个流程
            total_flows: total_sops,
            total_flow_steps: self.sops().map(|(_, s)| s.flow.len()).sum(),
            documented_sops: self.sops().filter(|(_, s)| s.document.is_some()).count(),
        }
    }
}
