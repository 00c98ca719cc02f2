use serde::{Deserialize, Serialize};

/// Department KPI shown on the department card / 部门KPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

/// SOP KPI triple, display strings only / SOP的KPI（仅用于展示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SopKpis {
    pub target: String,
    pub accuracy: String,
    pub sla: String,
}

/// Standard Operating Procedure / 标准作业流程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sop {
    /// Unique identifier, `SOP-<DEPT>-<NNN>` / 唯一标识
    pub id: String,
    pub title: String,
    pub owner: String,
    pub version: String,
    pub purpose: String,
    pub kpis: SopKpis,
    /// Flow steps in execution order / 按执行顺序排列的流程步骤
    pub flow: Vec<String>,
    /// Word document path relative to the documents directory / 相对于文档目录的Word文件路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Department owning a set of SOPs / 部门
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Short code, e.g. "HR" / 部门简码
    pub id: String,
    pub name: String,
    pub icon: String,
    pub owner: String,
    pub description: String,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub responsible: Vec<String>,
    #[serde(default)]
    pub sops: Vec<Sop>,
}

/// Department summary for list views / 部门摘要（列表用）
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub owner: String,
    pub description: String,
    pub sop_count: usize,
}

impl From<&Department> for DepartmentSummary {
    fn from(dept: &Department) -> Self {
        Self {
            id: dept.id.clone(),
            name: dept.name.clone(),
            icon: dept.icon.clone(),
            owner: dept.owner.clone(),
            description: dept.description.clone(),
            sop_count: dept.sops.len(),
        }
    }
}
