//! Load-time schema checks / 加载时的数据校验
//!
//! Every rule fails fast with a dedicated [`CatalogError`] variant, so a
//! malformed catalog never reaches the search engine.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::CatalogError;
use crate::models::Department;
use crate::utils::is_safe_relative_path;

/// `SOP-<DEPT>-<NNN>`
static SOP_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SOP-([A-Z]+)-(\d{3})$").expect("SOP id pattern is valid"));

/// Validate the whole department list / 校验整个部门列表
pub fn validate_departments(departments: &[Department]) -> Result<(), CatalogError> {
    let mut dept_ids = HashSet::new();
    let mut sop_ids = HashSet::new();

    for (index, dept) in departments.iter().enumerate() {
        if dept.id.trim().is_empty() {
            return Err(CatalogError::EmptyDepartmentField { index, field: "id" });
        }
        if dept.name.trim().is_empty() {
            return Err(CatalogError::EmptyDepartmentField { index, field: "name" });
        }
        if !dept_ids.insert(dept.id.to_uppercase()) {
            return Err(CatalogError::DuplicateDepartment(dept.id.clone()));
        }

        for sop in &dept.sops {
            let caps = SOP_ID_REGEX.captures(&sop.id).ok_or_else(|| CatalogError::MalformedSopId {
                id: sop.id.clone(),
                department: dept.id.clone(),
            })?;

            if !caps[1].eq_ignore_ascii_case(&dept.id) {
                return Err(CatalogError::DepartmentMismatch {
                    id: sop.id.clone(),
                    department: dept.id.clone(),
                });
            }

            if !sop_ids.insert(sop.id.clone()) {
                return Err(CatalogError::DuplicateSop(sop.id.clone()));
            }

            if sop.title.trim().is_empty() {
                return Err(CatalogError::EmptySopTitle(sop.id.clone()));
            }

            if let Some(document) = &sop.document {
                if !is_safe_relative_path(document) {
                    return Err(CatalogError::UnsafeDocumentPath {
                        id: sop.id.clone(),
                        path: document.clone(),
                    });
                }
            }

            if sop.flow.is_empty() {
                tracing::warn!("SOP {} has no flow steps", sop.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sop, SopKpis};

    fn sop(id: &str) -> Sop {
        Sop {
            id: id.to_string(),
            title: "Leave Management".to_string(),
            owner: "HR Manager".to_string(),
            version: "V1.0".to_string(),
            purpose: "Handles leave requests.".to_string(),
            kpis: SopKpis {
                target: "100%".to_string(),
                accuracy: "100%".to_string(),
                sla: "<24h".to_string(),
            },
            flow: vec!["Request".to_string(), "Approve".to_string()],
            document: None,
        }
    }

    fn dept(id: &str, sops: Vec<Sop>) -> Department {
        Department {
            id: id.to_string(),
            name: format!("{} Department", id),
            icon: "📁".to_string(),
            owner: "Head".to_string(),
            description: "Test department".to_string(),
            kpis: Vec::new(),
            responsible: Vec::new(),
            sops,
        }
    }

    #[test]
    fn test_valid_catalog() {
        let depts = vec![
            dept("HR", vec![sop("SOP-HR-001"), sop("SOP-HR-002")]),
            dept("IT", vec![sop("SOP-IT-001")]),
        ];
        assert!(validate_departments(&depts).is_ok());
    }

    #[test]
    fn test_malformed_sop_id() {
        for bad in ["SOP-HR-1", "sop-hr-001", "SOP-HR-0001", "HR-001", "SOP--001"] {
            let depts = vec![dept("HR", vec![sop(bad)])];
            assert!(
                matches!(validate_departments(&depts), Err(CatalogError::MalformedSopId { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_sop_filed_under_wrong_department() {
        let depts = vec![dept("HR", vec![sop("SOP-IT-001")])];
        assert!(matches!(
            validate_departments(&depts),
            Err(CatalogError::DepartmentMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids() {
        let depts = vec![dept("HR", vec![sop("SOP-HR-001"), sop("SOP-HR-001")])];
        assert!(matches!(validate_departments(&depts), Err(CatalogError::DuplicateSop(id)) if id == "SOP-HR-001"));

        let depts = vec![dept("HR", vec![]), dept("hr", vec![])];
        assert!(matches!(validate_departments(&depts), Err(CatalogError::DuplicateDepartment(_))));
    }

    #[test]
    fn test_empty_fields() {
        let depts = vec![dept(" ", vec![])];
        assert!(matches!(
            validate_departments(&depts),
            Err(CatalogError::EmptyDepartmentField { index: 0, field: "id" })
        ));

        let mut untitled = sop("SOP-HR-001");
        untitled.title = String::new();
        let depts = vec![dept("HR", vec![untitled])];
        assert!(matches!(validate_departments(&depts), Err(CatalogError::EmptySopTitle(_))));
    }

    #[test]
    fn test_unsafe_document_path() {
        let mut escaping = sop("SOP-HR-001");
        escaping.document = Some("../outside.docx".to_string());
        let depts = vec![dept("HR", vec![escaping])];
        assert!(matches!(
            validate_departments(&depts),
            Err(CatalogError::UnsafeDocumentPath { .. })
        ));
    }

    #[test]
    fn test_empty_flow_is_accepted() {
        let mut no_flow = sop("SOP-HR-001");
        no_flow.flow.clear();
        assert!(validate_departments(&[dept("HR", vec![no_flow])]).is_ok());
    }
}
