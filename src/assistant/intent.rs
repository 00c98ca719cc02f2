//! Deterministic intent classification / 确定性意图分类
//!
//! Ordered, first match wins: greeting, help, department listing, direct
//! department match, then keyword search.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;
use crate::models::Department;

static GREETING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|good morning|good afternoon|good evening)").expect("greeting pattern is valid")
});

static HELP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(help|what can you do|how do you work)").expect("help pattern is valid"));

static LIST_DEPARTMENTS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(list|show|what).*(department|dept)").expect("listing pattern is valid"));

/// Classified assistant intent / 助手意图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    /// "hi", "good morning" ... => canned welcome
    Greeting,
    /// "help", "what can you do" ... => capability summary
    Help,
    /// "list departments", "show me all depts" ... => department list
    ListDepartments,
    /// Query mentions a department code or name => department profile
    Department(&'a Department),
    /// Everything else => relevance search
    Search,
}

impl std::fmt::Display for Intent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greeting => write!(f, "greeting"),
            Self::Help => write!(f, "help"),
            Self::ListDepartments => write!(f, "list_departments"),
            Self::Department(dept) => write!(f, "department:{}", dept.id),
            Self::Search => write!(f, "search"),
        }
    }
}

/// Classify query to an intent / 对查询进行意图分类
///
/// Patterns are anchored at the start of the lowercased query, so "history"
/// counts as a greeting. Department matching is plain substring containment
/// of the code or name, checked in catalog order.
pub fn classify<'a>(query: &str, catalog: &'a Catalog) -> Intent<'a> {
    let q = query.trim().to_lowercase();

    if GREETING_REGEX.is_match(&q) {
        return Intent::Greeting;
    }

    if HELP_REGEX.is_match(&q) {
        return Intent::Help;
    }

    if LIST_DEPARTMENTS_REGEX.is_match(&q) {
        return Intent::ListDepartments;
    }

    if let Some(dept) = match_department(&q, catalog) {
        return Intent::Department(dept);
    }

    Intent::Search
}

fn match_department<'a>(q: &str, catalog: &'a Catalog) -> Option<&'a Department> {
    catalog
        .departments()
        .iter()
        .find(|d| q.contains(&d.id.to_lowercase()) || q.contains(&d.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn department_id(intent: Intent<'_>) -> Option<&str> {
        match intent {
            Intent::Department(dept) => Some(dept.id.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_greetings() {
        let catalog = catalog();
        for q in ["hello", "Hi", "hey there", "Good Morning team", "  good evening"] {
            assert_eq!(classify(q, &catalog), Intent::Greeting, "{}", q);
        }
        // prefix match, not word match
        assert_eq!(classify("history of the URRF", &catalog), Intent::Greeting);
        assert_ne!(classify("say hello", &catalog), Intent::Greeting);
    }

    #[test]
    fn test_help() {
        let catalog = catalog();
        assert_eq!(classify("help", &catalog), Intent::Help);
        assert_eq!(classify("What can you do?", &catalog), Intent::Help);
        assert_eq!(classify("how do you work", &catalog), Intent::Help);
    }

    #[test]
    fn test_list_departments() {
        let catalog = catalog();
        assert_eq!(classify("list departments", &catalog), Intent::ListDepartments);
        assert_eq!(classify("Show me all depts", &catalog), Intent::ListDepartments);
        assert_eq!(classify("what departments exist?", &catalog), Intent::ListDepartments);
        // help wins over listing
        assert_eq!(classify("what can you do with departments", &catalog), Intent::Help);
    }

    #[test]
    fn test_department_match() {
        let catalog = catalog();
        assert_eq!(department_id(classify("HR", &catalog)), Some("HR"));
        assert_eq!(department_id(classify("Show me HR SOPs", &catalog)), Some("HR"));
        assert_eq!(department_id(classify("human resources", &catalog)), Some("HR"));
        assert_eq!(department_id(classify("procurement", &catalog)), Some("PROC"));
        // "sop-sales-001" contains "sales"
        assert_eq!(department_id(classify("SOP-SALES-001", &catalog)), Some("SALES"));
        // "commission" contains "mis"
        assert_eq!(department_id(classify("commission", &catalog)), Some("MIS"));
    }

    #[test]
    fn test_search_fallback() {
        let catalog = catalog();
        assert_eq!(classify("urrf", &catalog), Intent::Search);
        assert_eq!(classify("onboarding", &catalog), Intent::Search);
        assert_eq!(classify("xyzzyqqqnotfound", &catalog), Intent::Search);
        assert_eq!(classify("", &catalog), Intent::Search);
    }

    #[test]
    fn test_display() {
        let catalog = catalog();
        assert_eq!(classify("hello", &catalog).to_string(), "greeting");
        assert_eq!(classify("HR", &catalog).to_string(), "department:HR");
    }
}
