//! Path processing utility functions / 路径处理工具函数

use std::path::{Path, PathBuf};

/// Clean and normalize a relative document path / 清理和规范化路径
/// 1. Replace backslashes with forward slashes / 将反斜杠替换为正斜杠
/// 2. Ensure path starts with / / 确保路径以 / 开头
/// 3. Clean . and .. in path / 清理路径中的 . 和 ..
pub fn fix_and_clean_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let path = if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    };

    clean_path(&path)
}

/// Clean path, handle ., .. and duplicate / / 清理路径，处理 . 和 .. 和重复的 /
fn clean_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Check that a catalog document path stays inside the documents directory / 检查文档路径不会越出文档目录
///
/// Rejects absolute paths, Windows drive prefixes and any `..` component.
pub fn is_safe_relative_path(path: &str) -> bool {
    let path = path.trim();
    if path.is_empty() || path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    // C:\... / C:/...
    if path.len() >= 2 && path.as_bytes()[1] == b':' {
        return false;
    }
    !path.split(|c: char| c == '/' || c == '\\').any(|part| part == "..")
}

/// Join a relative document path under the base directory / 将相对路径拼接到根目录下
///
/// Returns None when nothing is left after cleaning.
pub fn join_under(base: &Path, relative: &str) -> Option<PathBuf> {
    let cleaned = fix_and_clean_path(relative);
    let trimmed = cleaned.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut full = base.to_path_buf();
    for part in trimmed.split('/') {
        full.push(part);
    }
    Some(full)
}

/// Build an attachment Content-Disposition value / 构造附件下载的 Content-Disposition
pub fn attachment_disposition(filename: &str) -> String {
    let ascii_safe = filename.replace('"', "'");
    let encoded = urlencoding::encode(filename);
    format!("attachment; filename=\"{}\"; filename*=UTF-8''{}", ascii_safe, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_and_clean_path() {
        assert_eq!(fix_and_clean_path(""), "/");
        assert_eq!(fix_and_clean_path("."), "/");
        assert_eq!(fix_and_clean_path("../.."), "/");
        assert_eq!(fix_and_clean_path("HR/Onboarding & Orientation/a.docx"), "/HR/Onboarding & Orientation/a.docx");
        assert_eq!(fix_and_clean_path("CRM\\Resale Process\\b.docx"), "/CRM/Resale Process/b.docx");
        assert_eq!(fix_and_clean_path("/a//b///c"), "/a/b/c");
        assert_eq!(fix_and_clean_path("/a/./b/../c"), "/a/c");
    }

    #[test]
    fn test_is_safe_relative_path() {
        assert!(is_safe_relative_path("Legal/Contract Preparation & Review/SOP-LEG-001.docx"));
        assert!(is_safe_relative_path("Development/Manage Contractor's Material/x.docx"));
        assert!(!is_safe_relative_path(""));
        assert!(!is_safe_relative_path("/etc/passwd"));
        assert!(!is_safe_relative_path("C:\\Users\\x.docx"));
        assert!(!is_safe_relative_path("HR/../../secret.docx"));
        assert!(!is_safe_relative_path("HR\\..\\secret.docx"));
    }

    #[test]
    fn test_join_under() {
        let base = Path::new("/srv/sops");
        assert_eq!(
            join_under(base, "HR/Onboarding/a.docx"),
            Some(PathBuf::from("/srv/sops/HR/Onboarding/a.docx"))
        );
        assert_eq!(join_under(base, "./"), None);
        assert_eq!(join_under(base, ""), None);
    }

    #[test]
    fn test_attachment_disposition() {
        let value = attachment_disposition("SOP-CRM-001-Resale Process.docx");
        assert_eq!(
            value,
            "attachment; filename=\"SOP-CRM-001-Resale Process.docx\"; filename*=UTF-8''SOP-CRM-001-Resale%20Process.docx"
        );

        // plain filename first, quotes kept out of the quoted parameter
        let value = attachment_disposition("Say \"hi\".docx");
        assert!(value.starts_with("attachment; filename=\"Say 'hi'.docx\"; "));
        assert!(value.ends_with("filename*=UTF-8''Say%20%22hi%22.docx"));
    }
}
