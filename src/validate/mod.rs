//! Checks that the dynamic data files under `public/` are valid JSON
//! before they are published.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Data files the homepage widgets fetch at runtime, relative to the
/// content root
pub const CONTENT_JSON_FILES: [&str; 6] = [
    "public/announcement.json",
    "public/countdowns.json",
    "public/todos.json",
    "public/exams.json",
    "public/micro-news.json",
    "public/glossary.json",
];

#[derive(Debug)]
pub struct FileReport {
    pub file: String,
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Console output for this file: a ✓ line when it parsed, otherwise
    /// a ✗ line followed by the indented error
    pub fn console_lines(&self) -> Vec<String> {
        match &self.error {
            None => vec![format!("✓ {} - 格式正确", self.file)],
            Some(e) => vec![
                format!("✗ {} - 格式错误:", self.file),
                format!("  {}\n", e),
            ],
        }
    }
}

pub fn validate_json_file(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str::<serde_json::Value>(&content)?;
    Ok(())
}

/// Validates every file independently so one bad file doesn't hide
/// problems in the others.
pub fn validate_json_files(root: &Path, files: &[&str]) -> Vec<FileReport> {
    files
        .iter()
        .map(|file| {
            let error = match validate_json_file(&root.join(file)) {
                Ok(()) => None,
                Err(e) => {
                    tracing::debug!("{} failed validation: {:#}", file, e);
                    Some(format!("{:#}", e))
                }
            };
            FileReport {
                file: file.to_string(),
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn it_accepts_valid_json() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("public"))?;
        fs::write(dir.path().join("public/todos.json"), r#"[{"title": "写博客"}]"#)?;
        fs::write(dir.path().join("public/exams.json"), "{}")?;

        let reports = validate_json_files(dir.path(), &["public/todos.json", "public/exams.json"]);
        assert!(reports.iter().all(FileReport::is_valid));
        Ok(())
    }

    #[test]
    fn it_reports_malformed_and_missing_files() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("public"))?;
        fs::write(dir.path().join("public/todos.json"), "[1, 2,]")?;
        fs::write(dir.path().join("public/exams.json"), "[]")?;

        let reports = validate_json_files(
            dir.path(),
            &["public/todos.json", "public/exams.json", "public/glossary.json"],
        );
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].file, "public/todos.json");
        assert!(!reports[0].is_valid());
        assert!(reports[1].is_valid());

        let missing = reports[2].error.as_deref().unwrap();
        assert!(missing.contains("Failed to read"));
        assert!(missing.contains("glossary.json"));
        Ok(())
    }

    #[test]
    fn it_formats_console_lines() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("public"))?;
        fs::write(dir.path().join("public/announcement.json"), r#"{"title": "公告"}"#)?;
        fs::write(dir.path().join("public/countdowns.json"), "{\"days\": }")?;

        let reports = validate_json_files(
            dir.path(),
            &["public/announcement.json", "public/countdowns.json"],
        );

        assert_eq!(
            reports[0].console_lines(),
            vec!["✓ public/announcement.json - 格式正确".to_string()]
        );

        let lines = reports[1].console_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "✗ public/countdowns.json - 格式错误:");
        assert!(lines[1].starts_with("  "));
        assert!(lines[1].ends_with('\n'));
        assert_eq!(lines[1].trim(), reports[1].error.as_deref().unwrap());
        Ok(())
    }
}
