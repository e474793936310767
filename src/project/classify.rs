//! Project type detection
//!
//! An ordered rule set infers what an uploaded file batch is and which
//! file would launch it. First matching rule wins and later rules are
//! never consulted. Confidence is a fixed score attached to the firing
//! rule, not a computed quantity: the values are hand-tuned and kept
//! verbatim so identical inputs always produce identical records.

use serde::{Deserialize, Serialize};

use super::files::UploadedFile;

/// Closed set of detected project categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectKind {
    WebApplication,
    PythonProject,
    JavaScriptProject,
    Documentation,
    #[default]
    Unknown,
}

impl ProjectKind {
    /// Human-readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::WebApplication => "Web Application",
            ProjectKind::PythonProject => "Python Project",
            ProjectKind::JavaScriptProject => "JavaScript Project",
            ProjectKind::Documentation => "Documentation",
            ProjectKind::Unknown => "Unknown",
        }
    }
}

/// Classification record for an uploaded file batch
///
/// `main_file` indexes into the batch the record was classified from; it
/// is a weak reference, the batch still owns the file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    pub kind: ProjectKind,
    pub main_file: Option<usize>,
    pub runnable: bool,
    /// 0-100, fixed per firing rule
    pub confidence: u8,
    /// Diagnostic explanation of which rule fired
    pub reason: String,
}

impl Project {
    fn found(kind: ProjectKind, main_file: usize, confidence: u8, reason: String) -> Self {
        Self {
            kind,
            main_file: Some(main_file),
            runnable: true,
            confidence,
            reason,
        }
    }

    /// Name of the main file within its batch
    pub fn main_file_name<'a>(&self, files: &'a [UploadedFile]) -> Option<&'a str> {
        self.main_file
            .and_then(|idx| files.get(idx))
            .map(|f| f.name.as_str())
    }
}

fn find_named(files: &[UploadedFile], name: &str) -> Option<usize> {
    files.iter().position(|f| f.name == name)
}

fn find_by_ext(files: &[UploadedFile], exts: &[&str]) -> Option<usize> {
    files
        .iter()
        .position(|f| exts.iter().any(|ext| f.name.ends_with(ext)))
}

/// Classify an uploaded file batch. Pure and deterministic; never fails.
/// Anything unrecognized degrades to a low-confidence record instead of
/// an error.
pub fn classify(files: &[UploadedFile]) -> Project {
    // Web: an exact index.html beats any other HTML file
    if let Some(idx) = find_named(files, "index.html") {
        return Project::found(
            ProjectKind::WebApplication,
            idx,
            95,
            "Found index.html - web entry point".to_string(),
        );
    }
    if let Some(idx) = find_by_ext(files, &[".html", ".htm"]) {
        return Project::found(
            ProjectKind::WebApplication,
            idx,
            80,
            format!("Found HTML file: {}", files[idx].name),
        );
    }

    // Python: conventional entry filenames, then content heuristics,
    // then the largest source file
    let python: Vec<usize> = files
        .iter()
        .enumerate()
        .filter(|(_, f)| f.name.ends_with(".py"))
        .map(|(idx, _)| idx)
        .collect();
    if !python.is_empty() {
        if let Some(idx) = find_named(files, "main.py") {
            return Project::found(
                ProjectKind::PythonProject,
                idx,
                95,
                "Found main.py - Python entry point".to_string(),
            );
        }
        if let Some(idx) = find_named(files, "app.py") {
            return Project::found(
                ProjectKind::PythonProject,
                idx,
                92,
                "Found app.py - Flask/Django entry".to_string(),
            );
        }
        if let Some(idx) = find_named(files, "run.py") {
            return Project::found(
                ProjectKind::PythonProject,
                idx,
                90,
                "Found run.py - execution script".to_string(),
            );
        }
        for &idx in &python {
            let content = &files[idx].content;
            if content.contains("if __name__ == '__main__':")
                || content.contains("if __name__ == \"__main__\":")
            {
                return Project::found(
                    ProjectKind::PythonProject,
                    idx,
                    88,
                    format!("{} has main execution block", files[idx].name),
                );
            }
        }
        for &idx in &python {
            let content = &files[idx].content;
            if content.contains("Flask") || content.contains("from flask") {
                return Project::found(
                    ProjectKind::PythonProject,
                    idx,
                    92,
                    format!("Flask app detected in {}", files[idx].name),
                );
            }
        }
        // Ties keep the earlier file
        let mut largest = python[0];
        for &idx in &python[1..] {
            if files[idx].size > files[largest].size {
                largest = idx;
            }
        }
        return Project::found(
            ProjectKind::PythonProject,
            largest,
            60,
            format!("Largest Python file: {}", files[largest].name),
        );
    }

    // JavaScript
    let first_js = find_by_ext(files, &[".js"]);
    if let Some(first_js) = first_js {
        if let Some(idx) = find_named(files, "server.js") {
            return Project::found(
                ProjectKind::JavaScriptProject,
                idx,
                90,
                "Found server.js - Node.js server".to_string(),
            );
        }
        if let Some(idx) = find_named(files, "index.js") {
            return Project::found(
                ProjectKind::JavaScriptProject,
                idx,
                85,
                "Found index.js - main entry".to_string(),
            );
        }
        return Project::found(
            ProjectKind::JavaScriptProject,
            first_js,
            60,
            format!("Using first JavaScript file: {}", files[first_js].name),
        );
    }

    // Documentation
    if let Some(idx) = files
        .iter()
        .position(|f| f.name.to_lowercase().contains("readme"))
    {
        return Project::found(
            ProjectKind::Documentation,
            idx,
            70,
            format!("Documentation: {}", files[idx].name),
        );
    }

    // No recognizable entry point: point at the first file but mark it
    // not runnable
    if !files.is_empty() {
        return Project {
            kind: ProjectKind::Unknown,
            main_file: Some(0),
            runnable: false,
            confidence: 20,
            reason: format!("No clear entry found, showing {}", files[0].name),
        };
    }

    Project::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile::text(name, "")
    }

    fn file_with(name: &str, content: &str) -> UploadedFile {
        UploadedFile::text(name, content)
    }

    #[test]
    fn test_index_html_wins_outright() {
        let files = vec![file("main.py"), file("index.html")];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::WebApplication);
        assert_eq!(project.confidence, 95);
        assert!(project.runnable);
        assert_eq!(project.main_file_name(&files), Some("index.html"));
    }

    #[test]
    fn test_other_html_scores_lower() {
        let files = vec![file("style.css"), file("about.htm"), file("home.html")];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::WebApplication);
        assert_eq!(project.confidence, 80);
        // First HTML-ish file in input order
        assert_eq!(project.main_file_name(&files), Some("about.htm"));
    }

    #[test]
    fn test_python_entry_filename_ladder() {
        let project = classify(&[file("main.py"), file("app.py"), file("run.py")]);
        assert_eq!(project.confidence, 95);
        assert_eq!(project.reason, "Found main.py - Python entry point");

        let project = classify(&[file("app.py"), file("run.py")]);
        assert_eq!(project.confidence, 92);

        let project = classify(&[file("run.py"), file("util.py")]);
        assert_eq!(project.confidence, 90);
    }

    #[test]
    fn test_app_py_filename_beats_flask_content() {
        // The filename rules are checked before any content scanning,
        // so the Flask import inside app.py never gets consulted
        let files = vec![
            file_with("app.py", "from flask import Flask"),
            file("utils.py"),
        ];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::PythonProject);
        assert_eq!(project.confidence, 92);
        assert_eq!(project.reason, "Found app.py - Flask/Django entry");
        assert_eq!(project.main_file_name(&files), Some("app.py"));
    }

    #[test]
    fn test_python_main_guard_scanned_in_order() {
        let files = vec![
            file_with("helpers.py", "def helper(): pass"),
            file_with("cli.py", "if __name__ == '__main__':\n    run()"),
            file_with("alt.py", "if __name__ == \"__main__\":\n    run()"),
        ];
        let project = classify(&files);
        assert_eq!(project.confidence, 88);
        assert_eq!(project.main_file_name(&files), Some("cli.py"));
    }

    #[test]
    fn test_flask_content_fallback() {
        let files = vec![
            file_with("routes.py", "from flask import Blueprint"),
            file("models.py"),
        ];
        let project = classify(&files);
        assert_eq!(project.confidence, 92);
        assert_eq!(project.reason, "Flask app detected in routes.py");
    }

    #[test]
    fn test_largest_python_file_is_last_resort() {
        let files = vec![
            file_with("small.py", "x = 1"),
            file_with("big.py", "x = 1\n".repeat(50).as_str()),
            file_with("also_big.py", "y = 2\n".repeat(50).as_str()),
        ];
        let project = classify(&files);
        assert_eq!(project.confidence, 60);
        // Equal sizes keep the earlier file
        assert_eq!(project.main_file_name(&files), Some("big.py"));
        assert!(project.runnable);
    }

    #[test]
    fn test_javascript_ladder() {
        let files = vec![file("lib.js"), file("server.js"), file("index.js")];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::JavaScriptProject);
        assert_eq!(project.confidence, 90);
        assert_eq!(project.main_file_name(&files), Some("server.js"));

        let project = classify(&[file("lib.js"), file("index.js")]);
        assert_eq!(project.confidence, 85);

        let files = vec![file("widget.js"), file("other.js")];
        let project = classify(&files);
        assert_eq!(project.confidence, 60);
        assert_eq!(project.main_file_name(&files), Some("widget.js"));
    }

    #[test]
    fn test_readme_is_documentation() {
        let files = vec![file("LICENSE"), file("ReadMe.md")];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::Documentation);
        assert_eq!(project.confidence, 70);
        assert!(project.runnable);
        assert_eq!(project.main_file_name(&files), Some("ReadMe.md"));
    }

    #[test]
    fn test_unrecognized_batch_is_not_runnable() {
        let files = vec![file("data.csv"), file("notes.txt")];
        let project = classify(&files);
        assert_eq!(project.kind, ProjectKind::Unknown);
        assert_eq!(project.confidence, 20);
        assert!(!project.runnable);
        assert_eq!(project.main_file_name(&files), Some("data.csv"));
        assert_eq!(project.reason, "No clear entry found, showing data.csv");
    }

    #[test]
    fn test_empty_batch_yields_zero_record() {
        let project = classify(&[]);
        assert_eq!(project.kind, ProjectKind::Unknown);
        assert_eq!(project.main_file, None);
        assert_eq!(project.confidence, 0);
        assert!(!project.runnable);
        assert!(project.reason.is_empty());
    }

    #[test]
    fn test_no_main_file_implies_not_runnable() {
        let batches: Vec<Vec<UploadedFile>> = vec![
            vec![],
            vec![file("x.bin")],
            vec![file("index.html")],
            vec![file("app.py")],
        ];
        for files in &batches {
            let project = classify(files);
            if project.main_file.is_none() {
                assert!(!project.runnable);
            }
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let files = vec![
            file_with("app.py", "from flask import Flask"),
            file("readme.md"),
        ];
        assert_eq!(classify(&files), classify(&files));
    }
}
