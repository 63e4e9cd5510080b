use crate::io::ScanOptions;
use crate::rewrite::{ImageRewriter, RewriteTarget};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content directory
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(content_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

pub fn default_scan_options() -> ScanOptions {
    ScanOptions::new("md", vec!["index.md".to_string(), "about.md".to_string()])
}

pub fn test_rewriter() -> ImageRewriter {
    ImageRewriter::new(RewriteTarget {
        host: "github.example".to_string(),
        owner: "org".to_string(),
        repo: "XRE".to_string(),
        branch: "main".to_string(),
    })
    .unwrap()
}
