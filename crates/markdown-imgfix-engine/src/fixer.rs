//! Per-file fix pass: read, count, rewrite, write back when changed.
//!
//! A failure on one file is recorded in its report and never stops the
//! remaining files from being processed.

use crate::io;
use crate::markers::count_image_markers;
use crate::models::{ContentFile, FileReport, FileStatus, RunSummary};
use crate::rewrite::ImageRewriter;
use std::path::Path;

pub fn fix_file(root: &Path, file: &ContentFile, rewriter: &ImageRewriter) -> FileReport {
    if !file.has_utf8_name() {
        let e = io::IoError::NonUtf8Name(file.display_name().to_string());
        return FileReport {
            file: file.clone(),
            images: 0,
            status: FileStatus::Failed(e.to_string()),
        };
    }

    let content = match io::read_file(file.relative_path(), root) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", file.display_name());
            return FileReport {
                file: file.clone(),
                images: 0,
                status: FileStatus::Failed(e.to_string()),
            };
        }
    };

    let images = count_image_markers(&content);
    let rewrite = rewriter.rewrite(&content);

    let status = if !rewrite.changed {
        log::debug!("{}: no matching image URLs", file.display_name());
        FileStatus::Unchanged
    } else {
        match io::write_file(file.relative_path(), root, &rewrite.content) {
            Ok(()) => {
                log::debug!("{}: rewritten", file.display_name());
                FileStatus::Fixed
            }
            Err(e) => {
                log::warn!("Failed to write {}: {e}", file.display_name());
                FileStatus::Failed(e.to_string())
            }
        }
    };

    FileReport {
        file: file.clone(),
        images,
        status,
    }
}

/// Fix each file in turn, handing every report to `on_report` as soon as it
/// is ready.
pub fn fix_files<F>(
    root: &Path,
    files: &[ContentFile],
    rewriter: &ImageRewriter,
    mut on_report: F,
) -> RunSummary
where
    F: FnMut(&FileReport),
{
    let mut summary = RunSummary::new();
    for file in files {
        let report = fix_file(root, file, rewriter);
        on_report(&report);
        summary.push(report);
    }

    log::info!(
        "Processed {} files: {} fixed, {} failed",
        summary.len(),
        summary.files_fixed(),
        summary.files_failed()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_content_dir, create_test_file, test_rewriter};
    use pretty_assertions::assert_eq;

    const ATTACHMENT: &str =
        "![01](https://github.example/org/XRE/assets/102151/0b9cdbda-bd1a-40bb-b436-b085feb8266a)";
    const RAW: &str =
        "![01](https://github.example/org/XRE/raw/main/assets/0b9cdbda-bd1a-40bb-b436-b085feb8266a)";

    #[test]
    fn test_fix_file_rewrites_and_saves() {
        let content_dir = create_test_content_dir();
        let path = create_test_file(
            &content_dir,
            "lab1.md",
            &format!("# Lab 1\n\n{ATTACHMENT}\n![b](b.png)\n"),
        );

        let report = fix_file(content_dir.path(), &ContentFile::from("lab1.md"), &test_rewriter());

        assert_eq!(report.status, FileStatus::Fixed);
        assert_eq!(report.images, 2);
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            format!("# Lab 1\n\n{RAW}\n![b](b.png)\n")
        );
    }

    #[test]
    fn test_fix_file_unchanged_with_images() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "lab1.md", &format!("{RAW}\n"));

        let report = fix_file(content_dir.path(), &ContentFile::from("lab1.md"), &test_rewriter());

        assert_eq!(report.status, FileStatus::Unchanged);
        assert_eq!(report.images, 1);
    }

    #[test]
    fn test_fix_file_without_images_is_not_written() {
        let content_dir = create_test_content_dir();
        let path = create_test_file(&content_dir, "notes.md", "plain text");
        let before = std::fs::metadata(&path).unwrap().modified().unwrap();

        let report = fix_file(content_dir.path(), &ContentFile::from("notes.md"), &test_rewriter());

        assert_eq!(report.status, FileStatus::Unchanged);
        assert_eq!(report.images, 0);
        let after = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_fix_file_reports_read_errors() {
        let content_dir = create_test_content_dir();
        std::fs::write(content_dir.path().join("broken.md"), [0xc3, 0x28]).unwrap();

        let report = fix_file(content_dir.path(), &ContentFile::from("broken.md"), &test_rewriter());

        assert!(report.is_failed());
        assert_eq!(report.images, 0);
    }

    #[test]
    fn test_fix_file_reports_non_utf8_name() {
        let content_dir = create_test_content_dir();
        let file = ContentFile::with_non_utf8_name(std::ffi::OsStr::new("caf\u{FFFD}.md"));

        let report = fix_file(content_dir.path(), &file, &test_rewriter());

        assert_eq!(
            report.status,
            FileStatus::Failed("File name is not valid UTF-8: caf\u{FFFD}.md".to_string())
        );
        assert_eq!(report.images, 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_fix_files_reports_non_utf8_file_by_name() {
        use std::os::unix::ffi::OsStrExt;

        let content_dir = create_test_content_dir();
        let name = std::ffi::OsStr::from_bytes(b"caf\xe9.md");
        std::fs::write(content_dir.path().join(name), ATTACHMENT).unwrap();
        create_test_file(&content_dir, "lab1.md", ATTACHMENT);
        let files =
            io::scan_content_files(content_dir.path(), &crate::tests::default_scan_options())
                .unwrap();

        let summary = fix_files(content_dir.path(), &files, &test_rewriter(), |_| {});

        let failed: Vec<_> = summary
            .reports()
            .filter(|r| r.is_failed())
            .map(|r| r.file.display_name())
            .collect();
        assert_eq!(failed, vec!["caf\u{FFFD}.md"]);
        assert_eq!(summary.files_fixed(), 1);
        // The unreadable name is reported, never written
        assert_eq!(
            std::fs::read_to_string(content_dir.path().join(name)).unwrap(),
            ATTACHMENT
        );
    }

    #[test]
    fn test_fix_files_continues_after_error() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "a.md", ATTACHMENT);
        std::fs::write(content_dir.path().join("b.md"), [0xff]).unwrap();
        create_test_file(&content_dir, "c.md", ATTACHMENT);
        let files = ["a.md", "b.md", "c.md"].map(ContentFile::from_relative_str).to_vec();

        let mut seen = Vec::new();
        let summary = fix_files(content_dir.path(), &files, &test_rewriter(), |report| {
            seen.push(report.file.display_name().to_string());
        });

        assert_eq!(seen, vec!["a.md", "b.md", "c.md"]);
        assert_eq!(summary.files_fixed(), 2);
        assert_eq!(summary.files_failed(), 1);
        assert_eq!(summary.total_images(), 2);
    }
}
