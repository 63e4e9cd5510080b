//! Console wording for the run report.

use markdown_imgfix_engine::{FileReport, FileStatus, RunSummary};

pub const SEPARATOR_WIDTH: usize = 60;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn no_files_lines() -> Vec<String> {
    vec![
        "❌ No content markdown files found!".to_string(),
        "Make sure you're in the directory with your markdown files".to_string(),
    ]
}

pub fn header(file_count: usize, host: &str) -> String {
    format!("Found {file_count} markdown files. Fixing {host} image URLs...")
}

pub fn file_line(report: &FileReport) -> String {
    let name = report.file.display_name();
    match &report.status {
        FileStatus::Fixed => format!("✔️ Fixed images in: {name} ({} images)", report.images),
        FileStatus::Unchanged if report.images > 0 => {
            format!("⚪ No changes needed: {name} ({} images)", report.images)
        }
        FileStatus::Unchanged => format!("⚪ No images found: {name}"),
        FileStatus::Failed(message) => format!("❌ Error fixing {name}: {message}"),
    }
}

pub fn summary_lines(summary: &RunSummary, host: &str) -> Vec<String> {
    let fixed = summary.files_fixed();
    let mut lines = vec![
        separator(),
        format!("✔️ Done! Fixed images in {fixed} files."),
        format!("📊 Total images found: {}", summary.total_images()),
    ];

    if fixed > 0 {
        lines.extend([
            "\n🚀 Next steps:".to_string(),
            "1. Commit and push your changes:".to_string(),
            "   git add .".to_string(),
            format!("   git commit -m 'Fix {host} image URLs'"),
            "   git push".to_string(),
            "2. Wait 2-3 minutes for GitHub Pages to rebuild".to_string(),
            "3. Check if images now display correctly".to_string(),
        ]);
    } else {
        lines.extend([
            "\n🔍 If no files were fixed, the image URL format might be different.".to_string(),
            "Can you share an example image line from one of your files?".to_string(),
        ]);
    }

    lines
}
