pub mod fixer;
pub mod io;
pub mod markers;
pub mod models;
pub mod rewrite;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use fixer::{fix_file, fix_files};
pub use io::{IoError, ScanOptions};
pub use markers::count_image_markers;
pub use models::{ContentFile, FileReport, FileStatus, RunSummary};
pub use rewrite::{ImageRewriter, Rewrite, RewriteError, RewriteTarget};
