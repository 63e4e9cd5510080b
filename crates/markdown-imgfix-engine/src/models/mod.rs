pub mod content_file;
pub mod report;

pub use content_file::ContentFile;
pub use report::{FileReport, FileStatus, RunSummary};
