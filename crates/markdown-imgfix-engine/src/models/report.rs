use crate::models::ContentFile;

/// Outcome of processing one content file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed and was written back
    Fixed,
    Unchanged,
    /// Reading or writing failed; holds the error message
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: ContentFile,
    /// Image markers found before rewriting; zero when the file could not be read
    pub images: usize,
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_fixed(&self) -> bool {
        self.status == FileStatus::Fixed
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// Per-file reports of one run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn files_fixed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_fixed()).count()
    }

    pub fn files_failed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failed()).count()
    }

    /// Image markers across all files, rewritten or not
    pub fn total_images(&self) -> usize {
        self.reports.iter().map(|r| r.images).sum()
    }
}
