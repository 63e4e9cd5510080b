use relative_path::{RelativePath, RelativePathBuf};
use std::ffi::OsStr;

/// A content file eligible for rewriting, relative to the content directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentFile {
    relative_path: RelativePathBuf,
    display_name: String,
    utf8_name: bool,
}

impl ContentFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
            utf8_name: true,
        }
    }

    /// A file whose name cannot be represented as a relative path. It is kept
    /// so the run can report it; its path is only the lossy display name.
    pub fn with_non_utf8_name(file_name: &OsStr) -> Self {
        let display_name = file_name.to_string_lossy().into_owned();
        Self {
            relative_path: RelativePathBuf::from(display_name.as_str()),
            display_name,
            utf8_name: false,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn has_utf8_name(&self) -> bool {
        self.utf8_name
    }

    /// File name as shown in the report (extension kept)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name().unwrap_or(path.as_str()).to_string()
    }
}

impl From<RelativePathBuf> for ContentFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ContentFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
