use crate::models::ContentFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8Name(String),
}

/// Which files in the content directory are candidates for rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Extension without the leading dot
    pub extension: String,
    /// File names skipped even when the extension matches
    pub reserved: Vec<String>,
}

impl ScanOptions {
    pub fn new(extension: impl Into<String>, reserved: Vec<String>) -> Self {
        Self {
            extension: extension.into(),
            reserved,
        }
    }

    /// Suffix match on the raw name, so `.md` itself and names that are not
    /// valid UTF-8 still count as content files.
    fn accepts(&self, file_name: &OsStr) -> bool {
        let suffix = format!(".{}", self.extension);
        let has_extension = file_name
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes());
        has_extension && !self.reserved.iter().any(|name| file_name == name.as_str())
    }
}

/// Read a content file and return its text
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Overwrite a content file in place
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// List the content files directly inside `root`, sorted by name.
///
/// Subdirectories are not descended into.
pub fn scan_content_files(root: &Path, options: &ScanOptions) -> Result<Vec<ContentFile>, IoError> {
    validate_content_dir(root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(root).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        if !options.accepts(&file_name) {
            log::trace!("Not a content file: {}", path.display());
            continue;
        }

        match file_name.to_str() {
            Some(name) => files.push(ContentFile::new(RelativePathBuf::from(name))),
            None => {
                log::warn!("File name is not valid UTF-8: {}", path.display());
                files.push(ContentFile::with_non_utf8_name(&file_name));
            }
        }
    }

    files.sort();
    log::debug!("Found {} content files in {}", files.len(), root.display());
    Ok(files)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
