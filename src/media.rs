//! Attachment intake from local files.

use std::path::Path;

use uuid::Uuid;

use crate::model::{MediaFile, MimeType};

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("only JPG, PNG and MP4 files are supported: {0}")]
    Unsupported(String),
    #[error("cannot read attachment {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build an attachment reference for the file at `path`.
///
/// # Errors
///
/// Returns [`MediaError::Unsupported`] for any extension other than
/// jpg/jpeg/png/mp4, and [`MediaError::Unreadable`] if the file's metadata
/// cannot be read or it is not a regular file.
pub fn attach(path: &Path) -> Result<MediaFile, MediaError> {
    let display = path.display().to_string();
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(MimeType::from_extension)
        .ok_or_else(|| MediaError::Unsupported(display.clone()))?;

    let metadata = std::fs::metadata(path).map_err(|source| MediaError::Unreadable { path: display.clone(), source })?;
    if !metadata.is_file() {
        return Err(MediaError::Unreadable {
            path: display,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let name = path
        .file_name()
        .map_or_else(|| display.clone(), |n| n.to_string_lossy().into_owned());

    Ok(MediaFile {
        id: Uuid::new_v4().simple().to_string(),
        name,
        kind: mime_type.kind(),
        url: display,
        mime_type,
        size: metadata.len(),
    })
}

/// Attach several files, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`MediaError`] encountered.
pub fn attach_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<MediaFile>, MediaError> {
    paths.iter().map(|p| attach(p.as_ref())).collect()
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
