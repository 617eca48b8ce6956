//! Loading study material from files and videos.

mod youtube;

use std::fs;
use std::path::Path;

use crate::error::SourceError;

pub use youtube::{extract_video_id, TranscriptFetcher};

/// Read a PDF or text file, chosen by extension. Blocking.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String, SourceError> {
    let path = path.as_ref();
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        extract_pdf_text(path)
    } else {
        read_text_file(path)
    }
}

pub fn read_text_file(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Text of every page, concatenated in order.
pub fn extract_pdf_text(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| SourceError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), chars = text.len(), "extracted pdf text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("studybot-{}-{}", std::process::id(), name))
    }

    #[test]
    fn load_text_file() {
        let path = temp_path("notes.txt");
        fs::write(&path, "Mitochondria are the powerhouse of the cell.").unwrap();
        let text = load_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(text, "Mitochondria are the powerhouse of the cell.");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = temp_path("missing.txt");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
