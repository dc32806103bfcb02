// src/upload.rs
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A resume the user picked through the file dialog. Lives only for the
/// current analysis run; dropped when the user starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type: {mime}")]
    UnsupportedType { mime: String },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The MIME type a browser would report for this file. Unknown extensions
/// fall back to the generic octet-stream tag, which the gate rejects.
pub fn mime_for_path(path: &Path) -> String {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => MIME_PDF,
        Some("doc") => MIME_DOC,
        Some("docx") => MIME_DOCX,
        _ => "application/octet-stream",
    }
    .to_string()
}

/// The actual gate: exact PDF type, or any Word variant.
pub fn is_supported(mime: &str) -> bool {
    mime == MIME_PDF || mime.contains("word")
}

/// Validate the file's type and read its raw content. The picker's
/// extension filter is advisory only; this check is what decides.
pub fn accept(path: &Path) -> Result<(UploadedFile, Vec<u8>), UploadError> {
    let mime = mime_for_path(path);
    if !is_supported(&mime) {
        return Err(UploadError::UnsupportedType { mime });
    }

    let content = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(file = %name, bytes = content.len(), "accepted resume upload");

    Ok((
        UploadedFile {
            name,
            mime,
            path: path.to_path_buf(),
        },
        content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pdf_mime_is_supported() {
        assert!(is_supported(MIME_PDF));
    }

    #[test]
    fn word_variants_are_supported() {
        assert!(is_supported(MIME_DOC));
        assert!(is_supported(MIME_DOCX));
    }

    #[test]
    fn other_mimes_are_rejected() {
        assert!(!is_supported("text/plain"));
        assert!(!is_supported("image/png"));
        assert!(!is_supported("application/octet-stream"));
        // Exact match required for PDF; a prefix is not enough
        assert!(!is_supported("application/pdf2"));
    }

    #[test]
    fn mime_mapping_ignores_extension_case() {
        assert_eq!(mime_for_path(Path::new("Resume.PDF")), MIME_PDF);
        assert_eq!(mime_for_path(Path::new("resume.DocX")), MIME_DOCX);
    }

    #[test]
    fn unknown_extension_maps_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("resume.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_path(Path::new("resume")),
            "application/octet-stream"
        );
    }

    #[test]
    fn accept_reads_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 fake resume").unwrap();

        let (uploaded, content) = accept(&path).unwrap();
        assert_eq!(uploaded.name, "resume.pdf");
        assert_eq!(uploaded.mime, MIME_PDF);
        assert_eq!(content, b"%PDF-1.4 fake resume");
    }

    #[test]
    fn accept_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text").unwrap();

        match accept(&path) {
            Err(UploadError::UnsupportedType { mime }) => {
                assert_eq!(mime, "application/octet-stream");
            }
            other => panic!("expected UnsupportedType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn accept_surfaces_read_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        assert!(matches!(accept(&path), Err(UploadError::Read { .. })));
    }
}
