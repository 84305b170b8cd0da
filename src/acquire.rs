use std::path::Path;

use anyhow::{bail, Context};

/// Extensions this binary reads directly. PDF/DOCX extraction belongs to
/// upstream tooling; by the time text reaches the pipeline it is plain text.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "text", "md"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read a document's text. Failures come back as errors, never as error
/// prose masquerading as document content.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    if !is_supported(path) {
        bail!(
            "unsupported document format: {} (expected one of: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "document is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("resume_scan_test_{}", name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_plain_text() {
        let path = temp_file("plain.txt", b"Jane Doe\njane@example.com");
        let text = read_text(&path).unwrap();
        assert!(text.contains("jane@example.com"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn lossy_decode_still_returns_text() {
        let path = temp_file("lossy.txt", b"Jane \xff Doe");
        let text = read_text(&path).unwrap();
        assert!(text.contains("Jane"));
        assert!(text.contains("Doe"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = read_text(Path::new("resume.pdf")).unwrap_err();
        assert!(err.to_string().contains("unsupported document format"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_text(Path::new("/nonexistent/resume.txt")).is_err());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported(Path::new("resume.TXT")));
        assert!(is_supported(Path::new("notes.md")));
        assert!(!is_supported(Path::new("resume.docx")));
        assert!(!is_supported(Path::new("resume")));
    }
}
