//! Ingestion: flatten a PDF into a single content string.
//!
//! The extractor yields one text fragment per page, in document order. The
//! fragments are concatenated with no boundary markers — downstream stages
//! treat the document as one string, so page structure has no effect on the
//! output. The accumulator is seeded with a single space, so fragments
//! `["A.", "B."]` produce `" A.B."`; callers depend on that exact shape.
//!
//! We validate existence, read permission and the `%PDF` magic bytes before
//! handing the file to the extractor, so a bad path gets a precise error
//! rather than an opaque parser failure.

use crate::error::PolishError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Yields the ordered text fragments of a document.
///
/// The loading step is the one stage with file I/O, so it sits behind a
/// trait object the same way the remote call does: [`PdfLoader`] extracts
/// real pages in production, [`MockLoader`] substitutes a fixed fragment
/// list in tests.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Extract the per-page text fragments of the document at `path`,
    /// in document order.
    async fn load_fragments(&self, path: &Path) -> Result<Vec<String>, PolishError>;
}

/// Validate that `path` names a readable PDF.
///
/// Checks, in order: the file exists, the process may open it, and the
/// first four bytes are `%PDF`.
pub fn validate_pdf(path: &Path) -> Result<(), PolishError> {
    if !path.exists() {
        return Err(PolishError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            use std::io::Read;
            let mut magic = [0u8; 4];
            match f.read_exact(&mut magic) {
                Ok(()) if &magic == b"%PDF" => {}
                // Wrong header, or too short to hold one: not a PDF.
                Ok(()) => {
                    return Err(PolishError::NotAPdf {
                        path: path.to_path_buf(),
                        magic,
                    });
                }
                Err(_) => {
                    return Err(PolishError::NotAPdf {
                        path: path.to_path_buf(),
                        magic: [0u8; 4],
                    });
                }
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(PolishError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(PolishError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Validated PDF: {}", path.display());
    Ok(())
}

/// Production loader: validate the file, then extract per-page text.
///
/// Extraction failures (corrupt file, encrypted document, image-only
/// pages) are fatal for the request; there is no retry or partial result.
pub struct PdfLoader;

#[async_trait]
impl DocumentLoader for PdfLoader {
    async fn load_fragments(&self, path: &Path) -> Result<Vec<String>, PolishError> {
        validate_pdf(path)?;

        let owned: PathBuf = path.to_path_buf();
        let fragments = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_by_pages(&owned).map_err(|e| {
                PolishError::ExtractionFailed {
                    path: owned.clone(),
                    detail: e.to_string(),
                }
            })
        })
        .await
        .map_err(|e| PolishError::Internal(format!("Extraction task panicked: {}", e)))??;

        info!(
            "Extracted {} fragments from {}",
            fragments.len(),
            path.display()
        );
        Ok(fragments)
    }
}

/// Loader that answers with a fixed fragment list, never opening the path.
pub struct MockLoader {
    fragments: Vec<String>,
}

impl MockLoader {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl DocumentLoader for MockLoader {
    async fn load_fragments(&self, _path: &Path) -> Result<Vec<String>, PolishError> {
        Ok(self.fragments.clone())
    }
}

/// Concatenate fragments into the single content string the model sees.
///
/// The accumulator starts as `" "` and fragment boundaries vanish.
pub fn concat_fragments(fragments: &[String]) -> String {
    let mut content = String::from(" ");
    for fragment in fragments {
        content.push_str(fragment);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn concat_seeds_accumulator_with_space() {
        let fragments = vec!["A.".to_string(), "B.".to_string()];
        assert_eq!(concat_fragments(&fragments), " A.B.");
    }

    #[test]
    fn concat_of_nothing_is_the_seed() {
        assert_eq!(concat_fragments(&[]), " ");
    }

    #[test]
    fn concat_preserves_document_order() {
        let fragments = vec!["one ".to_string(), "two ".to_string(), "three".to_string()];
        assert_eq!(concat_fragments(&fragments), " one two three");
    }

    #[test]
    fn validate_rejects_missing_file() {
        let err = validate_pdf(Path::new("/nonexistent/doc.pdf")).unwrap_err();
        assert!(matches!(err, PolishError::FileNotFound { .. }));
    }

    #[test]
    fn validate_rejects_non_pdf_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"Dear reader, this is plain text").unwrap();
        let err = validate_pdf(f.path()).unwrap_err();
        assert!(matches!(err, PolishError::NotAPdf { .. }));
    }

    #[test]
    fn validate_rejects_file_shorter_than_the_header() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%P").unwrap();
        let err = validate_pdf(f.path()).unwrap_err();
        assert!(matches!(err, PolishError::NotAPdf { .. }), "got: {err}");
    }

    #[test]
    fn validate_rejects_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = validate_pdf(f.path()).unwrap_err();
        assert!(matches!(err, PolishError::NotAPdf { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn mock_loader_returns_its_fragments() {
        let loader = MockLoader::new(["A.", "B."]);
        let fragments = loader
            .load_fragments(Path::new("never-opened.pdf"))
            .await
            .unwrap();
        assert_eq!(fragments, vec!["A.", "B."]);
    }

    #[test]
    fn validate_accepts_pdf_magic() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%PDF-1.7\n%...").unwrap();
        assert!(validate_pdf(f.path()).is_ok());
    }
}
