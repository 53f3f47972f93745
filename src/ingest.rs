//! Document loading from disk
//!
//! Reads `.txt` and `.pdf` files out of an input directory and hands the
//! core a batch of (name, text) pairs. Files whose text cannot be
//! extracted, or is too short to be usable, are skipped rather than
//! failing the batch.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::pipeline::Document;

/// Extracted text at or below this length is discarded
pub const MIN_TEXT_LEN: usize = 50;

/// Load every usable document from `dir`.
///
/// Files are visited in filename order so the batch order is stable
/// across platforms. Unsupported extensions are ignored; unreadable
/// PDFs are skipped.
pub fn load_documents(dir: &Path) -> crate::Result<Vec<Document>> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to list input directory: {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };

        let text = match ext.to_ascii_lowercase().as_str() {
            "txt" => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read text file: {}", path.display()))?,
            "pdf" => match extract_pdf_text(&path) {
                Ok(text) => text,
                // A single broken PDF should not sink the batch
                Err(_) => continue,
            },
            _ => continue,
        };

        let text = clean_text(&text);
        if text.chars().count() <= MIN_TEXT_LEN {
            continue;
        }

        documents.push(Document {
            name: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
            text,
        });
    }

    if documents.is_empty() {
        anyhow::bail!("No usable documents found in {}", dir.display());
    }

    Ok(documents)
}

/// Extract plain text from a PDF file
fn extract_pdf_text(path: &Path) -> crate::Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

    Ok(text)
}

/// Flatten newlines and collapse whitespace runs
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_load_txt_documents_in_name_order() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "b_second.txt",
            "neural network training deep learning models and more text to pass the length check",
        );
        write_file(
            dir.path(),
            "a_first.txt",
            "machine learning neural networks deep learning with enough characters to be usable",
        );

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].name, "a_first.txt");
        assert_eq!(documents[1].name, "b_second.txt");
    }

    #[test]
    fn test_short_and_unsupported_files_skipped() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "short.txt", "too short");
        write_file(
            dir.path(),
            "notes.md",
            "markdown files are not part of the supported input formats at all",
        );
        write_file(
            dir.path(),
            "keep.txt",
            "this document has more than fifty characters of usable extracted text in it",
        );

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "keep.txt");
    }

    #[test]
    fn test_broken_pdf_skipped() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "broken.pdf", "not actually a pdf");
        write_file(
            dir.path(),
            "keep.txt",
            "this document has more than fifty characters of usable extracted text in it",
        );

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_empty_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(load_documents(dir.path()).is_err());
    }

    #[test]
    fn test_clean_text_flattens_newlines() {
        let dirty = "  Hello \n\n world\t again  ";
        assert_eq!(clean_text(dirty), "Hello world again");
    }
}
