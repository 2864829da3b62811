//! Text extraction module for course documents
//! Supports: TXT, PDF, DOCX (and legacy .doc names routed to the DOCX reader)

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{AppError, Result};

/// Extensions accepted by [`extract_text_from_file`], without the leading dot
const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "doc"];

/// Lowercase extension of a path, without the dot
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Whether a file name has an extension we can extract text from
pub fn is_supported_format(path: impl AsRef<Path>) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path.as_ref()).as_str())
}

/// Read a document from disk and extract its text based on file extension
pub fn extract_text_from_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    // Reject before touching the filesystem
    if !is_supported_format(path) {
        return Err(unsupported(path));
    }

    let data = fs::read(path)?;
    extract_text_from_bytes(path, &data)
}

/// Extract text content from in-memory file data based on the file name's extension
pub fn extract_text_from_bytes(file_name: impl AsRef<Path>, file_data: &[u8]) -> Result<String> {
    let path = file_name.as_ref();
    let extension = extension_of(path);

    info!(
        "Extracting text from file: {} (type: {})",
        path.display(),
        extension
    );

    match extension.as_str() {
        "txt" => String::from_utf8(file_data.to_vec())
            .map_err(|e| AppError::Extraction(format!("Invalid UTF-8 content: {}", e))),

        "pdf" => extract_pdf_text(file_data),

        "docx" | "doc" => extract_docx_text(file_data),

        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> AppError {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    AppError::unsupported_format(extension)
}

/// Extract text from PDF file
pub fn extract_pdf_text(file_data: &[u8]) -> Result<String> {
    info!("Extracting text from PDF...");

    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::Extraction(format!(
                "Failed to extract PDF text: {}",
                e
            )))
        }
    }
}

/// Extract text from DOCX file, one line per non-empty paragraph
pub fn extract_docx_text(file_data: &[u8]) -> Result<String> {
    info!("Extracting text from DOCX...");

    let docx = docx_rs::read_docx(file_data).map_err(|e| {
        warn!("DOCX extraction failed: {}", e);
        AppError::Extraction(format!("Failed to extract DOCX text: {}", e))
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    let cleaned = clean_extracted_text(&paragraphs.join("\n"));
    info!("DOCX extraction successful: {} characters", cleaned.len());
    Ok(cleaned)
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            docx_rs::ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}

/// Clean up extracted text
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
