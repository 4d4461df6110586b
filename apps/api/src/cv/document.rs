use bytes::Bytes;

use crate::cv::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
    Word,
}

impl DocumentFormat {
    /// Format by file extension. Anything that is not PDF or Word is read as text.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => DocumentFormat::Pdf,
            "doc" | "docx" => DocumentFormat::Word,
            _ => DocumentFormat::PlainText,
        }
    }
}

/// An uploaded CV that already passed the size and emptiness checks.
#[derive(Debug, Clone)]
pub struct CvDocument {
    pub file_name: String,
    pub format: DocumentFormat,
    bytes: Bytes,
}

impl CvDocument {
    pub fn new(file_name: &str, bytes: Bytes, max_bytes: usize) -> Result<Self, ExtractError> {
        if bytes.is_empty() {
            return Err(ExtractError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(ExtractError::TooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }

        Ok(Self {
            file_name: file_name.to_string(),
            format: DocumentFormat::from_file_name(file_name),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Extracts readable text. PDF parsing runs on the blocking pool.
    pub async fn text(&self) -> Result<String, ExtractError> {
        match self.format {
            DocumentFormat::PlainText => Ok(String::from_utf8_lossy(&self.bytes).into_owned()),
            DocumentFormat::Pdf => {
                let bytes = self.bytes.clone();
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await
                    .map_err(|e| ExtractError::Document(format!("PDF worker failed: {e}")))?
                    .map_err(|e| ExtractError::Document(format!("PDF text extraction failed: {e}")))
            }
            // No document converter is wired in; Word files are rejected up front.
            DocumentFormat::Word => Err(ExtractError::UnsupportedFormat("docx".to_string())),
        }
    }
}
