use crate::errors::AppError;

/// Pulls reviewable text out of an uploaded document.
///
/// PDF uploads (by content type or a .pdf filename) go through the PDF text
/// extractor; everything else must be valid UTF-8 and is taken verbatim.
/// A document with no extractable text cannot be reviewed.
pub fn extract_document_text(
    content_type: Option<&str>,
    filename: Option<&str>,
    data: &[u8],
) -> Result<String, AppError> {
    let is_pdf = content_type == Some("application/pdf")
        || filename.is_some_and(|f| f.to_lowercase().ends_with(".pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text_from_mem(data).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not extract text from PDF: {e}"))
        })?
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity(
                "Document is neither a PDF nor valid UTF-8 text".to_string(),
            )
        })?
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Document contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_document_text(
            Some("text/plain"),
            Some("sop.txt"),
            b"My statement of purpose.",
        )
        .unwrap();
        assert_eq!(text, "My statement of purpose.");
    }

    #[test]
    fn test_missing_metadata_still_reads_utf8() {
        let text = extract_document_text(None, None, b"resume body").unwrap();
        assert_eq!(text, "resume body");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = extract_document_text(Some("text/plain"), None, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_whitespace_only_document_rejected() {
        let err = extract_document_text(None, Some("sop.txt"), b"   \n\t ").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_garbage_pdf_rejected() {
        let err =
            extract_document_text(Some("application/pdf"), Some("sop.pdf"), b"not a pdf")
                .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_pdf_detected_by_filename_alone() {
        // No content type, .pdf extension: routed to the PDF extractor, which
        // rejects the garbage bytes rather than reading them as UTF-8.
        let err = extract_document_text(None, Some("SOP.PDF"), b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
