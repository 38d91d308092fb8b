//! Result display formatting helpers
//!
//! Pure string formatting applied when presenting indexed file documents:
//! byte-size humanization and MIME-type-to-short-code translation. Both
//! functions are total; every input produces an output.

const KBYTES: u64 = 1024;
const MBYTES: u64 = 1024 * 1024;

/// Category prefix for image MIME types as flattened by the index.
pub const IMAGE_PREFIX: &str = "image_";
/// Category prefix for application MIME types as flattened by the index.
pub const APPLICATION_PREFIX: &str = "application_";

const MIMETYPE_WORD: &str =
    "application_vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIMETYPE_EXCEL: &str =
    "application_vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const MIMETYPE_POWERPOINT: &str =
    "application_vnd.openxmlformats-officedocument.presentationml.presentation";

/// Humanize a byte count for result listings.
///
/// Sizes of at least one mebibyte render as rounded megabytes, sizes of at
/// least one kibibyte as rounded kilobytes. Anything below one kibibyte
/// reports as the literal `"1 KB"` floor rather than rounding toward zero.
pub fn humanize_size(bytes: u64) -> String {
    if bytes >= MBYTES {
        format!("{} MB", (bytes as f64 / MBYTES as f64).round() as u64)
    } else if bytes >= KBYTES {
        format!("{} KB", (bytes as f64 / KBYTES as f64).round() as u64)
    } else {
        "1 KB".to_string()
    }
}

/// Translate an indexed MIME type into the short format code shown in the UI.
///
/// The index flattens the `/` in MIME types to `_`. The three long-form
/// OOXML types map to their conventional extensions; otherwise the category
/// prefix is stripped from image and application types, and anything without
/// a matching rule passes through unchanged.
pub fn translate_mime_type(mime: &str) -> String {
    match mime {
        MIMETYPE_WORD => "DOCX".to_string(),
        MIMETYPE_EXCEL => "XLSX".to_string(),
        MIMETYPE_POWERPOINT => "PPTX".to_string(),
        _ => {
            if let Some(rest) = mime.strip_prefix(IMAGE_PREFIX) {
                rest.to_string()
            } else if let Some(rest) = mime.strip_prefix(APPLICATION_PREFIX) {
                rest.to_string()
            } else {
                mime.to_string()
            }
        }
    }
}
