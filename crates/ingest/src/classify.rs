//! Text/binary classification.
//!
//! A file is eligible for comparison when its name carries a known text
//! extension, or when its decoded text is mostly printable. The printable
//! check runs on decoded characters, not raw bytes, so a Latin-1 fallback
//! decode of a binary blob still shows up as high-range characters.

/// Extensions accepted without looking at the content.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    ".txt", ".js", ".ts", ".jsx", ".tsx", ".html", ".css", ".json", ".xml", ".md", ".py",
    ".java", ".cpp", ".c", ".h", ".php", ".rb", ".go", ".rs", ".swift", ".kt", ".scala", ".sh",
    ".yml", ".yaml", ".toml", ".ini", ".cfg", ".conf",
];

/// Default ceiling for the non-printable share of a file's characters.
pub const DEFAULT_MAX_NON_PRINTABLE_RATIO: f64 = 0.1;

/// True for control characters outside tab/LF/VT/FF/CR, DEL, and the whole
/// `U+0080..=U+00FF` range.
#[inline]
pub fn is_non_printable(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{08}' | '\u{0E}'..='\u{1F}' | '\u{7F}'..='\u{FF}')
}

/// Share of non-printable characters in `text`. Empty text scores `0.0`.
///
/// Counts Unicode scalar values (`char`s), not UTF-16 code units.
pub fn non_printable_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut flagged = 0usize;
    for ch in text.chars() {
        total += 1;
        if is_non_printable(ch) {
            flagged += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        flagged as f64 / total as f64
    }
}

/// Case-insensitive suffix match against an extension allow-list.
pub fn has_text_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    let lowered = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lowered.ends_with(&ext.as_ref().to_lowercase()))
}

/// Classify a file. Returns the offending non-printable ratio when the file
/// is not text, `None` when it is.
///
/// A known extension is accepted without scanning the content.
pub fn non_text_ratio<S: AsRef<str>>(
    file_name: &str,
    text: &str,
    extensions: &[S],
    max_non_printable_ratio: f64,
) -> Option<f64> {
    if has_text_extension(file_name, extensions) {
        return None;
    }
    let ratio = non_printable_ratio(text);
    (ratio >= max_non_printable_ratio).then_some(ratio)
}

/// Decide whether a file is text.
pub fn is_text_file<S: AsRef<str>>(
    file_name: &str,
    text: &str,
    extensions: &[S],
    max_non_printable_ratio: f64,
) -> bool {
    non_text_ratio(file_name, text, extensions, max_non_printable_ratio).is_none()
}
