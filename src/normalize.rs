use unicode_normalization::UnicodeNormalization;

/// Fold full-width digits/letters and compatibility characters (era squares
/// such as ㍻) to their standard forms. NFKC, so applying it twice is a no-op.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect()
}
