use std::cmp::Ordering;

/// Lexicographic comparison on ASCII-lowercased bytes.
///
/// A strict prefix sorts first. Bytes outside ASCII compare as-is.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let lhs = a.bytes().map(|c| c.to_ascii_lowercase());
    let rhs = b.bytes().map(|c| c.to_ascii_lowercase());
    lhs.cmp(rhs)
}

pub fn eq_ignore_ascii_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
