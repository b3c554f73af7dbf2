/// Splits a raw line into word tokens, order preserved, never empty.
pub trait Tokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Runs of ASCII whitespace (including vertical tab), `.` and `,`
/// separate words. Leading and trailing separators produce no tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeparatorTokenizer;

impl SeparatorTokenizer {
    pub fn is_separator(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '.' | ',')
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split(Self::is_separator)
            .filter(|token| !token.is_empty())
            .collect()
    }
}
