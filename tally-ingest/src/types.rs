/// A trimmed, non-empty line that passed the line selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub text: &'a str,
}

/// A `$1,234.56`-style token found on a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountToken<'a> {
    /// The `$...` text, without any leading `-` or `(`
    pub text: &'a str,
    /// Byte offset of `text` within the line
    pub start: usize,
    /// Unsigned numeric value
    pub value: f64,
    /// True when the token was written as `-$x` or `($x)`
    pub negative: bool,
}

/// Raw fields recovered from one line, before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields<'a> {
    pub date_token: &'a str,
    pub description: &'a str,
    /// The first amount token on the line
    pub amount: AmountToken<'a>,
}
