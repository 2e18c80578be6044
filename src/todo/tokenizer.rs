//! Whitespace tokenizer with source offsets
//!
//! Splits one line on whitespace runs while recording where each token
//! begins, so the parser can slice the untouched remainder of the line
//! when an instruction's last argument is "rest of line".

/// One whitespace-delimited token of a todo line.
///
/// Borrows the line it was produced from; `start` is the byte offset of
/// the token's first character in that line and is meaningless against
/// any other string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub value: &'a str,
    pub start: usize,
}

impl<'a> Token<'a> {
    /// The remainder of `line` starting at this token, verbatim.
    ///
    /// `line` must be the string this token was tokenized from.
    pub fn rest_of<'b>(&self, line: &'b str) -> &'b str {
        &line[self.start..]
    }
}

/// Split a line into whitespace-delimited tokens.
///
/// Whitespace is discarded; leading/trailing whitespace produces no empty
/// tokens. Total over any input: an empty or all-whitespace line yields an
/// empty vec.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (index, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    value: &line[token_start..index],
                    start: token_start,
                });
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(token_start) = start {
        tokens.push(Token {
            value: &line[token_start..],
            start: token_start,
        });
    }

    tokens
}
