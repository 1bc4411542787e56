//! Quote-aware query tokenizer.
//!
//! Whitespace separates tokens except between a pair of `"` characters. The
//! quotes themselves are dropped and the token remembers that it was quoted.
//! An unterminated quote runs to the end of the input.

/// A single query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// True when any `"` toggled while this token was being read.
    pub quoted: bool,
}

impl Token {
    fn new(text: String, quoted: bool) -> Self {
        Self { text, quoted }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InQuotes,
}

/// Split `input` into tokens.
///
/// Empty tokens (a bare `""`) are dropped.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state = State::Normal;
    let mut current = String::new();
    let mut quoted = false;

    for ch in input.chars() {
        match (state, ch) {
            (State::Normal, '"') => {
                state = State::InQuotes;
                quoted = true;
            }
            (State::InQuotes, '"') => state = State::Normal,
            (State::Normal, c) if c.is_whitespace() => {
                flush(&mut tokens, &mut current, &mut quoted);
            }
            (_, c) => current.push(c),
        }
    }
    flush(&mut tokens, &mut current, &mut quoted);

    tokens
}

fn flush(tokens: &mut Vec<Token>, current: &mut String, quoted: &mut bool) {
    if !current.is_empty() {
        tokens.push(Token::new(std::mem::take(current), *quoted));
    }
    *quoted = false;
}
