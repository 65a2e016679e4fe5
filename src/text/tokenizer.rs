use once_cell::sync::Lazy;
use regex::Regex;

/// Word runs, whitespace runs and everything else. The three alternatives are
/// mutually exclusive and together cover every character.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+|\s+|[^\p{L}\p{M}\p{N}\s]+").expect("token regex")
});

/// Kind of a token run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, marks and numbers of any script
    Word,
    /// Punctuation and other symbols
    Symbol,
    /// Whitespace
    Space,
}

/// A single run of the input, borrowed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset into the tokenized text
    pub start: usize,
    /// Character offset into the tokenized text
    pub char_start: usize,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}\p{N}]").expect("word regex"));

fn kind_of(run: &str) -> TokenKind {
    if WORD_RE.is_match(run) {
        TokenKind::Word
    } else if run.starts_with(char::is_whitespace) {
        TokenKind::Space
    } else {
        TokenKind::Symbol
    }
}

/// Split text into an ordered sequence of tokens.
///
/// Tokenization is lossless: concatenating the `text` of every token gives
/// back the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut char_start = 0usize;

    for m in TOKEN_RE.find_iter(text) {
        let run = m.as_str();
        tokens.push(Token {
            kind: kind_of(run),
            text: run,
            start: m.start(),
            char_start,
        });
        char_start += run.chars().count();
    }

    tokens
}
