//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and one implementation per comparison mode.
//! Every tokenizer is lossless: concatenating the token texts reproduces the
//! input exactly, which is what lets a diff over tokens reconstruct both sides.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{DiffConfig, DiffMode};

/// Kind of comparison unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single character or grapheme cluster
    Char,
    /// A maximal run of word characters
    Word,
    /// A maximal run of whitespace and punctuation
    Separator,
    /// A line including its terminator
    Line,
}

/// Represents a single comparison unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, borrowed from the input
    pub text: &'a str,

    /// Byte range of the token in the input
    pub span: Range<usize>,

    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, start: usize, kind: TokenKind) -> Self {
        Self {
            text,
            span: start..start + text.len(),
            kind,
        }
    }
}

/// Trait for tokenizers that split text into comparison units
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens covering every byte of it, in order
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Build the tokenizer matching a configuration
pub fn for_config(config: &DiffConfig) -> Box<dyn Tokenizer> {
    match config.mode {
        DiffMode::Char => Box::new(CharacterTokenizer::new().with_graphemes(config.graphemes)),
        DiffMode::Word => Box::new(WordTokenizer),
        DiffMode::Line => Box::new(LineTokenizer),
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Character-level tokenizer
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer {
    /// Split on extended grapheme clusters instead of code points
    pub graphemes: bool,
}

impl CharacterTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graphemes(mut self, graphemes: bool) -> Self {
        self.graphemes = graphemes;
        self
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        if self.graphemes {
            text.grapheme_indices(true)
                .map(|(pos, g)| Token::new(g, pos, TokenKind::Char))
                .collect()
        } else {
            text.char_indices()
                .map(|(pos, ch)| Token::new(&text[pos..pos + ch.len_utf8()], pos, TokenKind::Char))
                .collect()
        }
    }

    fn name(&self) -> &str {
        if self.graphemes {
            "grapheme"
        } else {
            "character"
        }
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Word tokenizer: alternating runs of word and non-word characters
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut current_start = 0;
        let mut current_word: Option<bool> = None;

        for (pos, ch) in text.char_indices() {
            let word = is_word_char(ch);
            match current_word {
                None => current_word = Some(word),
                Some(prev) if prev == word => {}
                Some(prev) => {
                    tokens.push(word_token(text, current_start, pos, prev));
                    current_start = pos;
                    current_word = Some(word);
                }
            }
        }

        if let Some(prev) = current_word {
            tokens.push(word_token(text, current_start, text.len(), prev));
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

fn word_token(text: &str, start: usize, end: usize, word: bool) -> Token<'_> {
    let kind = if word {
        TokenKind::Word
    } else {
        TokenKind::Separator
    };
    Token::new(&text[start..end], start, kind)
}

/// Line tokenizer. Each line keeps its `\n`; only the last may lack one.
#[derive(Debug, Clone, Default)]
pub struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut pos = 0;
        text.split_inclusive('\n')
            .map(|line| {
                let token = Token::new(line, pos, TokenKind::Line);
                pos += line.len();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "line"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_character_tokenizer() {
        let tokens = CharacterTokenizer::new().tokenize("abc");

        assert_eq!(texts(&tokens), vec!["a", "b", "c"]);
        assert_eq!(tokens[2].span, 2..3);
    }

    #[test]
    fn test_character_tokenizer_multibyte() {
        let tokens = CharacterTokenizer::new().tokenize("héllo");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].text, "é");
        assert_eq!(tokens[2].span, 3..4);
    }

    #[test]
    fn test_grapheme_tokenizer() {
        // "e" followed by a combining acute accent
        let text = "e\u{301}x";
        assert_eq!(CharacterTokenizer::new().tokenize(text).len(), 3);

        let tokens = CharacterTokenizer::new().with_graphemes(true).tokenize(text);
        assert_eq!(texts(&tokens), vec!["e\u{301}", "x"]);
    }

    #[test]
    fn test_word_tokenizer() {
        let tokens = WordTokenizer.tokenize("hello, big_world 42!");

        assert_eq!(texts(&tokens), vec!["hello", ", ", "big_world", " ", "42", "!"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Separator);
    }

    #[test]
    fn test_word_tokenizer_leading_separator() {
        let tokens = WordTokenizer.tokenize("  über");
        assert_eq!(texts(&tokens), vec!["  ", "über"]);
    }

    #[test]
    fn test_line_tokenizer() {
        let tokens = LineTokenizer.tokenize("a\r\nb\n\nc");

        assert_eq!(texts(&tokens), vec!["a\r\n", "b\n", "\n", "c"]);
        assert_eq!(tokens[3].span, 6..7);
    }

    #[test]
    fn test_line_tokenizer_trailing_newline() {
        let tokens = LineTokenizer.tokenize("a\nb\n");
        assert_eq!(texts(&tokens), vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(CharacterTokenizer::new().tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(LineTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_lossless() {
        let text = "fn main() {\n    println!(\"héllo\");\n}";
        let tokenizers: Vec<Box<dyn Tokenizer>> = vec![
            Box::new(CharacterTokenizer::new()),
            Box::new(CharacterTokenizer::new().with_graphemes(true)),
            Box::new(WordTokenizer),
            Box::new(LineTokenizer),
        ];

        for tokenizer in &tokenizers {
            let joined: String = tokenizer.tokenize(text).iter().map(|t| t.text).collect();
            assert_eq!(joined, text, "tokenizer {} lost text", tokenizer.name());
        }
    }
}
