//! Sentence tokenization.
//!
//! Converts a raw sentence into a stream of tokens, matching multi-word
//! vocabulary phrases before single words. The tokenizer never fails:
//! characters it cannot place are skipped.

use folnl_vocabulary::{Lexeme, Vocabulary, capitalize};
use tracing::trace;

use crate::token::{Token, TokenKind};

/// A multi-word phrase prepared for matching against a character buffer.
#[derive(Debug)]
struct Phrase {
    chars: Vec<char>,
    text: String,
    lexeme: Lexeme,
}

/// Tokenizes sentences against a vocabulary.
#[derive(Debug)]
pub struct Tokenizer<'v> {
    vocabulary: &'v Vocabulary,
    /// Multi-word phrases, longest first.
    phrases: Vec<Phrase>,
}

impl<'v> Tokenizer<'v> {
    /// Creates a tokenizer for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        let phrases = vocabulary
            .multiword_entries()
            .iter()
            .map(|entry| Phrase {
                chars: entry.phrase.chars().collect(),
                text: entry.phrase.clone(),
                lexeme: entry.lexeme.clone(),
            })
            .collect();
        Self {
            vocabulary,
            phrases,
        }
    }

    /// Tokenizes a sentence.
    ///
    /// - Lowercases and trims the input
    /// - Prefers the longest multi-word phrase that ends on a word boundary
    /// - Drops stoplist words other than the copula
    /// - Emits structural tokens for `( ) , .` and skips other punctuation
    ///
    /// The result always ends with [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let text: Vec<char> = input.to_lowercase().trim().chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            // Whitespace
            while pos < text.len() && text[pos].is_whitespace() {
                pos += 1;
            }
            if pos >= text.len() {
                break;
            }

            if let Some((token, end)) = self.match_phrase(&text, pos) {
                tokens.push(token);
                pos = end;
                continue;
            }

            let start = pos;
            while pos < text.len() && text[pos].is_alphabetic() {
                pos += 1;
            }
            if pos > start {
                let word: String = text[start..pos].iter().collect();
                if let Some(token) = self.classify_word(&word) {
                    tokens.push(token);
                }
                continue;
            }

            if let Some(kind) = TokenKind::structural(text[pos]) {
                tokens.push(Token::new(kind, text[pos].to_string()));
            }
            pos += 1;
        }

        tokens.push(Token::eof());
        trace!(input, tokens = ?tokens, "tokenized sentence");
        tokens
    }

    /// Finds the longest phrase at `pos` that is not followed by a letter.
    fn match_phrase(&self, text: &[char], pos: usize) -> Option<(Token, usize)> {
        let rest = &text[pos..];
        self.phrases.iter().find_map(|phrase| {
            if !rest.starts_with(&phrase.chars) {
                return None;
            }
            let end = pos + phrase.chars.len();
            if text.get(end).is_some_and(|c| c.is_alphabetic()) {
                return None;
            }
            Some((lexeme_token(&phrase.lexeme, &phrase.text)?, end))
        })
    }

    fn classify_word(&self, word: &str) -> Option<Token> {
        lexeme_token(&self.vocabulary.classify(word), word)
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

/// Converts a classified lexeme to a token, or `None` for dropped words.
fn lexeme_token(lexeme: &Lexeme, surface: &str) -> Option<Token> {
    let token = match lexeme {
        Lexeme::Quantifier(q) => Token::new((*q).into(), surface),
        Lexeme::Connective(c) => Token::new((*c).into(), surface),
        Lexeme::Copula => Token::new(TokenKind::Is, surface),
        Lexeme::Predicate(name) => Token::new(TokenKind::Noun, name.as_str()),
        Lexeme::OpenPredicate(raw) => Token::new(TokenKind::Noun, capitalize(raw)),
        Lexeme::Constant(name) => Token::new(TokenKind::Constant, name.as_str()),
        Lexeme::Variable(v) => Token::new(TokenKind::Variable, v.to_string()),
        Lexeme::Auxiliary => return None,
    };
    Some(token)
}

/// Tokenizes a sentence with the standard vocabulary.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(input)
}
