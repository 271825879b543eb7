//! Parser from natural-language tokens to formula text.
//!
//! A recursive-descent parser with one token of lookahead:
//!
//! ```text
//! statement   := { NOT } ( quantified | conditional | compound [THEN compound] )
//! quantified  := quantifier [VARIABLE] [IS] NOUN [[IS | THEN] NOUN]
//! conditional := IF compound [THEN] compound
//! compound    := atomic { (AND | OR | IFF) atomic }
//! atomic      := CONSTANT [IS] [NOUN [CONSTANT]]
//!              | NOUN [ "(" term { "," term } ")" ]
//! ```

use folnl_foundation::SyntaxError;
use folnl_vocabulary::{Quantifier, Vocabulary};
use tracing::debug;

use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Variable used when a quantified sentence names none.
const DEFAULT_VARIABLE: &str = "x";

type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Parser over a token sequence.
pub struct Parser {
    /// Tokens being parsed.
    tokens: Vec<Token>,
    /// Index of the current token.
    position: usize,
    /// Returned once the tokens run out.
    eof: Token,
}

impl Parser {
    /// Creates a parser over the given tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            eof: Token::eof(),
        }
    }

    /// Tokenizes `input` against `vocabulary` and creates a parser.
    #[must_use]
    pub fn from_text(input: &str, vocabulary: &Vocabulary) -> Self {
        Self::new(Tokenizer::new(vocabulary).tokenize(input))
    }

    /// Parses one complete statement, allowing trailing full stops.
    ///
    /// # Errors
    /// Returns an error if the tokens do not form a statement or tokens remain
    /// after it.
    pub fn parse(&mut self) -> ParseResult<String> {
        let formula = self.parse_statement()?;
        while self.check(TokenKind::Dot) {
            self.advance();
        }
        if !self.current().is_eof() {
            return Err(SyntaxError::TrailingInput {
                found: self.current().kind.to_string(),
            });
        }
        debug!(%formula, "parsed statement");
        Ok(formula)
    }

    fn parse_statement(&mut self) -> ParseResult<String> {
        // Leading NOTs are counted rather than recursed into, so long runs
        // cannot exhaust the stack.
        let mut negations = 0;
        while self.check(TokenKind::Not) {
            self.advance();
            negations += 1;
        }
        let body = self.parse_positive_statement()?;
        if negations == 0 {
            return Ok(body);
        }

        let mut formula = String::with_capacity(body.len() + negations * 4);
        for _ in 0..negations {
            formula.push_str("¬(");
        }
        formula.push_str(&body);
        formula.extend(std::iter::repeat_n(')', negations));
        Ok(formula)
    }

    fn parse_positive_statement(&mut self) -> ParseResult<String> {
        let kind = self.current().kind;
        if let Some(quantifier) = kind.quantifier() {
            return self.parse_quantified(quantifier);
        }
        match kind {
            TokenKind::If => self.parse_conditional(),
            _ => {
                let left = self.parse_compound()?;
                // "A implies B"
                if self.check(TokenKind::Then) {
                    self.advance();
                    let right = self.parse_compound()?;
                    return Ok(format!("({left} → {right})"));
                }
                Ok(left)
            }
        }
    }

    fn parse_quantified(&mut self, quantifier: Quantifier) -> ParseResult<String> {
        self.advance();

        let mut variable = DEFAULT_VARIABLE.to_string();
        if self.check(TokenKind::Variable) {
            variable = self.take_value();
        }

        if self.check(TokenKind::Is) {
            self.advance();
        }

        if !self.check(TokenKind::Noun) {
            return Err(SyntaxError::MissingPredicate);
        }
        let subject = self.take_value();

        let prefix = match quantifier {
            Quantifier::Every | Quantifier::All => format!("∀{variable}"),
            Quantifier::Some | Quantifier::Exists => format!("∃{variable}"),
            Quantifier::No => format!("¬∃{variable}"),
        };

        let mut consequent = None;
        if matches!(self.current().kind, TokenKind::Is | TokenKind::Then) {
            self.advance();
            if self.check(TokenKind::Noun) {
                consequent = Some(self.take_value());
            }
        } else if self.check(TokenKind::Noun) {
            // "All birds can fly": verb phrase directly after the subject
            consequent = Some(self.take_value());
        }

        Ok(match consequent {
            Some(predicate) if quantifier.is_universal() => {
                format!("{prefix}({subject}({variable}) → {predicate}({variable}))")
            }
            Some(predicate) => {
                format!("{prefix}({subject}({variable}) ∧ {predicate}({variable}))")
            }
            None => format!("{prefix}({subject}({variable}))"),
        })
    }

    fn parse_conditional(&mut self) -> ParseResult<String> {
        self.expect(TokenKind::If)?;
        let antecedent = self.parse_compound()?;
        if self.check(TokenKind::Then) {
            self.advance();
        }
        let consequent = self.parse_compound()?;
        Ok(format!("({antecedent} → {consequent})"))
    }

    fn parse_compound(&mut self) -> ParseResult<String> {
        let mut left = self.parse_atomic()?;
        loop {
            let kind = self.current().kind;
            let symbol = match kind {
                TokenKind::And => '∧',
                TokenKind::Or => '∨',
                TokenKind::Iff => '↔',
                _ => break,
            };
            self.advance();
            let right = self.parse_atomic()?;
            left = format!("({left} {symbol} {right})");
        }
        Ok(left)
    }

    fn parse_atomic(&mut self) -> ParseResult<String> {
        let kind = self.current().kind;
        match kind {
            TokenKind::Constant => {
                let constant = self.take_value();
                if self.check(TokenKind::Is) {
                    self.advance();
                }
                if !self.check(TokenKind::Noun) {
                    return Ok(constant);
                }
                let predicate = self.take_value();
                if self.check(TokenKind::Constant) {
                    let object = self.take_value();
                    return Ok(format!("{predicate}({constant}, {object})"));
                }
                Ok(format!("{predicate}({constant})"))
            }
            TokenKind::Noun => {
                let predicate = self.take_value();
                if !self.check(TokenKind::LParen) {
                    return Ok(predicate);
                }
                self.advance();
                let args = self.parse_arguments()?;
                Ok(format!("{predicate}({})", args.join(", ")))
            }
            found => Err(SyntaxError::UnexpectedToken {
                expected: None,
                found: found.to_string(),
            }),
        }
    }

    /// Parses terms up to and including the closing parenthesis.
    fn parse_arguments(&mut self) -> ParseResult<Vec<String>> {
        let mut args = Vec::new();
        loop {
            let kind = self.current().kind;
            match kind {
                TokenKind::RParen => {
                    self.advance();
                    return Ok(args);
                }
                TokenKind::Constant | TokenKind::Variable => args.push(self.take_value()),
                TokenKind::Comma => self.advance(),
                TokenKind::Eof => return Err(SyntaxError::UnterminatedArgumentList),
                found => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: Some(TokenKind::RParen.to_string()),
                        found: found.to_string(),
                    });
                }
            }
        }
    }

    /// Returns the current token.
    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Consumes the current token and returns its value.
    fn take_value(&mut self) -> String {
        let value = self.current().value.clone();
        self.advance();
        value
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if !self.check(kind) {
            return Err(SyntaxError::UnexpectedToken {
                expected: Some(kind.to_string()),
                found: self.current().kind.to_string(),
            });
        }
        self.advance();
        Ok(())
    }
}

/// Parses a sentence with the standard vocabulary.
///
/// # Errors
/// Returns an error if the sentence does not fit the grammar.
pub fn parse_natural_language(input: &str) -> ParseResult<String> {
    Parser::from_text(input, Vocabulary::standard()).parse()
}
