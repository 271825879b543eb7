//! Recursive-descent renderer from formulas to English.
//!
//! ```text
//! formula    := { "¬" } ( "∀" var [body] | "∃" var [body]
//!             | "(" compound ")" | atomic )
//! body       := "(" compound ")" | formula
//! compound   := subformula [ ("∧" | "∨" | "→" | "↔") subformula ]
//! subformula := formula
//! atomic     := identifier [ "(" term { "," term } ")" ]
//! ```

use folnl_foundation::ConversionError;
use folnl_vocabulary::Vocabulary;
use tracing::debug;

use crate::inflect;
use crate::pronouns::{PronounForms, Role};
use crate::reader::{FormulaReader, symbols};
use crate::scope::{BindingScopes, Scoped};

type ConvertResult<T> = std::result::Result<T, ConversionError>;

const UNIVERSAL_INTRO: &str = "For every individual";
const EXISTENTIAL_INTRO: &str = "there exists someone";
const NEGATION_INTRO: &str = "it is not the case that ";

/// Deepest nesting of parentheses and quantifiers accepted.
pub const MAX_NESTING: usize = 128;

/// Converts one formula to a sentence.
pub struct Converter<'v> {
    vocabulary: &'v Vocabulary,
    reader: FormulaReader,
    scopes: BindingScopes,
    depth: usize,
}

impl Scoped for Converter<'_> {
    fn scopes_mut(&mut self) -> &mut BindingScopes {
        &mut self.scopes
    }
}

impl<'v> Converter<'v> {
    /// Creates a converter for `formula`.
    #[must_use]
    pub fn new(formula: &str, vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            reader: FormulaReader::new(formula),
            scopes: BindingScopes::new(),
            depth: 0,
        }
    }

    /// Renders the whole formula as one sentence.
    ///
    /// # Errors
    /// Returns an error if the formula is empty, malformed, or followed by
    /// unread characters.
    pub fn convert(&mut self) -> ConvertResult<String> {
        if self.reader.is_empty() {
            return Err(ConversionError::EmptyFormula);
        }
        let text = self.formula()?;
        self.reader.skip_whitespace();
        if !self.reader.at_end() {
            return Err(ConversionError::TrailingCharacters {
                position: self.reader.position(),
            });
        }
        let sentence = inflect::finish_sentence(&text);
        debug!(%sentence, "converted formula");
        Ok(sentence)
    }

    fn formula(&mut self) -> ConvertResult<String> {
        let mut negations = 0;
        let c = loop {
            self.reader.skip_whitespace();
            match self.reader.peek() {
                None => return Err(ConversionError::UnexpectedEndOfFormula),
                Some(symbols::NOT) => {
                    self.reader.bump();
                    negations += 1;
                }
                Some(c) => break c,
            }
        };

        let body = match c {
            symbols::FORALL => self.nested(|this| this.quantified(true))?,
            symbols::EXISTS => self.nested(|this| this.quantified(false))?,
            '(' => self.nested(Self::parenthesized)?,
            _ => self.atomic()?,
        };
        if negations == 0 {
            return Ok(body);
        }

        let mut text = NEGATION_INTRO.repeat(negations);
        text.push_str(&body);
        Ok(text)
    }

    /// Runs `rule` one nesting level deeper, failing past [`MAX_NESTING`].
    fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ConvertResult<T>,
    ) -> ConvertResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ConversionError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn quantified(&mut self, universal: bool) -> ConvertResult<String> {
        self.reader.bump();
        let variable = self.reader.variable()?;
        self.reader.skip_whitespace();

        let body = {
            let mut scoped = self.bind(variable, PronounForms::THEY);
            scoped.quantifier_body()?
        };

        Ok(match (universal, body) {
            (true, Some(body)) => format!("{UNIVERSAL_INTRO}, {body}"),
            (true, None) => UNIVERSAL_INTRO.to_string(),
            (false, Some(body)) => format!("{EXISTENTIAL_INTRO} such that {body}"),
            (false, None) => EXISTENTIAL_INTRO.to_string(),
        })
    }

    fn quantifier_body(&mut self) -> ConvertResult<Option<String>> {
        if self.reader.at('(') {
            return self.parenthesized().map(Some);
        }
        if self.reader.at_end() {
            return Ok(None);
        }
        self.formula().map(Some)
    }

    fn parenthesized(&mut self) -> ConvertResult<String> {
        self.reader.bump();
        let inner = self.compound()?;
        self.reader.expect(')')?;
        Ok(inner)
    }

    fn compound(&mut self) -> ConvertResult<String> {
        let left = self.subformula()?;
        self.reader.skip_whitespace();

        let connective = match self.reader.peek() {
            Some(c @ (symbols::AND | symbols::OR | symbols::IMPLIES | symbols::IFF)) => c,
            _ => return Ok(left),
        };
        self.reader.bump();
        let right = self.subformula()?;

        Ok(match connective {
            symbols::AND => format!("{left} and {right}"),
            symbols::OR => format!("{left} or {right}"),
            symbols::IMPLIES => format!("if {left}, then {right}"),
            _ => format!("{left} if and only if {right}"),
        })
    }

    fn subformula(&mut self) -> ConvertResult<String> {
        self.reader.skip_whitespace();
        if self.reader.at_end() {
            return Err(ConversionError::UnexpectedEndOfSubformula);
        }
        self.formula()
    }

    fn atomic(&mut self) -> ConvertResult<String> {
        let predicate = self.reader.identifier()?;
        let phrase = self
            .vocabulary
            .phrase_for(&predicate)
            .map_or_else(|| predicate.to_lowercase(), str::to_string);

        self.reader.skip_whitespace();
        if !self.reader.at('(') {
            return Ok(phrase);
        }
        self.reader.bump();
        let args = self.reader.arguments()?;

        Ok(match args.as_slice() {
            [subject] => {
                let (subject, plural) = self.term(subject, Role::Subject);
                inflect::unary(&subject, &phrase, plural)
            }
            [subject, object] => {
                let (subject, plural) = self.term(subject, Role::Subject);
                let (object, _) = self.term(object, Role::Object);
                format!("{subject} {} {object}", inflect::binary_verb(&phrase, plural))
            }
            _ => {
                let terms: Vec<String> = args
                    .iter()
                    .map(|arg| self.term(arg, Role::Subject).0)
                    .collect();
                format!("{phrase} {}", terms.join(", "))
            }
        })
    }

    /// Renders a term, returning it with its plurality.
    ///
    /// Bound variables become pronouns; unbound single letters stay literal.
    fn term(&self, term: &str, role: Role) -> (String, bool) {
        let term = term.trim();
        let mut chars = term.chars();
        match (chars.next(), chars.next()) {
            (None, _) => (String::new(), false),
            (Some(letter), None) if letter.is_lowercase() => match self.scopes.lookup(letter) {
                Some(forms) => (forms.form(role).to_string(), forms.plural),
                None => (term.to_string(), false),
            },
            _ => (inflect::constant(term), false),
        }
    }
}

/// Converts a formula with the standard vocabulary.
///
/// # Errors
/// Returns an error if the formula is empty or malformed.
pub fn convert_fol_to_natural_language(formula: &str) -> ConvertResult<String> {
    Converter::new(formula, Vocabulary::standard()).convert()
}
