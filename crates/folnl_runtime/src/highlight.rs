//! ANSI colouring of REPL input.

use std::borrow::Cow;

use folnl_logic::reader::symbols;

const RESET: &str = "\x1b[0m";
const COMMAND: &str = "\x1b[35m";
const QUANTIFIER: &str = "\x1b[1;36m";
const CONNECTIVE: &str = "\x1b[1;33m";
const PAREN: &str = "\x1b[1m";
const PREDICATE: &str = "\x1b[32m";

fn paint(out: &mut String, style: &str, text: &str) {
    out.push_str(style);
    out.push_str(text);
    out.push_str(RESET);
}

/// Colours formulas, sentences and REPL commands for the line editor.
pub struct FormulaHighlighter;

impl FormulaHighlighter {
    /// Creates a highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `line` with ANSI colours; the visible text is unchanged.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _cursor: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut out = String::new();
        let mut rest = line;

        if line.starts_with(':') {
            let end = line.find(char::is_whitespace).unwrap_or(line.len());
            paint(&mut out, COMMAND, &line[..end]);
            rest = &line[end..];
        }

        let mut iter = rest.char_indices().peekable();
        while let Some((at, c)) = iter.next() {
            if c == symbols::FORALL || c == symbols::EXISTS {
                let mut end = at + c.len_utf8();
                if let Some(&(_, v)) = iter.peek().filter(|(_, v)| v.is_lowercase()) {
                    end += v.len_utf8();
                    iter.next();
                }
                paint(&mut out, QUANTIFIER, &rest[at..end]);
            } else if symbols::is_logic_symbol(c) {
                paint(&mut out, CONNECTIVE, &rest[at..at + c.len_utf8()]);
            } else if c == '(' || c == ')' {
                paint(&mut out, PAREN, &rest[at..=at]);
            } else if c.is_uppercase() {
                let mut end = at + c.len_utf8();
                while let Some(&(i, n)) = iter.peek() {
                    if !n.is_alphanumeric() {
                        break;
                    }
                    end = i + n.len_utf8();
                    iter.next();
                }
                let word = &rest[at..end];
                if matches!(iter.peek(), Some(&(_, '('))) {
                    paint(&mut out, PREDICATE, word);
                } else {
                    out.push_str(word);
                }
            } else {
                out.push(c);
            }
        }

        Cow::Owned(out)
    }
}

impl Default for FormulaHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
