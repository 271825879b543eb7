//! ASCII spellings of logic symbols for keyboard entry.
//!
//! `forall`, `exists`, `~`, `&`, `|`, `->` and `<->` are rewritten to
//! `∀ ∃ ¬ ∧ ∨ → ↔` before a formula reaches the converter.

use folnl_logic::reader::symbols;

/// Operator spellings, longest first so `<->` wins over `->`.
const OPERATORS: &[(&str, char)] = &[
    ("<->", symbols::IFF),
    ("->", symbols::IMPLIES),
    ("~", symbols::NOT),
    ("&", symbols::AND),
    ("|", symbols::OR),
];

/// Quantifier keywords, matched as whole words.
const KEYWORDS: &[(&str, char)] = &[("forall", symbols::FORALL), ("exists", symbols::EXISTS)];

/// Rewrites ASCII spellings to logic symbols.
///
/// A quantifier keyword also swallows the whitespace after it:
/// `forall x Human(x)` becomes `∀x Human(x)`.
#[must_use]
pub fn to_symbols(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    'scan: while i < chars.len() {
        for &(spelling, symbol) in OPERATORS {
            if let Some(len) = match_at(&chars[i..], spelling) {
                out.push(symbol);
                i += len;
                continue 'scan;
            }
        }

        let word_start = i == 0 || !chars[i - 1].is_alphanumeric();
        if word_start {
            for &(keyword, symbol) in KEYWORDS {
                let Some(len) = match_at(&chars[i..], keyword) else {
                    continue;
                };
                if chars.get(i + len).is_some_and(|c| c.is_alphanumeric()) {
                    continue;
                }
                out.push(symbol);
                i += len;
                while chars.get(i).is_some_and(|c| c.is_whitespace()) {
                    i += 1;
                }
                continue 'scan;
            }
        }

        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Guesses whether a REPL line is a formula rather than a sentence.
///
/// True when the line holds a logic symbol or an operator spelling, starts
/// with `forall`, or opens with a predicate application such as
/// `Human(socrates)`. `exists` alone is not enough since sentences use it
/// too ("there exists ...").
#[must_use]
pub fn looks_like_formula(line: &str) -> bool {
    let line = line.trim_start();
    line.chars().any(symbols::is_logic_symbol)
        || OPERATORS.iter().any(|(spelling, _)| line.contains(spelling))
        || line
            .strip_prefix("forall")
            .is_some_and(|rest| !rest.starts_with(char::is_alphanumeric))
        || starts_with_application(line.trim_start_matches('('))
}

/// `Name(` with an upper-case first letter.
fn starts_with_application(line: &str) -> bool {
    if !line.starts_with(char::is_uppercase) {
        return false;
    }
    let rest = line.trim_start_matches(char::is_alphanumeric);
    rest.starts_with('(')
}

fn match_at(chars: &[char], pattern: &str) -> Option<usize> {
    let mut len = 0;
    for expected in pattern.chars() {
        if chars.get(len) != Some(&expected) {
            return None;
        }
        len += 1;
    }
    Some(len)
}
