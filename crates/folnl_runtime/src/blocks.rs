//! Splitting answers into practice blocks and joining them back.
//!
//! Formulas split into quantifier heads (`∀x`), single symbols and
//! identifiers. Sentences split into words, numbers and punctuation marks.

use folnl_logic::reader::symbols;
use folnl_translator::Direction;

/// Symbols that always form a block of their own in a formula.
const FORMULA_PUNCTUATION: &[char] = &[
    symbols::NOT,
    symbols::AND,
    symbols::OR,
    symbols::IMPLIES,
    symbols::IFF,
    '(',
    ')',
    ',',
    ';',
];

/// Binary connectives, spaced on both sides when assembled.
const BINARY_CONNECTIVES: &[&str] = &["∧", "∨", "→", "↔"];

/// Sentence punctuation attached to the preceding block.
const CLOSING_PUNCTUATION: &[&str] = &[".", ",", ";", ":", "?", "!", ")"];

/// Splits the answer for `direction` into blocks.
///
/// The answer of a sentence-to-formula exercise is a formula and vice versa.
#[must_use]
pub fn split(answer: &str, direction: Direction) -> Vec<String> {
    match direction {
        Direction::NlToFol => split_formula(answer),
        Direction::FolToNl => split_sentence(answer),
    }
}

/// Joins blocks back into text for `direction`.
#[must_use]
pub fn assemble(blocks: &[String], direction: Direction) -> String {
    match direction {
        Direction::NlToFol => assemble_formula(blocks),
        Direction::FolToNl => assemble_sentence(blocks),
    }
}

/// Splits a formula into blocks.
#[must_use]
pub fn split_formula(formula: &str) -> Vec<String> {
    let chars: Vec<char> = formula.chars().collect();
    let mut blocks = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            flush(&mut buffer, &mut blocks);
            i += 1;
        } else if c == symbols::FORALL || c == symbols::EXISTS {
            flush(&mut buffer, &mut blocks);
            let mut head = String::from(c);
            i += 1;
            while i < chars.len() && chars[i].is_lowercase() {
                head.push(chars[i]);
                i += 1;
            }
            blocks.push(head);
        } else if FORMULA_PUNCTUATION.contains(&c) {
            flush(&mut buffer, &mut blocks);
            blocks.push(c.to_string());
            i += 1;
        } else {
            buffer.push(c);
            i += 1;
        }
    }
    flush(&mut buffer, &mut blocks);
    blocks
}

fn flush(buffer: &mut String, blocks: &mut Vec<String>) {
    if !buffer.is_empty() {
        blocks.push(std::mem::take(buffer));
    }
}

/// Splits a sentence into ASCII words (apostrophes included), digit runs
/// and single punctuation marks. Other word characters are dropped.
#[must_use]
pub fn split_sentence(sentence: &str) -> Vec<String> {
    let chars: Vec<char> = sentence.chars().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;
        if c.is_ascii_alphabetic() || c == '\'' {
            while i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '\'') {
                i += 1;
            }
        } else if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        } else if !(c.is_alphanumeric() || c == '_' || c.is_whitespace()) {
            i += 1;
        } else {
            i += 1;
            continue;
        }
        blocks.push(chars[start..i].iter().collect());
    }
    blocks
}

/// Joins formula blocks with conventional spacing.
#[must_use]
pub fn assemble_formula(blocks: &[String]) -> String {
    let mut result = String::new();
    for block in blocks {
        let block = block.as_str();
        if result.is_empty() {
            result.push_str(block);
            continue;
        }
        let last = result.chars().last();
        match block {
            ")" | "," | ";" => {
                trim_end(&mut result);
                result.push_str(block);
            }
            "(" => result.push('('),
            "¬" => {
                if !matches!(last, Some('(' | ' ')) {
                    trim_end(&mut result);
                    result.push(' ');
                }
                result.push('¬');
            }
            _ if BINARY_CONNECTIVES.contains(&block) => {
                trim_end(&mut result);
                result.push(' ');
                result.push_str(block);
                result.push(' ');
            }
            _ => {
                if !matches!(last, Some('(' | '¬' | ' ')) {
                    result.push(' ');
                }
                result.push_str(block);
            }
        }
    }

    result
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(" (", "(")
        .replace(" )", ")")
        .replace(" ,", ",")
}

/// Joins sentence blocks with single spaces, attaching closing punctuation.
#[must_use]
pub fn assemble_sentence(blocks: &[String]) -> String {
    let mut result = String::new();
    for block in blocks {
        if result.is_empty() {
            result.push_str(block);
        } else if CLOSING_PUNCTUATION.contains(&block.as_str()) {
            trim_end(&mut result);
            result.push_str(block);
        } else {
            result.push(' ');
            result.push_str(block);
        }
    }
    result.trim().to_string()
}

fn trim_end(text: &mut String) {
    let len = text.trim_end().len();
    text.truncate(len);
}
