//! Agreement and sentence finishing.

use folnl_vocabulary::capitalize;

/// Renders a one-place predicate phrase after its subject.
///
/// Phrases starting with "is " take "are" for plural subjects.
#[must_use]
pub fn unary(subject: &str, phrase: &str, plural: bool) -> String {
    if let Some(rest) = phrase.strip_prefix("is ") {
        return format!("{subject} {} {rest}", copula(plural));
    }
    format!("{subject} {phrase}")
}

/// Conjugates a two-place predicate phrase for its subject.
#[must_use]
pub fn binary_verb(phrase: &str, plural: bool) -> String {
    if let Some(rest) = phrase.strip_prefix("is ") {
        return format!("{} {rest}", copula(plural));
    }
    if plural {
        return plural_verb(phrase);
    }
    phrase.to_string()
}

/// "are" or "is".
#[must_use]
pub const fn copula(plural: bool) -> &'static str {
    if plural { "are" } else { "is" }
}

/// Turns a third-person singular verb into its plural form.
///
/// "carries" → "carry", "watches" → "watch", "loves" → "love",
/// "kiss" stays "kiss".
#[must_use]
pub fn plural_verb(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for sibilant in ["ses", "xes", "zes", "ches", "shes"] {
        if verb.ends_with(sibilant) {
            return verb[..verb.len() - 2].to_string();
        }
    }
    if verb.ends_with("es") || (verb.ends_with('s') && !verb.ends_with("ss")) {
        return verb[..verb.len() - 1].to_string();
    }
    verb.to_string()
}

/// Renders a constant term: all-lowercase names are capitalized, anything
/// else is kept as written.
#[must_use]
pub fn constant(term: &str) -> String {
    if is_lowercase_word(term) {
        capitalize(term)
    } else {
        term.to_string()
    }
}

/// True if `text` has at least one cased character and no upper-case ones.
#[must_use]
pub fn is_lowercase_word(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// Capitalizes the first letter and ensures a closing full stop.
#[must_use]
pub fn finish_sentence(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    let mut sentence = if text.starts_with(char::is_uppercase) {
        text.to_string()
    } else {
        capitalize(text)
    };
    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    sentence
}
