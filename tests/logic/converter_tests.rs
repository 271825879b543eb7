//! Converter integration tests.
//!
//! Tests for rendering complete formulas as sentences.

use folnl_foundation::ConversionError;
use folnl_logic::{Converter, convert_fol_to_natural_language};
use folnl_vocabulary::Vocabulary;
use proptest::prelude::*;

fn convert(formula: &str) -> Result<String, ConversionError> {
    convert_fol_to_natural_language(formula)
}

#[test]
fn convert_negated_fact() {
    assert_eq!(
        convert("¬Human(socrates)").unwrap(),
        "It is not the case that Socrates is human."
    );
}

#[test]
fn convert_plural_agreement_in_quantified_body() {
    assert_eq!(
        convert("∀x(Bird(x) → CanFly(x))").unwrap(),
        "For every individual, if they are a bird, then they can fly."
    );
    assert_eq!(
        convert("∃x(Teaches(x, plato))").unwrap(),
        "There exists someone such that they teach Plato."
    );
    assert_eq!(
        convert("∀x(ParentOf(x, mary))").unwrap(),
        "For every individual, they are the parent of Mary."
    );
}

#[test]
fn convert_nested_quantifiers() {
    assert_eq!(
        convert("∀x(∃y(Loves(x, y)))").unwrap(),
        "For every individual, there exists someone such that they love them."
    );
}

#[test]
fn convert_unparenthesized_quantifier_bodies() {
    assert_eq!(
        convert("∀x ∃y Loves(x, y)").unwrap(),
        "For every individual, there exists someone such that they love them."
    );
}

#[test]
fn convert_negated_operand() {
    assert_eq!(
        convert("(¬Wise(bob) ∧ Happy(bob))").unwrap(),
        "It is not the case that Bob is wise and Bob is happy."
    );
}

#[test]
fn convert_keeps_written_case_of_constants() {
    assert_eq!(convert("Loves(Alice, BOB)").unwrap(), "Alice loves BOB.");
}

#[test]
fn convert_tolerates_whitespace() {
    assert_eq!(
        convert("  Human( socrates )  ").unwrap(),
        "Socrates is human."
    );
    assert_eq!(
        convert("( Human(plato)  ∧  Wise(plato) )").unwrap(),
        "Plato is human and Plato is wise."
    );
}

#[test]
fn convert_empty_argument_list() {
    assert_eq!(convert("Happy()").unwrap(), "Is happy.");
}

#[test]
fn convert_with_custom_vocabulary() {
    let vocab = Vocabulary::builder().phrase("Owns", "owns").build();

    assert_eq!(
        Converter::new("∀x(Owns(x, alice))", &vocab).convert().unwrap(),
        "For every individual, they own Alice."
    );
    // Phrases missing from the vocabulary fall back to the lowercase name
    assert_eq!(
        Converter::new("Human(plato)", &vocab).convert().unwrap(),
        "Plato human."
    );
}

#[test]
fn convert_error_positions() {
    assert_eq!(
        convert("∀ x(Human(x))"),
        Err(ConversionError::ExpectedVariable { position: 1 })
    );
    assert_eq!(
        convert("Human(socrates) extra"),
        Err(ConversionError::TrailingCharacters { position: 16 })
    );
    assert_eq!(
        convert("∀x(Human(x)) ∧ Mortal(x)"),
        Err(ConversionError::TrailingCharacters { position: 13 })
    );
    assert_eq!(
        convert("(Human(plato)"),
        Err(ConversionError::UnmatchedParenthesis {
            expected: ')',
            position: 13,
        })
    );
    assert_eq!(
        convert("123"),
        Err(ConversionError::ExpectedIdentifier { position: 0 })
    );
}

#[test]
fn convert_error_messages() {
    assert_eq!(convert("").unwrap_err().to_string(), "empty formula");
    assert_eq!(convert("(Human(x)").unwrap_err().to_string(), "expected ')'");
    assert_eq!(
        convert("Loves(a, b").unwrap_err().to_string(),
        "arguments list not terminated"
    );
    assert_eq!(
        convert("(Human(x) →").unwrap_err().to_string(),
        "unexpected end of subformula"
    );
}

proptest! {
    #[test]
    fn convert_never_panics(input in "\\PC{0,48}") {
        let _ = convert(&input);
    }

    #[test]
    fn convert_symbol_soup_never_panics(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "∀x", "∃y", "¬", "∧", "∨", "→", "↔", "(", ")", ",", " ",
                "Human", "Loves", "x", "y", "alice",
            ]),
            0..20,
        )
    ) {
        let _ = convert(&parts.concat());
    }

    #[test]
    fn facts_render_as_sentences(
        predicate in prop::sample::select(vec!["Human", "Wise", "Happy", "Student"]),
        name in "[a-z]{2,8}",
    ) {
        let sentence = convert(&format!("{predicate}({name})")).unwrap();
        prop_assert!(sentence.ends_with('.'));
        prop_assert!(sentence.starts_with(char::is_uppercase));
    }
}
