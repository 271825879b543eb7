//! Parser integration tests.
//!
//! Tests for the complete sentence-to-formula pipeline.

use folnl_foundation::SyntaxError;
use folnl_parser::{Parser, Token, TokenKind, parse_natural_language};
use folnl_vocabulary::Vocabulary;
use proptest::prelude::*;

fn parse(input: &str) -> Result<String, SyntaxError> {
    parse_natural_language(input)
}

#[test]
fn parse_plural_universal() {
    assert_eq!(parse("All birds can fly").unwrap(), "∀x(Bird(x) → CanFly(x))");
    assert_eq!(
        parse("all humans are mortal").unwrap(),
        "∀x(Human(x) → Mortal(x))"
    );
}

#[test]
fn parse_quantifier_phrases() {
    assert_eq!(
        parse("for every x philosopher is wise").unwrap(),
        "∀x(Philosopher(x) → Wise(x))"
    );
    assert_eq!(
        parse("there exists y student").unwrap(),
        "∃y(Student(y))"
    );
}

#[test]
fn parse_existential_with_verb_phrase() {
    assert_eq!(parse("some bird flies").unwrap(), "∃x(Bird(x) ∧ CanFly(x))");
}

#[test]
fn parse_negated_statement() {
    assert_eq!(
        parse("not every student is wise").unwrap(),
        "¬(∀x(Student(x) → Wise(x)))"
    );
}

#[test]
fn parse_binary_facts() {
    assert_eq!(
        parse("John is the parent of Mary.").unwrap(),
        "ParentOf(john, mary)"
    );
    assert_eq!(
        parse("aristotle teaches plato").unwrap(),
        "Teaches(aristotle, plato)"
    );
}

#[test]
fn parse_conditional_without_then() {
    assert_eq!(
        parse("if plato is wise plato is happy").unwrap(),
        "(Wise(plato) → Happy(plato))"
    );
}

#[test]
fn parse_conditional_with_compound_antecedent() {
    assert_eq!(
        parse("if alice is happy and bob is happy then mary is happy").unwrap(),
        "((Happy(alice) ∧ Happy(bob)) → Happy(mary))"
    );
}

#[test]
fn parse_open_vocabulary_predicate() {
    assert_eq!(parse("alice is brave").unwrap(), "Brave(alice)");
    // Unknown names are predicates, so the copula is left over
    assert_eq!(
        parse("smaug is dragon"),
        Err(SyntaxError::TrailingInput {
            found: "IS".to_string(),
        })
    );
}

#[test]
fn parse_allows_repeated_full_stops() {
    assert_eq!(parse("Socrates is wise...").unwrap(), "Wise(socrates)");
}

#[test]
fn parse_relational_with_variables() {
    assert_eq!(parse("Loves(x, alice)").unwrap(), "Loves(x, alice)");
}

#[test]
fn parse_error_messages() {
    assert_eq!(
        parse("every").unwrap_err().to_string(),
        "expected predicate after quantifier"
    );
    assert_eq!(
        parse("Loves(alice").unwrap_err().to_string(),
        "unterminated argument list"
    );
    assert_eq!(
        parse("Loves(alice happy)").unwrap_err().to_string(),
        "expected RPAREN but found NOUN"
    );
    assert_eq!(
        parse("and").unwrap_err().to_string(),
        "unexpected token: AND"
    );
    assert_eq!(
        parse("alice is happy wise").unwrap_err().to_string(),
        "unexpected tokens at end of input"
    );
}

#[test]
fn parse_from_explicit_tokens() {
    let tokens = vec![
        Token::new(TokenKind::Some, "some"),
        Token::new(TokenKind::Noun, "Teacher"),
        Token::new(TokenKind::Is, "is"),
        Token::new(TokenKind::Noun, "Wise"),
    ];

    // Missing EOF is treated as end of input
    assert_eq!(
        Parser::new(tokens).parse().unwrap(),
        "∃x(Teacher(x) ∧ Wise(x))"
    );
}

#[test]
fn parse_with_custom_vocabulary() {
    let vocab = Vocabulary::builder()
        .quantifier("each", folnl_vocabulary::Quantifier::Every)
        .predicate("robot", "Robot")
        .predicate("made of metal", "Metal")
        .auxiliary("is")
        .build();

    assert_eq!(
        Parser::from_text("each robot is made of metal", &vocab)
            .parse()
            .unwrap(),
        "∀x(Robot(x) → Metal(x))"
    );
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,48}") {
        let _ = parse(&input);
    }

    #[test]
    fn parse_keyword_soup_never_panics(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "every", "some", "no", "if", "then", "and", "or", "not", "is",
                "human", "alice", "x", "(", ")", ",", ".", "iff",
            ]),
            0..16,
        )
    ) {
        let _ = parse(&words.join(" "));
    }

    #[test]
    fn universal_sentences_parse(
        subject in prop::sample::select(vec!["human", "student", "bird", "philosopher"]),
        predicate in prop::sample::select(vec!["mortal", "wise", "happy"]),
    ) {
        let formula = parse(&format!("every {subject} is {predicate}")).unwrap();
        prop_assert!(formula.starts_with("∀x("));
        prop_assert!(formula.contains(" → "));
    }
}
