//! Vocabulary tests.
//!
//! Tests for table lookups, word classification and custom vocabularies.

use folnl_parser::parse_natural_language;
use folnl_vocabulary::{Connective, Lexeme, Quantifier, Vocabulary, stdlib};

#[test]
fn every_standard_predicate_is_registered() {
    let vocab = Vocabulary::standard();

    for &(surface, name) in stdlib::PREDICATES {
        assert_eq!(vocab.lookup_predicate(surface), Some(name), "{surface}");
    }
}

#[test]
fn every_canonical_predicate_has_a_phrase() {
    let vocab = Vocabulary::standard();

    for &(_, name) in stdlib::PREDICATES {
        assert!(vocab.phrase_for(name).is_some(), "{name} has no phrase");
    }
}

#[test]
fn quantifier_phrases_resolve() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.lookup_quantifier("for all"), Some(Quantifier::All));
    assert_eq!(vocab.lookup_quantifier("for every"), Some(Quantifier::Every));
    assert_eq!(vocab.lookup_quantifier("there exists"), Some(Quantifier::Exists));
    assert_eq!(vocab.lookup_quantifier("each"), None);
}

#[test]
fn connective_phrases_resolve() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.lookup_connective("if and only if"), Some(Connective::Iff));
    assert_eq!(vocab.lookup_connective("implies"), Some(Connective::Then));
    assert_eq!(vocab.lookup_connective("unless"), None);
}

#[test]
fn lookups_are_exact_lowercase() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.lookup_constant("Alice"), None);
    assert_eq!(vocab.lookup_predicate("Human"), None);
    assert_eq!(vocab.lookup_predicate("human"), Some("Human"));
}

#[test]
fn classification_prefers_vocabulary_over_plural_fallback() {
    let vocab = Vocabulary::standard();

    // "flies" is its own entry, not a plural of "flie"
    assert_eq!(vocab.classify("flies"), Lexeme::Predicate("CanFly".into()));
    assert_eq!(vocab.classify("humans"), Lexeme::Predicate("Human".into()));
    // Plurals only resolve single-word predicates
    assert_eq!(vocab.classify("flys"), Lexeme::OpenPredicate("flys".into()));
}

#[test]
fn only_copulas_survive_the_stoplist() {
    let vocab = Vocabulary::standard();

    for &word in stdlib::AUXILIARIES {
        let lexeme = vocab.classify(word);
        if stdlib::COPULAS.contains(&word) {
            assert_eq!(lexeme, Lexeme::Copula, "{word}");
        } else {
            assert!(lexeme.is_dropped(), "{word} should be dropped");
        }
    }
}

#[test]
fn variables_are_single_letters() {
    let vocab = Vocabulary::standard();

    assert_eq!(vocab.classify("z"), Lexeme::Variable('z'));
    assert_eq!(vocab.classify("xy"), Lexeme::OpenPredicate("xy".into()));
    assert_eq!(vocab.classify("w"), Lexeme::OpenPredicate("w".into()));
}

#[test]
fn builder_re_registration_replaces_phrase_meaning() {
    let vocab = Vocabulary::builder()
        .predicate("best friend", "BestFriend")
        .predicate("best friend", "Bff")
        .build();

    assert_eq!(vocab.multiword_entries().len(), 1);
    assert_eq!(
        vocab.multiword_entries()[0].lexeme,
        Lexeme::Predicate("Bff".into())
    );
    assert_eq!(vocab.lookup_predicate("best friend"), Some("Bff"));
}

#[test]
fn builder_lowercases_surface_text() {
    let vocab = Vocabulary::builder()
        .quantifier("Each", Quantifier::Every)
        .constant("Carol", "carol")
        .build();

    assert_eq!(vocab.lookup_quantifier("each"), Some(Quantifier::Every));
    assert_eq!(vocab.lookup_constant("carol"), Some("carol"));
}

#[test]
fn equal_length_phrases_keep_registration_order() {
    let vocab = Vocabulary::standard();
    let twelve: Vec<&str> = vocab
        .multiword_entries()
        .iter()
        .filter(|e| e.phrase.chars().count() == 12)
        .map(|e| e.phrase.as_str())
        .collect();

    // Quantifiers are registered before predicates
    assert_eq!(twelve, vec!["there exists", "greater than"]);
}

#[test]
fn plural_of_known_predicate_resolves_in_every_position() {
    // Plural subjects and complements both collapse to the singular predicate.
    assert_eq!(
        parse_natural_language("all humans are mortal").unwrap(),
        "∀x(Human(x) → Mortal(x))"
    );
    assert_eq!(
        parse_natural_language("All birds can fly").unwrap(),
        "∀x(Bird(x) → CanFly(x))"
    );
    assert_eq!(
        parse_natural_language("socrates is humans").unwrap(),
        "Human(socrates)"
    );
    // Unknown stems stay open-vocabulary.
    assert_eq!(
        parse_natural_language("all dragons are wise").unwrap(),
        "∀x(Dragons(x) → Wise(x))"
    );
}
