//! Binding scope and agreement tests.

use folnl_logic::inflect;
use folnl_logic::{BindingScopes, PronounForms, Role, Scoped};

#[test]
fn distinct_variables_nest() {
    let mut scopes = BindingScopes::new();
    let mut outer = scopes.bind('x', PronounForms::THEY);
    {
        let inner = outer.bind('y', PronounForms::THEY);
        assert_eq!(inner.variable(), 'y');
        assert_eq!(inner.depth(), 2);
        assert!(inner.lookup('x').is_some());
        assert!(inner.lookup('y').is_some());
    }
    assert_eq!(outer.depth(), 1);
    assert!(outer.lookup('y').is_none());
    drop(outer);
    assert!(scopes.is_empty());
}

#[test]
fn unbound_lookup() {
    let scopes = BindingScopes::new();

    assert!(scopes.lookup('z').is_none());
    assert_eq!(scopes.depth(), 0);
}

#[test]
fn pronoun_roles() {
    assert_eq!(PronounForms::THEY.form(Role::Subject), "they");
    assert_eq!(PronounForms::THEY.form(Role::Object), "them");
}

#[test]
fn plural_verbs() {
    assert_eq!(inflect::plural_verb("carries"), "carry");
    assert_eq!(inflect::plural_verb("watches"), "watch");
    assert_eq!(inflect::plural_verb("fixes"), "fix");
    assert_eq!(inflect::plural_verb("kisses"), "kiss");
    assert_eq!(inflect::plural_verb("loves"), "love");
    assert_eq!(inflect::plural_verb("kiss"), "kiss");
}

#[test]
fn binary_verb_agreement() {
    assert_eq!(inflect::binary_verb("teaches", false), "teaches");
    assert_eq!(inflect::binary_verb("teaches", true), "teach");
    assert_eq!(
        inflect::binary_verb("is a friend of", true),
        "are a friend of"
    );
}

#[test]
fn constants_are_capitalized_when_lowercase() {
    assert_eq!(inflect::constant("socrates"), "Socrates");
    assert_eq!(inflect::constant("McCoy"), "McCoy");
    assert_eq!(inflect::constant("42"), "42");
}

#[test]
fn sentences_are_finished() {
    assert_eq!(inflect::finish_sentence("hello"), "Hello.");
    assert_eq!(inflect::finish_sentence("  Done. "), "Done.");
    assert_eq!(inflect::finish_sentence("   "), "");
}
