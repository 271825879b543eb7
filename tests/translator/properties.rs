//! Facade properties.

use folnl_foundation::{ErrorKind, InputKind};
use folnl_translator::{Direction, translate_fol_to_nl, translate_nl_to_fol};
use proptest::prelude::*;

#[test]
fn direction_names_round_trip() {
    for direction in Direction::ALL {
        assert_eq!(direction.as_str().parse::<Direction>(), Ok(direction));
        assert_eq!(direction.reverse().reverse(), direction);
    }
    assert_eq!("FOL-TO-NL".parse::<Direction>(), Ok(Direction::FolToNl));
    assert!("sideways".parse::<Direction>().is_err());
}

#[test]
fn failures_are_translation_errors() {
    let err = translate_nl_to_fol(")").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Translation("unexpected token: RPAREN".to_string())
    );
    assert!(!err.is_empty_input());

    let err = translate_fol_to_nl("∀").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Translation("expected variable".to_string()));
}

#[test]
fn long_negation_runs_translate() {
    let fol = translate_nl_to_fol(&format!("{}socrates is human", "not ".repeat(100_000))).unwrap();
    assert!(fol.ends_with("Human(socrates)))"));

    let nl = translate_fol_to_nl(&format!("{}Human(socrates)", "¬".repeat(100_000))).unwrap();
    assert!(nl.ends_with("it is not the case that Socrates is human."));
}

#[test]
fn deep_nesting_is_an_error() {
    let formula = format!("{}Human(socrates){}", "(".repeat(100_000), ")".repeat(100_000));
    let err = translate_fol_to_nl(&formula).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Translation(_)));
    assert_eq!(err.to_string(), "formula nested too deeply (limit 128)");
}

proptest! {
    #[test]
    fn whitespace_input_is_rejected(input in "[ \t\r\n]{0,16}") {
        let err = translate_nl_to_fol(&input).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::EmptyInput(InputKind::NaturalLanguage));

        let err = translate_fol_to_nl(&input).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::EmptyInput(InputKind::Formula));
    }

    #[test]
    fn translation_never_panics(input in "\\PC{0,48}") {
        let _ = translate_nl_to_fol(&input);
        let _ = translate_fol_to_nl(&input);
    }

    #[test]
    fn facts_translate_both_ways(
        name in prop::sample::select(vec!["socrates", "plato", "alice", "mary"]),
        adjective in prop::sample::select(vec!["human", "mortal", "wise", "happy"]),
    ) {
        let formula = translate_nl_to_fol(&format!("{name} is {adjective}")).unwrap();
        let sentence = translate_fol_to_nl(&formula).unwrap();

        let mut expected_name = name.to_string();
        expected_name[..1].make_ascii_uppercase();
        prop_assert_eq!(sentence, format!("{expected_name} is {adjective}."));
    }
}
