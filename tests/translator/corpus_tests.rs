//! Corpus translation tests.

use folnl_translator::{CORPUS, Direction, Translator};

const CORPUS_SENTENCES: &[(&str, &str)] = &[
    (
        "∀x(Human(x) → Mortal(x))",
        "For every individual, if they are human, then they are mortal.",
    ),
    ("Human(socrates)", "Socrates is human."),
    (
        "∃x(Student(x) ∧ Happy(x))",
        "There exists someone such that they are a student and they are happy.",
    ),
    (
        "∀x(Bird(x) → CanFly(x))",
        "For every individual, if they are a bird, then they can fly.",
    ),
    (
        "¬∃x(Student(x) ∧ Teacher(x))",
        "It is not the case that there exists someone such that they are a student and they are a teacher.",
    ),
    (
        "(Human(socrates) → Mortal(socrates))",
        "If Socrates is human, then Socrates is mortal.",
    ),
    ("Loves(alice, bob)", "Alice loves Bob."),
    (
        "∀x(Philosopher(x) → Wise(x))",
        "For every individual, if they are a philosopher, then they are wise.",
    ),
];

#[test]
fn corpus_sentences_parse_to_their_formulas() {
    let translator = Translator::standard();

    for example in CORPUS {
        assert_eq!(
            translator.nl_to_fol(example.nl).unwrap(),
            example.fol,
            "{}",
            example.nl
        );
    }
}

#[test]
fn corpus_formulas_render_as_sentences() {
    let translator = Translator::standard();

    for &(formula, sentence) in CORPUS_SENTENCES {
        assert_eq!(translator.fol_to_nl(formula).unwrap(), sentence, "{formula}");
    }
}

#[test]
fn corpus_formulas_are_covered() {
    let formulas: Vec<&str> = CORPUS.iter().map(|e| e.fol).collect();
    let covered: Vec<&str> = CORPUS_SENTENCES.iter().map(|&(f, _)| f).collect();

    assert_eq!(formulas, covered);
}

#[test]
fn corpus_sentences_accept_full_stops_and_case() {
    let translator = Translator::standard();

    for example in CORPUS {
        let shouted = format!("{}.", example.nl.to_uppercase());
        assert_eq!(translator.nl_to_fol(&shouted).unwrap(), example.fol);
    }
}

#[test]
fn translate_dispatches_on_direction() {
    let translator = Translator::standard();
    let example = CORPUS[6];

    for direction in Direction::ALL {
        let output = translator
            .translate(direction, example.prompt(direction))
            .unwrap();
        assert!(!output.is_empty());
    }
    assert_eq!(
        translator
            .translate(Direction::NlToFol, example.prompt(Direction::NlToFol))
            .unwrap(),
        example.answer(Direction::NlToFol)
    );
}
