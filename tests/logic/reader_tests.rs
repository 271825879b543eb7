//! Formula reader tests.

use folnl_foundation::ConversionError;
use folnl_logic::reader::{FormulaReader, symbols};

#[test]
fn reader_trims_formula() {
    let reader = FormulaReader::new("  \tHuman(x)\n");

    assert!(!reader.is_empty());
    assert_eq!(reader.peek(), Some('H'));
    assert!(FormulaReader::new(" \n ").is_empty());
}

#[test]
fn symbols_take_one_position() {
    let mut reader = FormulaReader::new("∀x¬y");

    assert_eq!(reader.bump(), Some(symbols::FORALL));
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.variable(), Ok('x'));
    assert_eq!(reader.bump(), Some(symbols::NOT));
    assert_eq!(reader.position(), 3);
}

#[test]
fn identifier_stops_at_non_letter() {
    let mut reader = FormulaReader::new("GreaterThan(a, b)");

    assert_eq!(reader.identifier().unwrap(), "GreaterThan");
    assert!(reader.at('('));
}

#[test]
fn identifier_requires_a_letter() {
    let mut reader = FormulaReader::new("(x)");

    assert_eq!(
        reader.identifier(),
        Err(ConversionError::ExpectedIdentifier { position: 0 })
    );
}

#[test]
fn variable_must_be_lowercase() {
    let mut reader = FormulaReader::new("X");

    assert_eq!(
        reader.variable(),
        Err(ConversionError::ExpectedVariable { position: 0 })
    );
}

#[test]
fn arguments_are_trimmed() {
    let mut reader = FormulaReader::new("( alice ,bob  )rest");
    reader.bump();

    assert_eq!(reader.arguments().unwrap(), vec!["alice", "bob"]);
    assert_eq!(reader.peek(), Some('r'));
}

#[test]
fn empty_argument_list() {
    let mut reader = FormulaReader::new("()");
    reader.bump();

    assert!(reader.arguments().unwrap().is_empty());
    assert!(reader.at_end());
}

#[test]
fn unterminated_arguments() {
    let mut reader = FormulaReader::new("(alice, bob");
    reader.bump();

    assert_eq!(
        reader.arguments(),
        Err(ConversionError::UnterminatedArgumentList)
    );
}

#[test]
fn expect_skips_whitespace() {
    let mut reader = FormulaReader::new("x   )");
    reader.bump();

    assert!(reader.expect(')').is_ok());
    assert!(reader.at_end());
}

#[test]
fn expect_reports_position() {
    let mut reader = FormulaReader::new("ab");

    assert_eq!(
        reader.expect(')'),
        Err(ConversionError::UnmatchedParenthesis {
            expected: ')',
            position: 0,
        })
    );
}

#[test]
fn logic_symbol_set() {
    for c in ['∀', '∃', '¬', '∧', '∨', '→', '↔'] {
        assert!(symbols::is_logic_symbol(c), "{c}");
    }
    for c in ['(', 'x', '&', '-'] {
        assert!(!symbols::is_logic_symbol(c), "{c}");
    }
}
