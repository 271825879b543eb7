//! Session transcript tests.

use folnl_foundation::ErrorKind;
use folnl_runtime::serialize;
use folnl_runtime::{Outcome, Session};
use folnl_translator::{CORPUS, Direction, Translator};

fn corpus_session() -> Session {
    let translator = Translator::standard();
    let mut session = Session::new();
    for example in CORPUS {
        session
            .translate(&translator, Direction::NlToFol, example.nl)
            .unwrap();
    }
    session
}

#[test]
fn session_records_failures() {
    let translator = Translator::standard();
    let mut session = Session::new();

    assert!(session.translate(&translator, Direction::FolToNl, "").is_err());
    assert!(
        session
            .translate(&translator, Direction::FolToNl, "Human(plato)")
            .is_ok()
    );

    assert_eq!(session.len(), 2);
    assert_eq!(
        session.entries()[0].outcome,
        Outcome::Failed("FOL formula is empty".to_string())
    );
    assert_eq!(session.entries()[1].outcome.text(), "Plato is human.");
}

#[test]
fn session_survives_messagepack() {
    let session = corpus_session();

    let bytes = serialize::to_bytes(&session).unwrap();
    let restored = serialize::from_bytes(&bytes).unwrap();

    assert_eq!(restored, session);
    assert!(restored.entries().iter().all(|e| e.outcome.is_translated()));
}

#[test]
fn session_survives_file() {
    let session = corpus_session();
    let path = std::env::temp_dir().join(format!(
        "folnl-integration-{}.msgpack",
        std::process::id()
    ));

    serialize::save_to_file(&session, &path).unwrap();
    let restored = serialize::load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored.len(), CORPUS.len());
    assert_eq!(restored, session);
}

#[test]
fn loading_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("folnl-integration-does-not-exist.msgpack");

    let err = serialize::load_from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn sessions_extend_in_order() {
    let mut first = corpus_session();
    let second = corpus_session();

    first.extend(second);
    assert_eq!(first.len(), CORPUS.len() * 2);
    assert_eq!(first.entries()[CORPUS.len()].input, CORPUS[0].nl);
}
