//! Standard English vocabulary.
//!
//! Contains the default tables used by [`Vocabulary::standard`].
//!
//! [`Vocabulary::standard`]: crate::Vocabulary::standard

use crate::lexeme::{Connective, Quantifier};

/// Quantifier words and phrases.
pub const QUANTIFIERS: &[(&str, Quantifier)] = &[
    ("every", Quantifier::Every),
    ("all", Quantifier::All),
    ("some", Quantifier::Some),
    ("exists", Quantifier::Exists),
    ("there exists", Quantifier::Exists),
    ("no", Quantifier::No),
    ("for all", Quantifier::All),
    ("for every", Quantifier::Every),
];

/// Connective words and phrases.
pub const CONNECTIVES: &[(&str, Connective)] = &[
    ("and", Connective::And),
    ("or", Connective::Or),
    ("not", Connective::Not),
    ("if", Connective::If),
    ("then", Connective::Then),
    ("implies", Connective::Then),
    ("iff", Connective::Iff),
    ("if and only if", Connective::Iff),
];

/// Predicate words and phrases mapped to canonical identifiers.
pub const PREDICATES: &[(&str, &str)] = &[
    // Unary
    ("human", "Human"),
    ("mortal", "Mortal"),
    ("student", "Student"),
    ("teacher", "Teacher"),
    ("philosopher", "Philosopher"),
    ("wise", "Wise"),
    ("happy", "Happy"),
    ("bird", "Bird"),
    ("can fly", "CanFly"),
    ("flies", "CanFly"),
    // Binary
    ("loves", "Loves"),
    ("teaches", "Teaches"),
    ("knows", "Knows"),
    ("likes", "Likes"),
    ("parent of", "ParentOf"),
    ("friend of", "FriendOf"),
    ("greater than", "GreaterThan"),
    ("equals", "Equals"),
];

/// Known proper names.
pub const CONSTANTS: &[(&str, &str)] = &[
    ("socrates", "socrates"),
    ("plato", "plato"),
    ("aristotle", "aristotle"),
    ("alice", "alice"),
    ("bob", "bob"),
    ("john", "john"),
    ("mary", "mary"),
];

/// Stoplist words. Only the copula forms survive tokenization.
pub const AUXILIARIES: &[&str] = &[
    "is", "are", "has", "have", "that", "who", "which", "a", "an", "the",
];

/// Copula forms among the auxiliaries.
pub const COPULAS: &[&str] = &["is", "are"];

/// Letters that tokenize as variables.
pub const VARIABLES: &[char] = &['x', 'y', 'z'];

/// English renderings of canonical predicates, used when reading formulas
/// back into sentences.
pub const PREDICATE_PHRASES: &[(&str, &str)] = &[
    ("Human", "is human"),
    ("Mortal", "is mortal"),
    ("Student", "is a student"),
    ("Teacher", "is a teacher"),
    ("Philosopher", "is a philosopher"),
    ("Wise", "is wise"),
    ("Happy", "is happy"),
    ("Bird", "is a bird"),
    ("CanFly", "can fly"),
    ("Loves", "loves"),
    ("Teaches", "teaches"),
    ("Knows", "knows"),
    ("Likes", "likes"),
    ("ParentOf", "is the parent of"),
    ("FriendOf", "is a friend of"),
    ("GreaterThan", "is greater than"),
    ("Equals", "is equal to"),
];
