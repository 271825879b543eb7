//! Canonical sentence/formula pairs.
//!
//! Every pair translates exactly in the sentence-to-formula direction, and
//! every formula converts without error.

use crate::direction::Direction;

/// One sentence with its formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Example {
    /// English sentence.
    pub nl: &'static str,
    /// First-order logic formula.
    pub fol: &'static str,
}

impl Example {
    /// The text shown when practising `direction`.
    #[must_use]
    pub const fn prompt(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::NlToFol => self.nl,
            Direction::FolToNl => self.fol,
        }
    }

    /// The text expected back when practising `direction`.
    #[must_use]
    pub const fn answer(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::NlToFol => self.fol,
            Direction::FolToNl => self.nl,
        }
    }
}

/// The built-in examples.
pub const CORPUS: &[Example] = &[
    Example {
        nl: "Every human is mortal",
        fol: "∀x(Human(x) → Mortal(x))",
    },
    Example {
        nl: "Socrates is human",
        fol: "Human(socrates)",
    },
    Example {
        nl: "Some student is happy",
        fol: "∃x(Student(x) ∧ Happy(x))",
    },
    Example {
        nl: "All birds can fly",
        fol: "∀x(Bird(x) → CanFly(x))",
    },
    Example {
        nl: "No student is a teacher",
        fol: "¬∃x(Student(x) ∧ Teacher(x))",
    },
    Example {
        nl: "If socrates is human then socrates is mortal",
        fol: "(Human(socrates) → Mortal(socrates))",
    },
    Example {
        nl: "Alice loves Bob",
        fol: "Loves(alice, bob)",
    },
    Example {
        nl: "Every philosopher is wise",
        fol: "∀x(Philosopher(x) → Wise(x))",
    },
];
