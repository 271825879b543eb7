//! Pronoun forms for quantified variables.
//!
//! While a quantifier's body is rendered, its variable is spoken as a
//! pronoun instead of a letter.

/// Grammatical role of a term within a predicate application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// First argument.
    Subject,
    /// Second argument.
    Object,
}

/// Subject and object forms of a pronoun, plus its agreement number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PronounForms {
    /// Form used as the first argument ("they").
    pub subject: &'static str,
    /// Form used as the second argument ("them").
    pub object: &'static str,
    /// Whether verbs agree in the plural.
    pub plural: bool,
}

impl PronounForms {
    /// "they" / "them", plural agreement.
    ///
    /// Every quantifier binds this form, the existential included:
    /// "there exists someone such that they are happy".
    pub const THEY: Self = Self {
        subject: "they",
        object: "them",
        plural: true,
    };

    /// Returns the form for the given role.
    #[must_use]
    pub const fn form(&self, role: Role) -> &'static str {
        match role {
            Role::Subject => self.subject,
            Role::Object => self.object,
        }
    }
}
