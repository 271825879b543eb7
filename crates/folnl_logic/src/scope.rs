//! Lexical binding scopes for quantified variables.
//!
//! Entering a quantifier's body binds its variable; leaving it restores
//! whatever the variable meant before. The restore happens in
//! [`ScopeGuard`]'s `Drop`, so it runs on every exit path including early
//! returns through `?`.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::pronouns::PronounForms;

/// Active bindings from variable letter to pronoun forms.
#[derive(Clone, Debug, Default)]
pub struct BindingScopes {
    bindings: HashMap<char, PronounForms>,
    /// Variables in binding order, innermost last.
    stack: Vec<char>,
}

impl BindingScopes {
    /// Creates an empty scope stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the pronoun bound to `variable`, if any scope binds it.
    #[must_use]
    pub fn lookup(&self, variable: char) -> Option<&PronounForms> {
        self.bindings.get(&variable)
    }

    /// Number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if no scope is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Opens a scope binding `variable`, returning the binding it shadows.
    fn push(&mut self, variable: char, forms: PronounForms) -> Option<PronounForms> {
        self.stack.push(variable);
        self.bindings.insert(variable, forms)
    }

    /// Closes the innermost scope, reinstating `shadowed`.
    fn pop(&mut self, variable: char, shadowed: Option<PronounForms>) {
        let closed = self.stack.pop();
        debug_assert_eq!(closed, Some(variable), "scopes closed out of order");
        match shadowed {
            Some(forms) => {
                self.bindings.insert(variable, forms);
            }
            None => {
                self.bindings.remove(&variable);
            }
        }
    }
}

/// Anything that carries a [`BindingScopes`] stack.
pub trait Scoped {
    /// Returns the scope stack.
    fn scopes_mut(&mut self) -> &mut BindingScopes;

    /// Binds `variable` for as long as the returned guard lives.
    ///
    /// The guard dereferences to `self`, so the bound body is rendered
    /// through it.
    fn bind(&mut self, variable: char, forms: PronounForms) -> ScopeGuard<'_, Self>
    where
        Self: Sized,
    {
        let shadowed = self.scopes_mut().push(variable, forms);
        ScopeGuard {
            owner: self,
            variable,
            shadowed,
        }
    }
}

impl Scoped for BindingScopes {
    fn scopes_mut(&mut self) -> &mut BindingScopes {
        self
    }
}

/// Keeps a variable bound until dropped.
#[derive(Debug)]
pub struct ScopeGuard<'a, T: Scoped> {
    owner: &'a mut T,
    variable: char,
    shadowed: Option<PronounForms>,
}

impl<T: Scoped> ScopeGuard<'_, T> {
    /// The variable this guard keeps bound.
    #[must_use]
    pub const fn variable(&self) -> char {
        self.variable
    }
}

impl<T: Scoped> Deref for ScopeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.owner
    }
}

impl<T: Scoped> DerefMut for ScopeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.owner
    }
}

impl<T: Scoped> Drop for ScopeGuard<'_, T> {
    fn drop(&mut self) {
        let shadowed = self.shadowed.take();
        self.owner.scopes_mut().pop(self.variable, shadowed);
    }
}
