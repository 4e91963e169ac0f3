//! Lexically nested name tables

use crate::binding::Binding;
use crate::error::EvalError;
use std::collections::HashMap;
use tracing::trace;

/// A table of names to bindings, optionally nested in a parent scope.
///
/// A child borrows its parent, so it can never outlive it. Lookups check the local table first
/// and then each ancestor in turn, so the nearest binding of a name always wins.
///
/// # Examples
/// ```
/// # use lisa_eval::binding::Binding;
/// # use lisa_eval::scope::Scope;
/// let mut root = Scope::new();
/// root.bind("x", 1.0);
/// let mut child = root.child();
/// child.bind("x", 2.0);
/// assert_eq!(child.lookup("x"), Ok(&Binding::Number(2.0)));
/// assert_eq!(root.lookup("x"), Ok(&Binding::Number(1.0)));
/// ```
#[derive(Debug, Default)]
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    symbols: HashMap<String, Binding>,
}

impl<'p> Scope<'p> {
    /// Creates a root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested in `parent`
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Self {
            parent: Some(parent),
            symbols: HashMap::new(),
        }
    }

    /// Creates an empty scope nested in this one
    pub fn child(&self) -> Scope<'_> {
        Scope::with_parent(self)
    }

    pub fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Binds a name in this scope, returning the binding it replaced.
    ///
    /// Ancestors are never modified.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Binding>) -> Option<Binding> {
        let name = name.into();
        let value = value.into();
        trace!("binding {name:?} to {value}");
        self.symbols.insert(name, value)
    }

    /// Finds the nearest binding of a name
    pub fn lookup(&self, name: &str) -> Result<&Binding, EvalError> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(binding) = current.symbols.get(name) {
                return Ok(binding);
            }
            scope = current.parent;
        }
        Err(EvalError::UnboundIdentifier(name.to_string()))
    }

    /// Finds a binding of a name in this scope only
    pub fn lookup_local(&self, name: &str) -> Option<&Binding> {
        self.symbols.get(name)
    }

    /// Gets the names bound in this scope only
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}
