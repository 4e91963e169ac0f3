//! Language bindings selected by a program's `#lang` statement

use crate::binding::Primitive;
use crate::error::EvalError;
use crate::scope::Scope;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// A language binding, registering its primitives into the root scope of a program
pub trait Language {
    /// The name used to select this language with `#lang <name>`
    fn name(&self) -> &str;

    /// Registers this language's bindings into a scope
    fn load(&self, scope: &mut Scope<'_>) -> Result<(), EvalError>;
}

/// A language made only of primitive procedures
#[derive(Debug, Clone)]
pub struct PrimitiveSet {
    name: String,
    primitives: Vec<Primitive>,
}

impl PrimitiveSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitives: vec![],
        }
    }

    /// Adds a primitive to this language
    pub fn with(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl Language for PrimitiveSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, scope: &mut Scope<'_>) -> Result<(), EvalError> {
        for primitive in &self.primitives {
            scope.bind(primitive.name(), *primitive);
        }
        Ok(())
    }
}

/// The languages known to an evaluator, keyed by name
#[derive(Default)]
pub struct Languages {
    languages: BTreeMap<String, Box<dyn Language>>,
}

impl Languages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a language, returning the language previously registered under its name
    pub fn register<L: Language + 'static>(&mut self, language: L) -> Option<Box<dyn Language>> {
        self.languages
            .insert(language.name().to_string(), Box::new(language))
    }

    /// Gets the language registered under a name
    pub fn get(&self, name: &str) -> Option<&dyn Language> {
        self.languages.get(name).map(|language| language.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Gets the names of every registered language, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Debug for Languages {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Binding;
    use test_log::test;

    fn first(arguments: &[Binding]) -> Result<Binding, EvalError> {
        arguments
            .first()
            .cloned()
            .ok_or(EvalError::from("first of nothing"))
    }

    #[test]
    fn test_register_and_get() {
        let mut languages = Languages::new();
        assert!(languages.is_empty());
        assert!(languages.register(PrimitiveSet::new("racket")).is_none());
        assert!(languages.register(PrimitiveSet::new("scheme")).is_none());
        assert!(languages.register(PrimitiveSet::new("racket")).is_some());

        assert!(languages.contains("racket"));
        assert!(languages.get("scheme").is_some());
        assert!(languages.get("python").is_none());
        assert_eq!(languages.names().collect::<Vec<_>>(), ["racket", "scheme"]);
        assert_eq!(format!("{languages:?}"), r#"{"racket", "scheme"}"#);
    }

    #[test]
    fn test_primitive_set_loads_into_scope() {
        let language = PrimitiveSet::new("lists").with(Primitive::new("first", first));
        assert_eq!(language.primitives(), [Primitive::new("first", first)]);
        let mut scope = Scope::new();
        language.load(&mut scope).unwrap();
        let Ok(Binding::Primitive(primitive)) = scope.lookup("first") else {
            panic!("first should be bound to a primitive");
        };
        assert_eq!(
            primitive.call(&[Binding::Number(1.0), Binding::Number(2.0)]),
            Ok(Binding::Number(1.0))
        );
    }
}
