//! Values that names are bound to

use crate::error::EvalError;
use std::fmt::{Debug, Display, Formatter};

/// A value a name can be bound to
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Number(f64),
    String(String),
    Primitive(Primitive),
}

impl Binding {
    /// The name of this binding's type, as used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Binding::Number(_) => "number",
            Binding::String(_) => "string",
            Binding::Primitive(_) => "procedure",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Binding::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Binding::String(string) => Some(string),
            _ => None,
        }
    }

    /// Gets this binding as a number, failing with a type error otherwise
    pub fn expect_number(&self) -> Result<f64, EvalError> {
        self.as_number().ok_or_else(|| EvalError::TypeError {
            expected: "number",
            received: self.clone(),
        })
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Number(number) => write!(f, "{number}"),
            Binding::String(string) => write!(f, "\"{string}\""),
            Binding::Primitive(primitive) => write!(f, "#<procedure:{}>", primitive.name()),
        }
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for Binding {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Binding {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Primitive> for Binding {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

/// A primitive procedure, implemented in rust.
pub type PrimitiveFn = fn(&[Binding]) -> Result<Binding, EvalError>;

/// A named procedure a language binding registers into a scope.
///
/// Arguments are already evaluated when the procedure is called.
#[derive(Clone, Copy)]
pub struct Primitive {
    name: &'static str,
    arity: Option<usize>,
    func: PrimitiveFn,
}

impl Primitive {
    /// Creates a primitive accepting any number of arguments
    pub const fn new(name: &'static str, func: PrimitiveFn) -> Self {
        Self {
            name,
            arity: None,
            func,
        }
    }

    /// Creates a primitive accepting exactly `arity` arguments
    pub const fn with_arity(name: &'static str, arity: usize, func: PrimitiveFn) -> Self {
        Self {
            name,
            arity: Some(arity),
            func,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Calls this primitive with already evaluated arguments
    pub fn call(&self, arguments: &[Binding]) -> Result<Binding, EvalError> {
        if let Some(expected) = self.arity {
            if expected != arguments.len() {
                return Err(EvalError::ArityMismatch {
                    name: self.name.to_string(),
                    expected,
                    received: arguments.len(),
                });
            }
        }
        (self.func)(arguments)
    }
}

impl Debug for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Primitive")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negate(arguments: &[Binding]) -> Result<Binding, EvalError> {
        Ok(Binding::Number(-arguments[0].expect_number()?))
    }

    #[test]
    fn test_display() {
        assert_eq!(Binding::Number(42.0).to_string(), "42");
        assert_eq!(Binding::Number(2.5).to_string(), "2.5");
        assert_eq!(Binding::from("hello").to_string(), "\"hello\"");
        assert_eq!(
            Binding::from(Primitive::new("negate", negate)).to_string(),
            "#<procedure:negate>"
        );
    }

    #[test]
    fn test_call_checks_arity() {
        assert_eq!(Primitive::new("negate", negate).arity(), None);
        let primitive = Primitive::with_arity("negate", 1, negate);
        assert_eq!(primitive.arity(), Some(1));
        assert_eq!(primitive.call(&[Binding::Number(2.0)]), Ok(Binding::Number(-2.0)));
        assert_eq!(
            primitive.call(&[]),
            Err(EvalError::ArityMismatch {
                name: "negate".to_string(),
                expected: 1,
                received: 0
            })
        );
    }

    #[test]
    fn test_type_error() {
        let primitive = Primitive::with_arity("negate", 1, negate);
        let err = primitive.call(&[Binding::from("two")]).unwrap_err();
        assert_eq!(err.to_string(), "expected a number, but received \"two\"");
    }
}
