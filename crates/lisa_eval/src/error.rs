use crate::binding::Binding;

/// An error raised while evaluating a program
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("{0:?} is not bound in any enclosing scope")]
    UnboundIdentifier(String),
    #[error("{0} can not be applied as a procedure")]
    NotCallable(Binding),
    #[error("{name} expects {expected} arguments, but received {received}")]
    ArityMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("expected a {expected}, but received {received}")]
    TypeError {
        expected: &'static str,
        received: Binding,
    },
    #[error("{0}")]
    Custom(String),
}

impl From<&'static str> for EvalError {
    fn from(value: &'static str) -> Self {
        Self::Custom(value.to_string())
    }
}

impl From<String> for EvalError {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}
