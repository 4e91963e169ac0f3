//! Walks a program, producing the value of its last statement

use crate::binding::Binding;
use crate::error::EvalError;
use crate::language::Languages;
use crate::scope::Scope;
use lisa_ast::expr::{Expr, FunctionApplicationNode, Literal};
use lisa_ast::program::{LangNode, Program, Statement};
use lisa_tokens::spanned::Spanned;
use tracing::{debug, trace};

/// Evaluates programs against a set of known languages.
///
/// The `#lang` statement selects the language whose bindings are loaded into the root scope
/// before any expression is evaluated. Every expression is then evaluated in source order, and
/// the value of the last one is the value of the program.
#[derive(Debug, Default)]
pub struct Evaluator {
    languages: Languages,
}

impl Evaluator {
    /// Creates an evaluator that knows no languages
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_languages(languages: Languages) -> Self {
        Self { languages }
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn languages_mut(&mut self) -> &mut Languages {
        &mut self.languages
    }

    /// Evaluates a program, returning `None` if it has no expressions
    pub fn evaluate(
        &self,
        program: &Program,
        scope: &mut Scope<'_>,
    ) -> Result<Option<Binding>, EvalError> {
        let mut result = None;
        for statement in program.statements() {
            result = self.evaluate_statement(statement, scope)?;
        }
        debug!(
            "program evaluated to {}",
            result
                .as_ref()
                .map_or_else(|| "nothing".to_string(), Binding::to_string)
        );
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// A `#lang` statement loads its language into the scope and has no value.
    pub fn evaluate_statement(
        &self,
        statement: &Statement,
        scope: &mut Scope<'_>,
    ) -> Result<Option<Binding>, EvalError> {
        match statement {
            Statement::Lang(lang) => {
                self.load_language(lang, scope)?;
                Ok(None)
            }
            Statement::Expr(expr) => self.evaluate_expr(expr, scope).map(Some),
        }
    }

    /// Evaluates an expression
    pub fn evaluate_expr(&self, expr: &Expr, scope: &Scope<'_>) -> Result<Binding, EvalError> {
        evaluate_expr(expr, scope)
    }

    fn load_language(&self, lang: &LangNode, scope: &mut Scope<'_>) -> Result<(), EvalError> {
        let name = lang.language();
        match self.languages.get(name) {
            Some(language) => {
                debug!("loading language {name:?}");
                language.load(scope)
            }
            None => {
                debug!("no language named {name:?} is registered, nothing is loaded");
                Ok(())
            }
        }
    }
}

fn evaluate_expr(expr: &Expr, scope: &Scope<'_>) -> Result<Binding, EvalError> {
    match expr {
        Expr::Atom(atom) => Ok(match atom.value() {
            Literal::Number(number) => Binding::Number(number),
            Literal::String(string) => Binding::String(string.to_string()),
        }),
        Expr::Identifier(identifier) => scope.lookup(identifier.name()).cloned(),
        Expr::Application(application) => apply(application, scope),
    }
}

fn apply(application: &FunctionApplicationNode, scope: &Scope<'_>) -> Result<Binding, EvalError> {
    let procedure = evaluate_expr(application.procedure(), scope)?;
    let Binding::Primitive(primitive) = procedure else {
        return Err(EvalError::NotCallable(procedure));
    };
    let arguments = application
        .arguments()
        .iter()
        .map(|argument| evaluate_expr(argument, scope))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(
        "applying {} to {} arguments at {}",
        primitive.name(),
        arguments.len(),
        application.span()
    );
    primitive.call(&arguments)
}
