use lisa_ast_parsing::parse_source;
use lisa_eval::binding::{Binding, Primitive};
use lisa_eval::error::EvalError;
use lisa_eval::evaluator::Evaluator;
use lisa_eval::language::{Language, Languages, PrimitiveSet};
use lisa_eval::scope::Scope;
use test_log::test;

/// A language with a constant as well as primitives
struct Constants;

impl Language for Constants {
    fn name(&self) -> &str {
        "constants"
    }

    fn load(&self, scope: &mut Scope<'_>) -> Result<(), EvalError> {
        scope.bind("pi", std::f64::consts::PI);
        scope.bind("greeting", "hello");
        scope.bind("string-append", Primitive::new("string-append", string_append));
        Ok(())
    }
}

/// A language that can never be loaded
struct Broken;

impl Language for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn load(&self, _scope: &mut Scope<'_>) -> Result<(), EvalError> {
        Err("broken can not be loaded".into())
    }
}

fn string_append(arguments: &[Binding]) -> Result<Binding, EvalError> {
    let mut result = String::new();
    for argument in arguments {
        match argument.as_str() {
            Some(string) => result.push_str(string),
            None => {
                return Err(EvalError::TypeError {
                    expected: "string",
                    received: argument.clone(),
                })
            }
        }
    }
    Ok(Binding::String(result))
}

fn multiply(arguments: &[Binding]) -> Result<Binding, EvalError> {
    Ok(Binding::Number(
        arguments[0].expect_number()? * arguments[1].expect_number()?,
    ))
}

fn evaluator() -> Evaluator {
    let mut languages = Languages::new();
    languages.register(Constants);
    languages.register(Broken);
    languages.register(PrimitiveSet::new("times").with(Primitive::with_arity("*", 2, multiply)));
    Evaluator::with_languages(languages)
}

fn run(source: &str) -> Result<Option<Binding>, EvalError> {
    let program = parse_source(source).expect("valid program");
    evaluator().evaluate(&program, &mut Scope::new())
}

#[test]
fn language_constants_are_visible() {
    assert_eq!(
        run("#lang constants\npi"),
        Ok(Some(Binding::Number(std::f64::consts::PI)))
    );
    assert_eq!(
        run("#lang constants\n(string-append greeting \", \" \"world\")"),
        Ok(Some(Binding::from("hello, world")))
    );
}

#[test]
fn languages_only_load_when_selected() {
    assert_eq!(
        run("#lang times\npi"),
        Err(EvalError::UnboundIdentifier("pi".to_string()))
    );
    assert_eq!(run("#lang times\n(* 6 7)"), Ok(Some(Binding::Number(42.0))));
}

#[test]
fn arity_is_checked() {
    let err = run("#lang times\n(* 6)").unwrap_err();
    assert_eq!(err.to_string(), "* expects 2 arguments, but received 1");
}

#[test]
fn load_failures_stop_evaluation() {
    assert_eq!(
        run("#lang broken\n1"),
        Err(EvalError::Custom("broken can not be loaded".to_string()))
    );
}

#[test]
fn host_bindings_are_shadowed_by_language() {
    let program = parse_source("#lang constants\npi").unwrap();
    let mut root = Scope::new();
    root.bind("pi", 3.0);
    let mut scope = root.child();
    let value = evaluator().evaluate(&program, &mut scope).unwrap();
    assert_eq!(value, Some(Binding::Number(std::f64::consts::PI)));
    assert_eq!(root.lookup("pi"), Ok(&Binding::Number(3.0)));
}

#[test]
fn applications_of_values_fail() {
    let err = run("#lang constants\n(greeting 1)").unwrap_err();
    assert_eq!(err, EvalError::NotCallable(Binding::from("hello")));
    assert_eq!(err.to_string(), "\"hello\" can not be applied as a procedure");
}
