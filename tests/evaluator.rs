use lsystem::{
    arithmetic::compute,
    capability::{CapabilityTable, Interpreter, ParamKind},
    error::{Error, EvaluationError, ParseError},
    grammar::{alphabet::Alphabet, core::LSystem},
    value::Value,
};

/// Counts how often its functions were invoked.
#[derive(Default)]
struct Host {
    invocations: usize,
}

impl Interpreter for Host {
    fn reset(&mut self) {}
}

fn system() -> LSystem<Host> {
    let table =
        CapabilityTable::<Host>::new().with_function("double", &[ParamKind::Number], |h, args| {
                                          h.invocations += 1;
                                          Ok(Value::Integer(args[0].as_integer()? * 2))
                                      })
                                      .with_function("add", &[ParamKind::Number, ParamKind::Number], |h, args| {
                                          h.invocations += 1;
                                          Ok(Value::from(args[0].as_real()? + args[1].as_real()?))
                                      })
                                      .with_function("shout", &[ParamKind::Text], |_, args| {
                                          Ok(Value::from(args[0].to_string().to_uppercase()))
                                      })
                                      .with_function("word", &[ParamKind::Number], |h, args| {
                                          h.invocations += 1;
                                          Ok(Value::from(format!("w{}", args[0])))
                                      })
                                      .with_function("echo", &[ParamKind::Text], |_, args| {
                                          Ok(Value::from(args[0].to_string()))
                                      });
    let alphabet =
        Alphabet::new(&["F"], &["double", "add", "shout", "word", "echo", "missing"], &[]);
    LSystem::new(alphabet, table, Host::default())
}

fn assert_evaluates(src: &str, expected: &str) {
    match system().evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating '{src}'"),
        Err(e) => panic!("Evaluating '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match system().evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to '{value}' but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn plain_arithmetic() {
    assert_evaluates("1 + 2", "3");
    assert_evaluates("7 * 9", "63");
    assert_evaluates("8 - 5", "3");
    assert_evaluates("10 / 2", "5");
    assert_evaluates("2 + 3 * 4", "14");
    assert_evaluates("(2 + 3) * 4", "20");
    assert_evaluates("-3 + +1", "-2");
    assert_evaluates("--3", "3");
}

#[test]
fn implicit_multiplication_before_parentheses() {
    assert_evaluates("2(3+4)", "14");
    assert_evaluates("0.5(4)", "2");
}

#[test]
fn inexact_division_produces_reals() {
    assert_evaluates("1 / 4", "0.25");
    assert_evaluates("7 / 2", "3.5");
    assert_evaluates("1.5 * 2", "3");
    assert_evaluates("0.1 + 0.2 - 0.2", &(0.1f64 + 0.2 - 0.2).to_string());
}

#[test]
fn literals_pass_through() {
    assert_evaluates("42", "42");
    assert_evaluates(" 2.5 ", "2.5");
}

#[test]
fn function_results_are_spliced_into_arithmetic() {
    assert_evaluates("double(3)+1", "7");
    assert_evaluates("double(3) * double(2)", "24");
    assert_evaluates("1 + add(0.5, 0.25)", "1.75");
}

#[test]
fn nested_calls_evaluate_inside_out() {
    assert_evaluates("double(double(2))", "8");
    assert_evaluates("add(double(1), 2 * 3)", "8");
    assert_evaluates("double(double(1) + 1) / 4", "1.5");
}

#[test]
fn single_call_returns_its_result_verbatim() {
    assert_evaluates("shout(abc)", "ABC");
    assert_evaluates("  shout(abc)  ", "ABC");
    assert_evaluates("shout( a b )", "A B");
}

#[test]
fn calls_inside_text_parameters_are_resolved() {
    assert_evaluates("shout(word(1))", "W1");
    assert_evaluates("shout(word(1+1) and word(double(2)))", "W2 AND W4");
    assert_evaluates("echo(word(3))", "w3");
}

#[test]
fn single_call_results_are_computed_when_arithmetic() {
    assert_evaluates("echo(1+1)", "2");
    assert_evaluates("echo(7 / 2)", "3.5");
    assert_evaluates("echo(a b)", "a b");
}

#[test]
fn implicit_multiplication_requires_adjacency() {
    assert!(matches!(assert_failure("2 (3)"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert_evaluates("2(3)", "6");
    assert_evaluates("2 * (3)", "6");
}

#[test]
fn functions_must_start_on_a_name_boundary() {
    let err = assert_failure("redouble(2)");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("double_it(2)"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn each_call_is_invoked_once() {
    let mut system = system();
    system.evaluate("double(1) + double(add(1, 1))").unwrap();
    assert_eq!(system.interpreter().invocations, 3);

    system.interpreter_mut().invocations = 0;
    system.evaluate("shout(word(1))").unwrap();
    assert_eq!(system.interpreter().invocations, 1);
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(assert_failure("1 / 0"),
                     Error::Evaluation(EvaluationError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("1.5 / 0"),
                     Error::Evaluation(EvaluationError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Evaluation(EvaluationError::Overflow { .. })));
    assert!(matches!(assert_failure("x + 1"),
                     Error::Evaluation(EvaluationError::NonNumericLiteral { .. })));
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("(1 + 2"),
                     Error::Parse(ParseError::UnbalancedParentheses { .. })));
    assert!(matches!(assert_failure("1 +"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(assert_failure("1 % 2"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("double(1"),
                     Error::Parse(ParseError::UnbalancedParentheses { .. })));
}

#[test]
fn function_errors() {
    assert!(matches!(assert_failure("missing(1)"),
                     Error::Evaluation(EvaluationError::UnknownFunction { .. })));
    assert!(matches!(assert_failure("double(1, 2)"),
                     Error::Evaluation(EvaluationError::ArgumentCountMismatch { expected: 1,
                                                                                found: 2,
                                                                                .. })));
    assert!(matches!(assert_failure("double(shout(a))"),
                     Error::Evaluation(EvaluationError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("double(1.5)"),
                     Error::Evaluation(EvaluationError::InvalidArgument { .. })));
}

#[test]
fn compute_keeps_integers_integral() {
    assert_eq!(compute("6 / 3").unwrap(), Value::Integer(2));
    assert_eq!(compute("6 / 4").unwrap(), Value::from(1.5));
    assert_eq!(compute("2 * 1.5").unwrap(), Value::from(3.0));
}
