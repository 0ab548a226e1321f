use lsystem::{
    capability::{CapabilityTable, Interpreter, ParamKind},
    error::{Error, EvaluationError, GrammarError},
    grammar::{alphabet::Alphabet, core::LSystem, token::Token},
    turtle::Turtle,
    value::Value,
};

/// Records every call it receives.
#[derive(Default)]
struct Recorder {
    calls:  Vec<String>,
    depth:  usize,
    resets: usize,
}

impl Interpreter for Recorder {
    fn reset(&mut self) {
        self.calls.clear();
        self.depth = 0;
        self.resets += 1;
    }

    fn apply_constant(&mut self, constant: char) -> Result<(), GrammarError> {
        match constant {
            '[' => self.depth += 1,
            ']' => {
                self.depth = self.depth
                                 .checked_sub(1)
                                 .ok_or(GrammarError::StackUnderflow { constant })?;
            },
            _ => return Err(GrammarError::UnknownConstant { constant }),
        }
        self.calls.push(constant.to_string());
        Ok(())
    }
}

fn record(recorder: &mut Recorder, name: &str, args: &[Value]) {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    recorder.calls.push(format!("{name}({})", args.join(",")));
}

fn system() -> LSystem<Recorder> {
    let table =
        CapabilityTable::<Recorder>::new().with_action("fwd", &[ParamKind::Number, ParamKind::Number], |r, args| {
                                              record(r, "fwd", args);
                                              Ok(())
                                          })
                                          .with_action("rot", &[ParamKind::Number], |r, args| {
                                              record(r, "rot", args);
                                              Ok(())
                                          })
                                          .with_action("say", &[ParamKind::Text], |r, args| {
                                              record(r, "say", args);
                                              Ok(())
                                          })
                                          .with_action("halt", &[], |_, _| {
                                              Err(EvaluationError::InvalidArgument { details: "halted".to_string() })
                                          });
    let alphabet = Alphabet::new(&["fwd", "rot", "say", "halt", "X"], &[], &['[', ']', '!']);
    LSystem::new(alphabet, table, Recorder::default())
}

fn run(src: &str) -> Result<Vec<String>, Error> {
    let mut system = system();
    let tokens = system.tokenize(src)?;
    system.execute(&tokens)?;
    Ok(system.into_interpreter().calls)
}

fn assert_trace(src: &str, expected: &[&str]) {
    match run(src) {
        Ok(calls) => assert_eq!(calls, expected, "executing '{src}'"),
        Err(e) => panic!("Executing '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(calls) => panic!("'{src}' executed as {calls:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn tokens_are_dispatched_in_order() {
    assert_trace("fwd(1,0.5)[rot(30)fwd(2,1)]rot(-15)",
                 &["fwd(1,0.5)", "[", "rot(30)", "fwd(2,1)", "]", "rot(-15)"]);
}

#[test]
fn arguments_are_coerced_to_declared_kinds() {
    assert_trace("say(hello)fwd( 3 , 2.50 )", &["say(hello)", "fwd(3,2.5)"]);
}

#[test]
fn unknown_symbol_is_not_a_variable() {
    assert_eq!(assert_failure("fwd(1,1)Q"),
               Error::Grammar(GrammarError::NotAVariable { name: "Q".to_string() }));
}

#[test]
fn variable_without_capability_is_skipped() {
    assert_trace("X rot(1) X(2) X", &["rot(1)"]);
}

#[test]
fn arity_mismatch_halts_execution() {
    assert_eq!(assert_failure("fwd(1)"),
               Error::Grammar(GrammarError::ArityMismatch { name:     "fwd".to_string(),
                                                            expected: 2,
                                                            found:    1, }));
    assert!(matches!(assert_failure("rot"), Error::Grammar(GrammarError::ArityMismatch { .. })));
}

#[test]
fn uncoercible_argument_halts_execution() {
    assert!(matches!(assert_failure("rot(abc)"),
                     Error::Evaluation(EvaluationError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("rot(1+1)"),
                     Error::Evaluation(EvaluationError::InvalidArgument { .. })));
}

#[test]
fn interpreter_errors_propagate() {
    assert!(matches!(assert_failure("halt"),
                     Error::Evaluation(EvaluationError::InvalidArgument { .. })));
    assert_eq!(assert_failure("]"),
               Error::Grammar(GrammarError::StackUnderflow { constant: ']' }));
    assert_eq!(assert_failure("!"),
               Error::Grammar(GrammarError::UnknownConstant { constant: '!' }));
}

#[test]
fn execute_resets_the_interpreter_first() {
    let mut system = system();
    let tokens = vec![Token::with_args("rot", vec!["5"])];

    system.execute(&tokens).unwrap();
    system.execute(&tokens).unwrap();

    assert_eq!(system.interpreter().calls, vec!["rot(5)"]);
    assert_eq!(system.interpreter().resets, 2);
}

#[test]
fn built_sequences_replay_on_a_turtle() {
    let alphabet = Alphabet::new(&["fwd", "rot"], &[], &['[', ']']);
    let mut system = LSystem::new(alphabet, Turtle::capabilities(), Turtle::new(1));

    let tokens = system.build("fwd(1,1)", &[("fwd(l,t)", "fwd(l,t)[rot(90)fwd(l,t/2)]fwd(l,t)")], 1)
                       .unwrap();
    system.execute(&tokens).unwrap();

    let turtle = system.interpreter();
    let segments = turtle.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].thickness, 0.5);
    assert!((segments[1].to.0 - 1.0).abs() < 1e-9);
    assert!((segments[1].to.1 - 1.0).abs() < 1e-9);
    assert_eq!(segments[2].from, (0.0, 1.0));
    assert_eq!(turtle.position(), (0.0, 2.0));
    assert_eq!(turtle.rotation(), 0.0);
    assert_eq!(turtle.depth(), 0);
}

#[test]
fn turtle_rejects_unknown_constants_and_underflow() {
    let alphabet = Alphabet::new(&["fwd"], &[], &['[', ']', '+']);
    let mut system = LSystem::new(alphabet, Turtle::capabilities(), Turtle::new(0));

    let tokens = system.tokenize("fwd(1,1)]").unwrap();
    assert_eq!(system.execute(&tokens).unwrap_err(),
               Error::Grammar(GrammarError::StackUnderflow { constant: ']' }));

    let tokens = system.tokenize("+").unwrap();
    assert_eq!(system.execute(&tokens).unwrap_err(),
               Error::Grammar(GrammarError::UnknownConstant { constant: '+' }));
}
