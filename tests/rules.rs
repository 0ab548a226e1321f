use lsystem::{
    capability::{CapabilityTable, Interpreter},
    error::{Error, EvaluationError, GrammarError},
    grammar::{
        alphabet::Alphabet,
        core::LSystem,
        token::{Token, format_tokens, token_names},
    },
    turtle::Turtle,
};

struct Blank;

impl Interpreter for Blank {
    fn reset(&mut self) {}
}

fn system(variables: &[&str], constants: &[char]) -> LSystem<Blank> {
    LSystem::new(Alphabet::new(variables, &[], constants), CapabilityTable::new(), Blank)
}

fn grow(variables: &[&str], axiom: &str, rules: &[(&str, &str)], iterations: usize) -> String {
    let tokens = system(variables, &['[', ']']).build(axiom, rules, iterations)
                                               .unwrap_or_else(|e| panic!("Failed to grow '{axiom}': {e}"));
    format_tokens(&tokens)
}

fn assert_grow_failure(variables: &[&str], axiom: &str, rules: &[(&str, &str)], iterations: usize) -> Error {
    match system(variables, &[]).build(axiom, rules, iterations) {
        Ok(tokens) => panic!("'{axiom}' grew to '{}' but was expected to fail", format_tokens(&tokens)),
        Err(e) => e,
    }
}

#[test]
fn zero_iterations_return_the_tokenized_axiom() {
    let mut system = system(&["fwd", "rot"], &['[', ']']);
    let axiom = "fwd(1, 2)[rot(30)fwd(1+1, 2)]";
    let built = system.build(axiom, &[("fwd(l,t)", "fwd(l*2,t)")], 0).unwrap();
    assert_eq!(built, system.tokenize(axiom).unwrap());
}

#[test]
fn branching_grammar_literal_sequences() {
    let variables = ["F", "+"];
    let rules = [("F", "F[+F]F")];
    let system = system(&variables, &['[', ']']);

    let mut system = system;
    let once = system.build("F", &rules, 1).unwrap();
    assert_eq!(token_names(&once), vec!["F", "[", "+", "F", "]", "F"]);

    let twice = system.build("F", &rules, 2).unwrap();
    assert_eq!(token_names(&twice),
               vec!["F", "[", "+", "F", "]", "F", "[", "+", "F", "[", "+", "F", "]", "F", "]", "F",
                    "[", "+", "F", "]", "F"]);
    assert!(twice.iter().all(|t| t.args.is_none()));
}

#[test]
fn first_matching_rule_wins() {
    let rules = [("A", "B"), ("A(x)", "C(x)")];
    assert_eq!(grow(&["A", "B", "C"], "A(1)", &rules, 1), "B");

    let rules = [("A(x)", "C(x)"), ("A", "B")];
    assert_eq!(grow(&["A", "B", "C"], "A(1)", &rules, 1), "C(1)");
}

#[test]
fn longer_predecessors_consume_several_tokens() {
    let rules = [("L(n)F(l)", "L(n+1)F(l/2)[L(n+1)F(l/2)]")];
    assert_eq!(grow(&["L", "F"], "L(0)F(1)", &rules, 1), "L(1)F(0.5)[L(1)F(0.5)]");
    assert_eq!(grow(&["L", "F"], "L(0)F(1)", &rules, 2),
               "L(2)F(0.25)[L(2)F(0.25)][L(2)F(0.25)[L(2)F(0.25)]]");
}

#[test]
fn unmatched_tokens_are_copied_unchanged() {
    let rules = [("A(x)", "A(x+1)")];
    assert_eq!(grow(&["A", "B"], "B(7)[A(1)]B", &rules, 3), "B(7)[A(4)]B");
}

#[test]
fn substitution_respects_identifier_boundaries() {
    let rules = [("A(x,x1)", "B(x1*10+x)")];
    assert_eq!(grow(&["A", "B"], "A(1,2)", &rules, 1), "B(21)");
}

#[test]
fn bindings_are_applied_simultaneously() {
    let rules = [("A(x,y)", "A(y,x)")];
    assert_eq!(grow(&["A"], "A(1,2)", &rules, 1), "A(2,1)");
    assert_eq!(grow(&["A"], "A(1,2)", &rules, 2), "A(1,2)");
}

#[test]
fn unevaluated_actuals_keep_their_precedence() {
    let rules = [("A(x)", "A(x*3)")];
    assert_eq!(grow(&["A"], "A(1+1)", &rules, 1), "A(6)");
    assert_eq!(grow(&["A"], "A(-2)", &rules, 1), "A(-6)");
}

#[test]
fn parameterless_successors_are_copied() {
    let rules = [("A(x)", "B[B]")];
    assert_eq!(grow(&["A", "B"], "A(5)", &rules, 1), "B[B]");
}

#[test]
fn empty_predecessor_never_matches() {
    assert_eq!(grow(&["A"], "A", &[("", "AA")], 3), "A");
}

#[test]
fn missing_actual_argument_is_an_error() {
    let err = assert_grow_failure(&["A"], "A", &[("A(x)", "A(x+1)")], 1);
    assert!(matches!(err,
                     Error::Evaluation(EvaluationError::ArgumentCountMismatch { expected: 1,
                                                                                found: 0,
                                                                                .. })));
}

#[test]
fn evaluation_errors_abort_the_build() {
    let err = assert_grow_failure(&["A"], "A(0)", &[("A(x)", "A(1/x)")], 1);
    assert!(matches!(err, Error::Evaluation(EvaluationError::DivisionByZero { .. })));

    let err = assert_grow_failure(&["A"], "A(1)", &[("A(x)", "A(y)")], 1);
    assert!(matches!(err, Error::Evaluation(EvaluationError::NonNumericLiteral { .. })));
}

#[test]
fn token_limit_stops_runaway_growth() {
    let mut system = system(&["F"], &[]).with_token_limit(10);
    let err = system.build("F", &[("F", "FF")], 8).unwrap_err();
    assert_eq!(err,
               Error::Grammar(GrammarError::ExpansionLimit { limit:      10,
                                                             generation: 4,
                                                             length:     16, }));

    let tokens = system.build("F", &[("F", "FF")], 3).unwrap();
    assert_eq!(tokens.len(), 8);
}

#[test]
fn seeded_builds_are_deterministic() {
    let alphabet = || Alphabet::new(&["fwd", "rot"], &["randrange"], &['[', ']']);
    let rules = [("fwd(l)", "fwd(l)[rot(randrange(10,50))fwd(l/2)]")];
    let build = |seed| {
        LSystem::new(alphabet(), Turtle::capabilities(), Turtle::new(seed)).build("fwd(1)", &rules, 3)
                                                                        .unwrap()
    };

    let first = build(7);
    assert_eq!(first, build(7));

    for token in first.iter().filter(|t| t.name == "rot") {
        let angle: i64 = token.args.as_ref().unwrap()[0].parse().unwrap();
        assert!((10..50).contains(&angle), "angle {angle} out of range");
    }
}

#[test]
fn independent_systems_do_not_interfere() {
    let mut a = system(&["A"], &[]);
    let mut b = system(&["B"], &[]);

    let grown_a = a.build("A(1)", &[("A(x)", "A(x+1)")], 2).unwrap();
    let grown_b = b.build("B(1)", &[("B(x)", "B(x*10)")], 2).unwrap();

    assert_eq!(grown_a, vec![Token::with_args("A", vec!["3"])]);
    assert_eq!(grown_b, vec![Token::with_args("B", vec!["100"])]);
}
