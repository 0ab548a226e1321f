use tracing::debug;

use crate::{
    arithmetic::parser::ParseResult,
    capability::{CapabilityTable, Interpreter},
    error::{Error, GrammarError},
    grammar::{
        alphabet::Alphabet,
        dispatcher::Dispatcher,
        expression::Evaluator,
        rules::{Rule, rewrite},
        scan,
        token::Token,
        tokenizer::Tokenizer,
    },
};

/// A configured parametric L-system.
///
/// Owns the alphabet, the interpreter and the interpreter's capability table.
/// Independent systems share nothing, so separate grammars can run side by
/// side as long as each has its own `LSystem`.
///
/// ## Usage
///
/// ```
/// use lsystem::{
///     capability::{CapabilityTable, Interpreter, ParamKind},
///     grammar::{alphabet::Alphabet, core::LSystem, token::format_tokens},
/// };
///
/// #[derive(Default)]
/// struct Ruler {
///     length: f64,
/// }
///
/// impl Interpreter for Ruler {
///     fn reset(&mut self) {
///         self.length = 0.0;
///     }
/// }
///
/// let table = CapabilityTable::<Ruler>::new().with_action("F", &[ParamKind::Number], |r, args| {
///                                                r.length += args[0].as_real()?;
///                                                Ok(())
///                                            });
/// let mut system = LSystem::new(Alphabet::new(&["F"], &[], &[]), table, Ruler::default());
///
/// let tokens = system.build("F(1)", &[("F(x)", "F(x/2)F(x/2)")], 2).unwrap();
/// assert_eq!(format_tokens(&tokens), "F(0.25)F(0.25)F(0.25)F(0.25)");
///
/// system.execute(&tokens).unwrap();
/// assert_eq!(system.interpreter().length, 1.0);
/// ```
pub struct LSystem<I> {
    alphabet:     Alphabet,
    capabilities: CapabilityTable<I>,
    interpreter:  I,
    token_limit:  Option<usize>,
}

impl<I: Interpreter> LSystem<I> {
    /// Creates a system with no expansion limit.
    #[must_use]
    pub fn new(alphabet: Alphabet, capabilities: CapabilityTable<I>, interpreter: I) -> Self {
        Self { alphabet,
               capabilities,
               interpreter,
               token_limit: None }
    }

    /// Bounds the length of every generated sequence.
    ///
    /// A grammar can grow exponentially with the number of iterations; with a
    /// limit set, `build` fails as soon as a generation exceeds it.
    #[must_use]
    pub fn with_token_limit(mut self, limit: usize) -> Self {
        self.token_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut I {
        &mut self.interpreter
    }

    /// Consumes the system and returns its interpreter.
    #[must_use]
    pub fn into_interpreter(self) -> I {
        self.interpreter
    }

    /// Tokenizes a symbol string with this system's alphabet.
    ///
    /// # Errors
    /// See [`Tokenizer::tokenize`].
    pub fn tokenize(&self, expr: &str) -> ParseResult<Vec<Token>> {
        Tokenizer::new(&self.alphabet).tokenize(expr)
    }

    /// Splits a parameter list into top-level parameter expressions.
    ///
    /// # Errors
    /// See [`scan::split_parameters`].
    pub fn split_parameters(&self, input: &str) -> ParseResult<Vec<String>> {
        scan::split_parameters(input)
    }

    /// Evaluates a parameter expression to its literal value.
    ///
    /// # Errors
    /// See [`Evaluator::evaluate`].
    pub fn evaluate(&mut self, expr: &str) -> Result<String, Error> {
        Evaluator::new(&self.alphabet.functions, &self.capabilities, &mut self.interpreter).evaluate(expr)
    }

    /// Rewrites `axiom` for `iterations` generations.
    ///
    /// The axiom and both sides of every rule are tokenized once up front.
    /// Zero iterations return the tokenized axiom unchanged.
    ///
    /// # Errors
    /// - A `ParseError` if the axiom or a rule fails to tokenize.
    /// - An `EvaluationError` if a successor argument fails to evaluate.
    /// - `GrammarError::ExpansionLimit` if a token limit is set and exceeded.
    pub fn build<S: AsRef<str>>(&mut self,
                                axiom: &str,
                                rules: &[(S, S)],
                                iterations: usize)
                                -> Result<Vec<Token>, Error> {
        let tokenizer = Tokenizer::new(&self.alphabet);
        let rules = rules.iter()
                         .map(|(predecessor, successor)| {
                             Ok(Rule { predecessor: tokenizer.tokenize(predecessor.as_ref())?,
                                       successor:   tokenizer.tokenize(successor.as_ref())?, })
                         })
                         .collect::<ParseResult<Vec<_>>>()?;
        let mut current = tokenizer.tokenize(axiom)?;

        let mut evaluator =
            Evaluator::new(&self.alphabet.functions, &self.capabilities, &mut self.interpreter);
        for generation in 1..=iterations {
            current = rewrite(&current, &rules, &mut evaluator)?;
            debug!(generation, length = current.len(), "rewrote generation");

            if let Some(limit) = self.token_limit
               && current.len() > limit
            {
                return Err(GrammarError::ExpansionLimit { limit,
                                                          generation,
                                                          length: current.len() }.into());
            }
        }

        Ok(current)
    }

    /// Replays a token sequence against the interpreter.
    ///
    /// # Errors
    /// See [`Dispatcher::execute`].
    pub fn execute(&mut self, tokens: &[Token]) -> Result<(), Error> {
        debug!(length = tokens.len(), "executing token sequence");
        Dispatcher::new(&self.alphabet, &self.capabilities, &mut self.interpreter).execute(tokens)
    }
}
