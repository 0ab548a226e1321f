/// The alphabet module declares the symbols a grammar is written in.
///
/// An alphabet lists variable names, function names and single-character
/// constants. Declaration order matters: it decides which name wins when one
/// is a prefix of another.
pub mod alphabet;
/// The config module loads complete grammar descriptions from JSON.
///
/// # Responsibilities
/// - Deserializes alphabet, axiom, rules and iteration count.
/// - Validates that every constant is a single character.
/// - Carries optional run settings such as a token limit and a random seed.
pub mod config;
/// The core module ties the grammar pieces into a runnable system.
///
/// `LSystem` owns the alphabet, the interpreter and its capability table and
/// exposes the build (rewrite) and execute (dispatch) phases.
pub mod core;
/// The dispatcher replays a finished token sequence against the interpreter.
pub mod dispatcher;
/// The expression module evaluates parameter expressions.
///
/// Embedded function calls are resolved bottom-up through the capability
/// table, and the remaining arithmetic is computed to a literal.
pub mod expression;
/// The rules module implements parametric production rules and one generation
/// of first-match rewriting.
pub mod rules;
/// Low-level text scanning shared by the tokenizer and the evaluator.
///
/// # Responsibilities
/// - Matches parentheses and splits parameter lists at top-level commas.
/// - Locates function calls inside an expression.
/// - Substitutes whole identifiers with bound values.
pub mod scan;
/// The token module defines a grammar symbol with optional parameters.
pub mod token;
/// The tokenizer splits a symbol string into tokens using an alphabet.
///
/// Constants are tried first, then variables in declaration order. A variable
/// followed by `(` takes the balanced group as its parameter list.
pub mod tokenizer;
