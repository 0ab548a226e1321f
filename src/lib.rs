//! # lsystem
//!
//! lsystem is a parametric Lindenmayer system engine written in Rust.
//! It tokenizes grammars whose symbols carry arithmetic parameter expressions,
//! rewrites them for a number of generations, and replays the result against a
//! pluggable interpreter through an explicit table of named capabilities.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ConfigError,
    grammar::{config::GrammarConfig, core::LSystem, token::Token},
    turtle::{Segment, Turtle},
};

/// Evaluates pure arithmetic parameter expressions.
///
/// This module is a small self-contained infix evaluator: a lexer, a
/// recursive-descent parser and a tree-walking evaluator for `+ - * /`, unary
/// signs, parentheses and decimal literals.
///
/// # Responsibilities
/// - Turns expression text into tokens and an expression tree.
/// - Computes integer results where exact and real results otherwise.
/// - Reports malformed syntax and arithmetic failures precisely.
pub mod arithmetic;
/// Defines the structure of parsed arithmetic.
///
/// This module declares the `Expr` enum and the operator types built by the
/// arithmetic parser and walked by its evaluator.
pub mod ast;
/// Declares the interpreter seam.
///
/// This module defines the `Interpreter` trait and the `CapabilityTable` that
/// maps symbol names to typed callables. The engine reaches an interpreter only
/// through these two.
pub mod capability;
/// Provides unified error types for parsing, evaluation and dispatch.
///
/// This module defines all errors that can be raised while tokenizing,
/// evaluating, rewriting or executing a grammar, and while loading a grammar
/// description.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Names the offending expression or symbol in each error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the grammar engine.
///
/// This module contains everything between a symbol string and an interpreter:
/// alphabet, tokenizer, parameter expression evaluation, parametric rewriting,
/// dispatch and grammar configuration.
pub mod grammar;
/// A reference interpreter that records 2D turtle geometry.
pub mod turtle;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;
/// Defines the literal values exchanged with capabilities.
pub mod value;

/// Creates a turtle-backed system for a grammar description.
///
/// The turtle is seeded from the description when it names a seed, and from
/// system entropy otherwise. A `max_tokens` setting becomes the system's token
/// limit.
///
/// # Errors
/// Returns `ConfigError::InvalidConstant` if a constant is not a single
/// character.
pub fn turtle_system(config: &GrammarConfig) -> Result<LSystem<Turtle>, ConfigError> {
    let turtle = config.seed.map_or_else(Turtle::default, Turtle::new);
    let system = LSystem::new(config.alphabet()?, Turtle::capabilities(), turtle);

    Ok(match config.max_tokens {
        Some(limit) => system.with_token_limit(limit),
        None => system,
    })
}

/// Builds a grammar description and replays it on a turtle.
///
/// Returns the final token sequence together with the segments the turtle
/// recorded.
///
/// # Errors
/// Returns an error if the description is invalid, or if building or
/// executing the grammar fails.
///
/// # Examples
/// ```
/// use lsystem::{grammar::config::GrammarConfig, grow};
///
/// let config = GrammarConfig::from_json_str(r#"{
///     "variables": ["fwd", "rot"],
///     "constants": ["[", "]"],
///     "axiom": "fwd(1,1)",
///     "rules": [["fwd(l,t)", "fwd(l,t)[rot(30)fwd(l/2,t)]"]],
///     "iterations": 1
/// }"#).unwrap();
///
/// let (tokens, segments) = grow(&config).unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(segments.len(), 2);
///
/// // A grammar naming an undeclared constant fails to execute.
/// let config = GrammarConfig::from_json_str(r#"{
///     "variables": ["fwd"],
///     "constants": ["+"],
///     "axiom": "fwd(1,1)+",
///     "iterations": 0
/// }"#).unwrap();
/// assert!(grow(&config).is_err());
/// ```
pub fn grow(config: &GrammarConfig) -> Result<(Vec<Token>, Vec<Segment>), Box<dyn std::error::Error>> {
    let mut system = turtle_system(config)?;
    let tokens = system.build(&config.axiom, &config.rules, config.iterations)?;
    system.execute(&tokens)?;

    let segments = system.into_interpreter().segments().to_vec();
    Ok((tokens, segments))
}
