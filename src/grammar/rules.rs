use tracing::trace;

use crate::{
    error::{Error, EvaluationError},
    grammar::{expression::Evaluator, scan::substitute_identifiers, token::Token},
    value::Value,
};

/// A parametric production rule.
///
/// The predecessor's argument expressions are formal parameter names; the
/// successor's argument expressions may refer to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The token sequence this rule replaces.
    pub predecessor: Vec<Token>,
    /// The token templates that replace it.
    pub successor:   Vec<Token>,
}

impl Rule {
    /// Tests whether the predecessor matches a prefix of `sequence`.
    ///
    /// Only names are compared. An empty predecessor never matches.
    ///
    /// # Example
    /// ```
    /// use lsystem::grammar::{rules::Rule, token::Token};
    ///
    /// let rule = Rule { predecessor: vec![Token::with_args("A", vec!["x"])],
    ///                   successor:   vec![Token::new("B")], };
    ///
    /// assert!(rule.matches_at(&[Token::with_args("A", vec!["1", "2"]), Token::new("C")]));
    /// assert!(!rule.matches_at(&[Token::new("C")]));
    /// ```
    #[must_use]
    pub fn matches_at(&self, sequence: &[Token]) -> bool {
        !self.predecessor.is_empty()
        && sequence.len() >= self.predecessor.len()
        && self.predecessor
               .iter()
               .zip(sequence)
               .all(|(formal, actual)| formal.name == actual.name)
    }

    /// Produces the successor tokens for a matched slice.
    ///
    /// The successor templates are cloned. For each cloned token with
    /// arguments, every formal parameter of the predecessor is bound to the
    /// matched token's argument at the same position, substituted by whole
    /// identifier, and each argument is then evaluated to a literal.
    ///
    /// # Errors
    /// Returns `EvaluationError::ArgumentCountMismatch` if a matched token has
    /// fewer arguments than the predecessor names, and propagates any
    /// evaluation failure.
    pub fn instantiate<I>(&self,
                          matched: &[Token],
                          evaluator: &mut Evaluator<'_, I>)
                          -> Result<Vec<Token>, Error> {
        let mut successor = self.successor.clone();
        if successor.iter().all(|token| token.args.is_none()) {
            return Ok(successor);
        }

        let bindings = self.bind(matched)?;
        for token in &mut successor {
            let Some(args) = token.args.as_mut() else {
                continue;
            };
            for arg in args.iter_mut() {
                let substituted = substitute_identifiers(arg, &bindings);
                *arg = evaluator.evaluate(&substituted)?;
            }
        }
        Ok(successor)
    }

    /// Pairs every formal parameter name with the matched actual value.
    fn bind(&self, matched: &[Token]) -> Result<Vec<(String, String)>, EvaluationError> {
        let mut bindings = Vec::new();
        for (formal, actual) in self.predecessor.iter().zip(matched) {
            let Some(names) = &formal.args else {
                continue;
            };
            for (index, name) in names.iter().enumerate() {
                let value = actual.args
                                  .as_ref()
                                  .and_then(|args| args.get(index))
                                  .ok_or_else(|| EvaluationError::ArgumentCountMismatch {
                                      name:     actual.name.clone(),
                                      expected: names.len(),
                                      found:    actual.arity(),
                                  })?;
                bindings.push((name.trim().to_string(), bound_value(value)));
            }
        }
        Ok(bindings)
    }
}

/// Formats an actual argument for textual substitution.
///
/// Single numeric literals are inserted as they are; anything else, such as an
/// unevaluated axiom argument `1+1`, is parenthesized so that it keeps its
/// precedence inside the successor expression.
fn bound_value(actual: &str) -> String {
    let actual = actual.trim();
    if Value::parse_number(actual).is_some() {
        actual.to_string()
    } else {
        format!("({actual})")
    }
}

/// Runs one generation of rewriting.
///
/// The sequence is scanned from the front. At each position the rules are
/// tried in declaration order and the first whose predecessor matches is
/// applied; the cursor then skips the matched tokens. Where no rule matches,
/// the token is copied unchanged.
///
/// # Errors
/// Propagates the first instantiation failure.
pub fn rewrite<I>(current: &[Token],
                  rules: &[Rule],
                  evaluator: &mut Evaluator<'_, I>)
                  -> Result<Vec<Token>, Error> {
    let mut next = Vec::with_capacity(current.len());
    let mut cursor = 0;

    while cursor < current.len() {
        let rest = &current[cursor..];
        if let Some((index, rule)) = rules.iter().enumerate().find(|(_, rule)| rule.matches_at(rest)) {
            let matched = &rest[..rule.predecessor.len()];
            trace!(rule = index, position = cursor, "applying rule");
            next.extend(rule.instantiate(matched, evaluator)?);
            cursor += matched.len();
        } else {
            next.push(rest[0].clone());
            cursor += 1;
        }
    }

    Ok(next)
}
