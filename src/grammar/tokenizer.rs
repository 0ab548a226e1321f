use crate::{
    arithmetic::parser::ParseResult,
    grammar::{
        alphabet::Alphabet,
        scan::{matching_paren, split_parameters},
        token::Token,
    },
};

/// Splits symbol strings into tokens according to an alphabet.
///
/// The tokenizer never stops early: any input that matches neither a constant
/// nor a variable becomes a single opaque token holding the rest of the input,
/// which the dispatcher later rejects.
pub struct Tokenizer<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Tokenizes a whole symbol string.
    ///
    /// # Errors
    /// Returns a `ParseError` if a parameter list is unbalanced or contains an
    /// empty parameter.
    ///
    /// # Example
    /// ```
    /// use lsystem::grammar::{alphabet::Alphabet, token::Token, tokenizer::Tokenizer};
    ///
    /// let alphabet = Alphabet::new(&["fwd", "rot"], &["randrange"], &['[', ']']);
    /// let tokens = Tokenizer::new(&alphabet).tokenize("fwd(1, randrange(0,2)) [rot(30)]").unwrap();
    ///
    /// assert_eq!(tokens,
    ///            vec![Token::with_args("fwd", vec!["1", " randrange(0,2)"]),
    ///                 Token::new("["),
    ///                 Token::with_args("rot", vec!["30"]),
    ///                 Token::new("]")]);
    /// ```
    pub fn tokenize(&self, expr: &str) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut remaining = expr.trim();
        while !remaining.is_empty() {
            let (token, rest) = self.parse_one(remaining)?;
            tokens.push(token);
            remaining = rest;
        }
        Ok(tokens)
    }

    /// Parses one token off the front of `input` and returns it with the
    /// trimmed remainder.
    ///
    /// `input` must already be trimmed.
    fn parse_one<'s>(&self, input: &'s str) -> ParseResult<(Token, &'s str)> {
        if let Some(c) = input.chars().next()
           && self.alphabet.is_constant(c)
        {
            return Ok((Token::new(c), input[c.len_utf8()..].trim()));
        }

        for variable in &self.alphabet.variables {
            if variable.is_empty() {
                continue;
            }
            let Some(rest) = input.strip_prefix(variable.as_str()) else {
                continue;
            };
            let rest = rest.trim();
            if !rest.starts_with('(') {
                return Ok((Token::new(variable.as_str()), rest));
            }

            let close = matching_paren(rest, 0)?;
            let args = split_parameters(&rest[1..close])?;
            return Ok((Token::with_args(variable.as_str(), args), rest[close + 1..].trim()));
        }

        Ok((Token::new(input), ""))
    }
}
