use std::fmt;

/// One grammar symbol with an optional ordered parameter list.
///
/// Tokens compare by name when rules are matched; arguments are only bound,
/// never compared. `args` is `None` for constants and for variables written
/// without parameters, and otherwise holds at least one expression string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The symbol name.
    pub name: String,
    /// Parameter expressions, replaced by literal values once evaluated.
    pub args: Option<Vec<String>>,
}

impl Token {
    /// Creates a token without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               args: None }
    }

    /// Creates a token with parameters.
    ///
    /// An empty list is normalized to `None`.
    #[must_use]
    pub fn with_args<S: Into<String>>(name: impl Into<String>, args: Vec<S>) -> Self {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self { name: name.into(),
               args: if args.is_empty() { None } else { Some(args) } }
    }

    /// Number of parameters, zero when `args` is `None`.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args.as_ref().map_or(0, Vec::len)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(args) = &self.args {
            write!(f, "({})", args.join(","))?;
        }
        Ok(())
    }
}

/// Renders a token sequence in grammar notation.
///
/// # Example
/// ```
/// use lsystem::grammar::token::{Token, format_tokens};
///
/// let tokens = vec![Token::with_args("fwd", vec!["1", "0.5"]), Token::new("["), Token::new("rot")];
/// assert_eq!(format_tokens(&tokens), "fwd(1,0.5)[rot");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// Returns only the names of a token sequence.
#[must_use]
pub fn token_names(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.name.as_str()).collect()
}
