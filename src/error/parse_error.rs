#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// A `(` was never closed, or a `)` appeared without an opening `(`.
    UnbalancedParentheses {
        /// The expression containing the unbalanced group.
        expression: String,
    },
    /// A parameter list contained an empty parameter, as in `F(1,,2)`.
    EmptyParameter {
        /// The parameter list that was being split.
        expression: String,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:      String,
        /// The expression being parsed.
        expression: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The expression being parsed.
        expression: String,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:      String,
        /// The expression being parsed.
        expression: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { expression } => {
                write!(f, "Parse error in '{expression}': Unbalanced parentheses.")
            },

            Self::EmptyParameter { expression } => {
                write!(f, "Parse error in '{expression}': Empty parameter in parameter list.")
            },

            Self::UnexpectedToken { token, expression } => {
                write!(f, "Parse error in '{expression}': Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { expression } => {
                write!(f, "Parse error in '{expression}': Unexpected end of input.")
            },

            Self::UnexpectedTrailingTokens { token, expression } => write!(f,
                                                                           "Parse error in '{expression}': Extra tokens after expression, starting at {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
