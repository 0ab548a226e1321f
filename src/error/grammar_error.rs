#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised by the grammar itself rather than by a single
/// expression.
pub enum GrammarError {
    /// A dispatched token is neither a registered constant nor a registered
    /// variable.
    NotAVariable {
        /// The token name.
        name: String,
    },
    /// A variable was dispatched with a different number of arguments than its
    /// capability declares.
    ArityMismatch {
        /// The variable name.
        name:     String,
        /// The number of parameters the capability declares.
        expected: usize,
        /// The number of arguments the token carries.
        found:    usize,
    },
    /// The interpreter does not understand a constant.
    UnknownConstant {
        /// The constant character.
        constant: char,
    },
    /// A pop was requested on an empty state stack.
    StackUnderflow {
        /// The constant that requested the pop.
        constant: char,
    },
    /// The rewritten sequence grew past the configured token limit.
    ExpansionLimit {
        /// The configured limit.
        limit:      usize,
        /// The generation (1-based) that exceeded it.
        generation: usize,
        /// The length the sequence reached.
        length:     usize,
    },
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAVariable { name } => write!(f, "Grammar error: {name} is not a valid variable."),
            Self::ArityMismatch { name, expected, found } => write!(f,
                                                                    "Grammar error: '{name}' takes {expected} argument(s), but the token carries {found}."),
            Self::UnknownConstant { constant } => {
                write!(f, "Grammar error: Unknown constant: {constant}.")
            },
            Self::StackUnderflow { constant } => {
                write!(f, "Grammar error: '{constant}' popped an empty state stack.")
            },
            Self::ExpansionLimit { limit, generation, length } => write!(f,
                                                                         "Grammar error: Generation {generation} produced {length} tokens, exceeding the limit of {limit}."),
        }
    }
}

impl std::error::Error for GrammarError {}
