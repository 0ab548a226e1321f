#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating parameter
/// expressions or coercing capability arguments.
pub enum EvaluationError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The sub-expression that divided by zero.
        expression: String,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The sub-expression that overflowed.
        expression: String,
    },
    /// A real result was infinite or NaN.
    NotFinite {
        /// The sub-expression that produced the value.
        expression: String,
    },
    /// A name or other non-numeric literal appeared in arithmetic context.
    NonNumericLiteral {
        /// The offending literal.
        literal:    String,
        /// The expression containing it.
        expression: String,
    },
    /// Called a function that the capability table does not provide.
    UnknownFunction {
        /// The name of the function.
        name:       String,
        /// The call expression.
        expression: String,
    },
    /// The wrong number of arguments was supplied.
    ArgumentCountMismatch {
        /// The function or symbol name.
        name:     String,
        /// The number of arguments declared.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An argument could not be coerced to the declared parameter kind.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { expression } => {
                write!(f, "Evaluation error in '{expression}': Division by zero.")
            },
            Self::Overflow { expression } => write!(f,
                                                    "Evaluation error in '{expression}': Integer overflow while trying to compute result."),
            Self::NotFinite { expression } => {
                write!(f, "Evaluation error in '{expression}': Result is not finite.")
            },
            Self::NonNumericLiteral { literal, expression } => write!(f,
                                                                      "Evaluation error in '{expression}': '{literal}' is not a number."),
            Self::UnknownFunction { name, expression } => {
                write!(f, "Evaluation error in '{expression}': Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Evaluation error: '{name}' expects {expected} argument(s), but {found} were supplied."),
            Self::InvalidArgument { details } => {
                write!(f, "Evaluation error: Invalid argument: {details}.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
