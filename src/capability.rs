use std::collections::HashMap;

use crate::{
    error::{EvaluationError, GrammarError},
    value::Value,
};

/// The host side of an L-system: whatever turns dispatched symbols into
/// effects.
///
/// The engine only relies on the two operations below plus the named
/// capabilities registered in a [`CapabilityTable`]. What the interpreter keeps
/// on its state stack is opaque to the engine.
pub trait Interpreter {
    /// Reinitializes interpreter-owned state before a sequence is replayed.
    fn reset(&mut self);

    /// Performs a stack-control action such as `[` (push) or `]` (pop).
    ///
    /// The default understands no constants at all.
    ///
    /// # Errors
    /// Returns `GrammarError::UnknownConstant` for constants the interpreter
    /// does not handle.
    fn apply_constant(&mut self, constant: char) -> Result<(), GrammarError> {
        Err(GrammarError::UnknownConstant { constant })
    }
}

/// The declared kind of a capability parameter.
///
/// Grammars carry every argument as text; the kind decides how that text is
/// coerced before the capability is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Parsed as an integer if possible, else as a decimal.
    Number,
    /// Passed through unchanged.
    Text,
}

impl ParamKind {
    /// Coerces a literal argument string to this kind.
    ///
    /// # Errors
    /// Returns `EvaluationError::InvalidArgument` if a `Number` parameter
    /// receives text that is not a finite number.
    ///
    /// # Example
    /// ```
    /// use lsystem::{capability::ParamKind, value::Value};
    ///
    /// assert_eq!(ParamKind::Number.coerce("7").unwrap(), Value::Integer(7));
    /// assert_eq!(ParamKind::Text.coerce("7").unwrap(), Value::from("7"));
    /// assert!(ParamKind::Number.coerce("seven").is_err());
    /// ```
    pub fn coerce(self, arg: &str) -> Result<Value, EvaluationError> {
        match self {
            Self::Number => Value::parse_number(arg).ok_or_else(|| {
                                                         EvaluationError::InvalidArgument {
                    details: format!("expected a number, found '{}'", arg.trim()),
                }
                                                     }),
            Self::Text => Ok(Value::Text(arg.to_string())),
        }
    }
}

/// Handler type for variable capabilities: side effects, no return value.
pub type ActionFn<I> = fn(&mut I, &[Value]) -> Result<(), EvaluationError>;

/// Handler type for function capabilities: a single return value.
pub type FunctionFn<I> = fn(&mut I, &[Value]) -> Result<Value, EvaluationError>;

/// A named, typed callable exposed by an interpreter.
pub struct Capability<F> {
    /// Declared parameter kinds, in order.
    pub params: Vec<ParamKind>,
    /// The handler.
    pub func:   F,
}

impl<F> Capability<F> {
    /// Checks that `found` arguments satisfy the declared arity.
    #[must_use]
    pub fn accepts(&self, found: usize) -> bool {
        self.params.len() == found
    }

    /// Coerces literal argument strings to the declared parameter kinds.
    ///
    /// # Errors
    /// Returns `EvaluationError::InvalidArgument` if any argument fails to
    /// coerce.
    pub fn coerce_all<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<Value>, EvaluationError> {
        self.params
            .iter()
            .zip(args)
            .map(|(kind, arg)| kind.coerce(arg.as_ref()))
            .collect()
    }
}

/// Maps symbol names to interpreter capabilities.
///
/// Actions back the grammar's variables; functions back the names usable
/// inside parameter expressions. The table is built once when the system is
/// configured and then only read.
///
/// # Example
/// ```
/// use lsystem::{
///     capability::{CapabilityTable, Interpreter, ParamKind},
///     value::Value,
/// };
///
/// #[derive(Default)]
/// struct Counter {
///     steps: i64,
/// }
///
/// impl Interpreter for Counter {
///     fn reset(&mut self) {
///         self.steps = 0;
///     }
/// }
///
/// let table = CapabilityTable::<Counter>::new().with_action("step", &[ParamKind::Number], |c, args| {
///                                                   c.steps += args[0].as_integer()?;
///                                                   Ok(())
///                                               })
///                                               .with_function("twice", &[ParamKind::Number], |_, args| {
///                                                   Ok(Value::from(args[0].as_real()? * 2.0))
///                                               });
///
/// assert!(table.action("step").is_some());
/// assert!(table.function("twice").is_some());
/// assert!(table.function("step").is_none());
/// ```
pub struct CapabilityTable<I> {
    actions:   HashMap<String, Capability<ActionFn<I>>>,
    functions: HashMap<String, Capability<FunctionFn<I>>>,
}

impl<I> Default for CapabilityTable<I> {
    fn default() -> Self {
        Self { actions:   HashMap::new(),
               functions: HashMap::new(), }
    }
}

impl<I> CapabilityTable<I> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable capability.
    #[must_use]
    pub fn with_action(mut self, name: &str, params: &[ParamKind], func: ActionFn<I>) -> Self {
        self.actions.insert(name.to_string(),
                            Capability { params: params.to_vec(),
                                         func });
        self
    }

    /// Registers a function capability.
    #[must_use]
    pub fn with_function(mut self, name: &str, params: &[ParamKind], func: FunctionFn<I>) -> Self {
        self.functions.insert(name.to_string(),
                              Capability { params: params.to_vec(),
                                           func });
        self
    }

    /// Looks up a variable capability by name.
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&Capability<ActionFn<I>>> {
        self.actions.get(name)
    }

    /// Looks up a function capability by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Capability<FunctionFn<I>>> {
        self.functions.get(name)
    }
}
