use tracing::{trace, warn};

use crate::{
    capability::{CapabilityTable, Interpreter},
    error::{Error, GrammarError},
    grammar::{alphabet::Alphabet, token::Token},
};

/// Replays a token sequence against an interpreter.
///
/// The dispatcher holds no state of its own between calls; every effect lands
/// in the interpreter.
pub struct Dispatcher<'a, I> {
    alphabet:     &'a Alphabet,
    capabilities: &'a CapabilityTable<I>,
    interpreter:  &'a mut I,
}

impl<'a, I: Interpreter> Dispatcher<'a, I> {
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet,
                     capabilities: &'a CapabilityTable<I>,
                     interpreter: &'a mut I)
                     -> Self {
        Self { alphabet,
               capabilities,
               interpreter }
    }

    /// Resets the interpreter, then dispatches every token in order.
    ///
    /// - A registered constant is applied through
    ///   [`Interpreter::apply_constant`].
    /// - A registered variable invokes its action capability with arguments
    ///   coerced to the declared kinds. A variable without a capability is
    ///   skipped.
    /// - Anything else halts execution.
    ///
    /// # Errors
    /// - `GrammarError::NotAVariable` for a token that is neither a constant
    ///   nor a variable.
    /// - `GrammarError::ArityMismatch` if a token's argument count differs from
    ///   the capability's.
    /// - `EvaluationError::InvalidArgument` if an argument fails to coerce.
    /// - Any error raised by the interpreter itself.
    pub fn execute(&mut self, tokens: &[Token]) -> Result<(), Error> {
        self.interpreter.reset();

        for token in tokens {
            if let Some(constant) = self.alphabet.constant_of(&token.name) {
                self.interpreter.apply_constant(constant)?;
            } else if self.alphabet.is_variable(&token.name) {
                self.dispatch_variable(token)?;
            } else {
                return Err(GrammarError::NotAVariable { name: token.name.clone() }.into());
            }
        }

        Ok(())
    }

    fn dispatch_variable(&mut self, token: &Token) -> Result<(), Error> {
        let capabilities = self.capabilities;
        let Some(capability) = capabilities.action(&token.name) else {
            warn!(variable = %token.name, "variable has no capability, skipping");
            return Ok(());
        };

        let raw: &[String] = token.args.as_deref().unwrap_or_default();
        if !capability.accepts(raw.len()) {
            return Err(GrammarError::ArityMismatch { name:     token.name.clone(),
                                                     expected: capability.params.len(),
                                                     found:    raw.len(), }.into());
        }

        let args = capability.coerce_all(raw)?;
        trace!(variable = %token.name, ?args, "dispatching variable");
        (capability.func)(&mut *self.interpreter, &args)?;
        Ok(())
    }
}
