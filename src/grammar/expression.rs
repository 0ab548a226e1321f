use tracing::trace;

use crate::{
    arithmetic::compute,
    capability::{CapabilityTable, ParamKind},
    error::{Error, EvaluationError},
    grammar::scan::{CallSpan, find_function_calls, split_parameters},
    value::Value,
};

/// Evaluates parameter expressions down to literal strings.
///
/// Function calls are resolved through the interpreter's capability table;
/// what remains is handed to the arithmetic evaluator. The evaluator borrows
/// the interpreter mutably because function capabilities (a random number
/// source, for instance) may carry state.
pub struct Evaluator<'a, I> {
    functions:    &'a [String],
    capabilities: &'a CapabilityTable<I>,
    interpreter:  &'a mut I,
}

impl<'a, I> Evaluator<'a, I> {
    #[must_use]
    pub const fn new(functions: &'a [String],
                     capabilities: &'a CapabilityTable<I>,
                     interpreter: &'a mut I)
                     -> Self {
        Self { functions,
               capabilities,
               interpreter }
    }

    /// Evaluates an expression to its literal, stringified value.
    ///
    /// Every top-level function call is evaluated (its parameters first,
    /// recursively) and its result spliced in place of the call; the
    /// surrounding text is kept untouched. Numeric parameters are evaluated in
    /// full. Text parameters only have their embedded calls resolved, so a
    /// bare word reaches the capability as written.
    ///
    /// An expression that is a single call yields that call's result
    /// evaluated again as arithmetic. A result that is not arithmetic, such as
    /// the output of a text-valued function, is returned verbatim instead of
    /// failing. Anything else is computed as arithmetic.
    ///
    /// # Errors
    /// Fails on the first malformed group, unknown function, arity or
    /// coercion mismatch, or arithmetic error; no partial result is produced.
    ///
    /// # Example
    /// ```
    /// use lsystem::{
    ///     capability::{CapabilityTable, Interpreter, ParamKind},
    ///     grammar::expression::Evaluator,
    ///     value::Value,
    /// };
    ///
    /// struct Host;
    /// impl Interpreter for Host {
    ///     fn reset(&mut self) {}
    /// }
    ///
    /// let functions = vec!["double".to_string()];
    /// let table = CapabilityTable::<Host>::new().with_function("double", &[ParamKind::Number], |_, args| {
    ///                                               Ok(Value::Integer(args[0].as_integer()? * 2))
    ///                                           });
    /// let mut host = Host;
    /// let mut evaluator = Evaluator::new(&functions, &table, &mut host);
    ///
    /// assert_eq!(evaluator.evaluate("double(double(1) + 1) / 4").unwrap(), "1.5");
    /// ```
    pub fn evaluate(&mut self, expr: &str) -> Result<String, Error> {
        let calls = find_function_calls(expr, self.functions)?;
        if calls.is_empty() {
            return Ok(compute(expr)?.to_string());
        }

        if let [call] = calls.as_slice()
           && expr[..call.start].trim().is_empty()
           && expr[call.close + 1..].trim().is_empty()
        {
            let result = self.invoke(expr, call)?.to_string();
            return Ok(compute(&result).map_or(result, |value| value.to_string()));
        }

        // Parameters were evaluated recursively, so the spliced text holds no
        // calls and only arithmetic remains.
        let spliced = self.splice(expr, &calls)?;
        Ok(compute(&spliced)?.to_string())
    }

    /// Replaces each call span with the stringified result of invoking it.
    fn splice(&mut self, expr: &str, calls: &[CallSpan]) -> Result<String, Error> {
        let mut spliced = String::with_capacity(expr.len());
        let mut prev_end = 0;
        for call in calls {
            spliced.push_str(&expr[prev_end..call.start]);
            spliced.push_str(&self.invoke(expr, call)?.to_string());
            prev_end = call.close + 1;
        }
        spliced.push_str(&expr[prev_end..]);
        Ok(spliced)
    }

    /// Resolves the calls inside a text parameter without computing the rest.
    fn resolve_text(&mut self, param: &str) -> Result<String, Error> {
        let param = param.trim();
        let calls = find_function_calls(param, self.functions)?;
        if calls.is_empty() {
            return Ok(param.to_string());
        }
        self.splice(param, &calls)
    }

    /// Evaluates the parameters of one call and invokes the capability.
    fn invoke(&mut self, expr: &str, call: &CallSpan) -> Result<Value, Error> {
        let name = call.name(expr);
        let capabilities = self.capabilities;
        let capability =
            capabilities.function(name)
                .ok_or_else(|| EvaluationError::UnknownFunction { name:       name.to_string(),
                                                                  expression: call.text(expr)
                                                                                  .to_string(), })?;

        let params = split_parameters(call.params(expr))?;
        if !capability.accepts(params.len()) {
            return Err(EvaluationError::ArgumentCountMismatch { name:     name.to_string(),
                                                                expected: capability.params.len(),
                                                                found:    params.len(), }.into());
        }

        let literals = params.iter()
                             .zip(&capability.params)
                             .map(|(param, kind)| match kind {
                                 ParamKind::Number => self.evaluate(param),
                                 ParamKind::Text => self.resolve_text(param),
                             })
                             .collect::<Result<Vec<_>, _>>()?;
        let args = capability.coerce_all(&literals)?;
        let result = (capability.func)(&mut *self.interpreter, &args)?;

        trace!(function = name, ?args, %result, "invoked function capability");
        Ok(result)
    }
}
