use crate::{arithmetic::parser::ParseResult, error::ParseError};

/// Returns `true` for characters that make up identifiers and numerals.
#[must_use]
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Finds the `)` matching the `(` at byte offset `open`.
///
/// # Errors
/// Returns `ParseError::UnbalancedParentheses` if the group is never closed.
///
/// # Example
/// ```
/// use lsystem::grammar::scan::matching_paren;
///
/// assert_eq!(matching_paren("f(a(b)c)d", 1).unwrap(), 7);
/// assert!(matching_paren("f(a(b", 1).is_err());
/// ```
pub fn matching_paren(text: &str, open: usize) -> ParseResult<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| unbalanced(text))?;
                if depth == 0 {
                    return Ok(open + i);
                }
            },
            _ => {},
        }
    }
    Err(unbalanced(text))
}

/// Splits a parameter list into its top-level parameter expressions.
///
/// Commas inside parentheses, and therefore inside nested function calls, are
/// not split points. Parameters keep their surrounding whitespace. A blank
/// list yields no parameters.
///
/// # Errors
/// - `ParseError::UnbalancedParentheses` for an unclosed `(` or a stray `)`.
/// - `ParseError::EmptyParameter` for an empty parameter such as in `1,,2`.
///
/// # Example
/// ```
/// use lsystem::grammar::scan::split_parameters;
///
/// assert_eq!(split_parameters("randrange(0,2),5").unwrap(), vec!["randrange(0,2)", "5"]);
/// assert!(split_parameters("").unwrap().is_empty());
/// ```
pub fn split_parameters(input: &str) -> ParseResult<Vec<String>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    let mut push = |param: &str| {
        if param.trim().is_empty() {
            return Err(ParseError::EmptyParameter { expression: input.to_string() });
        }
        params.push(param.to_string());
        Ok(())
    };

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(|| unbalanced(input))?,
            ',' if depth == 0 => {
                push(&input[start..i])?;
                start = i + 1;
            },
            _ => {},
        }
    }
    if depth != 0 {
        return Err(unbalanced(input));
    }
    push(&input[start..])?;

    Ok(params)
}

/// The location of one function call inside an expression.
///
/// All offsets are byte offsets into the scanned expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSpan {
    /// Start of the function name.
    pub start:    usize,
    /// End of the function name (exclusive).
    pub name_end: usize,
    /// Offset of the opening `(`.
    pub open:     usize,
    /// Offset of the matching `)`.
    pub close:    usize,
}

impl CallSpan {
    /// The function name.
    #[must_use]
    pub fn name<'a>(&self, expr: &'a str) -> &'a str {
        &expr[self.start..self.name_end]
    }

    /// The raw text between the parentheses.
    #[must_use]
    pub fn params<'a>(&self, expr: &'a str) -> &'a str {
        &expr[self.open + 1..self.close]
    }

    /// The whole call, name through closing parenthesis.
    #[must_use]
    pub fn text<'a>(&self, expr: &'a str) -> &'a str {
        &expr[self.start..=self.close]
    }
}

/// Locates every function call in an expression, left to right.
///
/// A call is a registered function name that starts on an identifier boundary,
/// is not followed by further identifier characters, and is followed
/// (optionally after whitespace) by a balanced parenthesis group. Where several
/// names match at one position the first declared wins. Calls nested inside
/// another call's parentheses are part of the outer span and are not reported
/// separately.
///
/// # Errors
/// Returns `ParseError::UnbalancedParentheses` if a call is never closed.
///
/// # Example
/// ```
/// use lsystem::grammar::scan::find_function_calls;
///
/// let functions = vec!["max".to_string()];
/// let expr = "1 + max(2, max(3, 4)) * 2";
/// let calls = find_function_calls(expr, &functions).unwrap();
///
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].text(expr), "max(2, max(3, 4))");
/// ```
pub fn find_function_calls(expr: &str, functions: &[String]) -> ParseResult<Vec<CallSpan>> {
    let mut spans = Vec::new();
    let mut i = 0;

    while let Some(c) = expr[i..].chars().next() {
        let at_boundary = expr[..i].chars()
                                   .next_back()
                                   .is_none_or(|prev| !is_identifier_char(prev));
        if at_boundary {
            let mut found = None;
            for function in functions {
                if let Some(span) = call_at(expr, i, function)? {
                    found = Some(span);
                    break;
                }
            }
            if let Some(span) = found {
                spans.push(span);
                i = span.close + 1;
                continue;
            }
        }
        i += c.len_utf8();
    }

    Ok(spans)
}

/// Tests for a call to `function` starting at byte offset `start`.
fn call_at(expr: &str, start: usize, function: &str) -> ParseResult<Option<CallSpan>> {
    if function.is_empty() || !expr[start..].starts_with(function) {
        return Ok(None);
    }
    let name_end = start + function.len();
    let rest = &expr[name_end..];
    if rest.chars().next().is_some_and(is_identifier_char) {
        return Ok(None);
    }
    let open = name_end + (rest.len() - rest.trim_start().len());
    if !expr[open..].starts_with('(') {
        return Ok(None);
    }
    let close = matching_paren(expr, open)?;
    Ok(Some(CallSpan { start,
                       name_end,
                       open,
                       close }))
}

/// Replaces whole-identifier occurrences of bound names with their values.
///
/// The expression is scanned for maximal runs of identifier characters
/// (letters, digits, underscore); a run is replaced only if it equals a bound
/// name exactly, so substituting `x` leaves `x1`, `max` and `2x` untouched.
/// All bindings are applied in a single pass, so a substituted value is never
/// itself substituted again. If a name is bound twice the first binding wins.
///
/// # Example
/// ```
/// use lsystem::grammar::scan::substitute_identifiers;
///
/// assert_eq!(substitute_identifiers("x*x1+x", &[("x", "3")]), "3*x1+3");
/// assert_eq!(substitute_identifiers("max(x,2x)", &[("x", "3")]), "max(3,2x)");
/// assert_eq!(substitute_identifiers("x+y", &[("x", "y"), ("y", "2")]), "y+2");
/// ```
#[must_use]
pub fn substitute_identifiers<N, V>(expr: &str, bindings: &[(N, V)]) -> String
    where N: AsRef<str>,
          V: AsRef<str>
{
    let mut out = String::with_capacity(expr.len());
    let mut run_start: Option<usize> = None;

    let flush = |out: &mut String, run: &str| {
        let bound = bindings.iter().find(|(name, _)| name.as_ref() == run);
        out.push_str(bound.map_or(run, |(_, value)| value.as_ref()));
    };

    for (i, c) in expr.char_indices() {
        if is_identifier_char(c) {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(s) = run_start.take() {
            flush(&mut out, &expr[s..i]);
        }
        out.push(c);
    }
    if let Some(s) = run_start {
        flush(&mut out, &expr[s..]);
    }

    out
}

fn unbalanced(text: &str) -> ParseError {
    ParseError::UnbalancedParentheses { expression: text.to_string() }
}
