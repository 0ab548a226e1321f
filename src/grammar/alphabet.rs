/// The symbols a grammar is written in.
///
/// Variables and functions are matched by prefix in declaration order, so when
/// one name is a prefix of another (`f` and `fwd`) the one declared first
/// wins. Constants are single characters and never carry parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    /// Names of parameterizable actions, e.g. `fwd`, `rot`.
    pub variables: Vec<String>,
    /// Names usable inside parameter expressions, e.g. `randrange`.
    pub functions: Vec<String>,
    /// Stack-control characters, e.g. `[` and `]`.
    pub constants: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from borrowed names.
    ///
    /// # Example
    /// ```
    /// use lsystem::grammar::alphabet::Alphabet;
    ///
    /// let alphabet = Alphabet::new(&["fwd", "rot"], &["randrange"], &['[', ']']);
    /// assert!(alphabet.is_variable("fwd"));
    /// assert!(alphabet.is_constant('['));
    /// assert!(!alphabet.is_function("fwd"));
    /// ```
    #[must_use]
    pub fn new(variables: &[&str], functions: &[&str], constants: &[char]) -> Self {
        Self { variables: variables.iter().map(ToString::to_string).collect(),
               functions: functions.iter().map(ToString::to_string).collect(),
               constants: constants.to_vec(), }
    }

    #[must_use]
    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }

    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f == name)
    }

    #[must_use]
    pub fn is_constant(&self, c: char) -> bool {
        self.constants.contains(&c)
    }

    /// Returns the constant a token name denotes, if it is exactly one
    /// registered constant character.
    #[must_use]
    pub fn constant_of(&self, name: &str) -> Option<char> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if self.is_constant(c) => Some(c),
            _ => None,
        }
    }
}
