use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, grammar::alphabet::Alphabet};

/// A complete grammar description as loaded from JSON.
///
/// ```json
/// {
///   "variables": ["fwd", "rot"],
///   "functions": ["randrange"],
///   "constants": ["[", "]"],
///   "axiom": "fwd(1,0.1)",
///   "rules": [["fwd(l,t)", "fwd(l,t)[rot(25)fwd(l*0.5,t)]"]],
///   "iterations": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Variable names, in matching order.
    pub variables:  Vec<String>,
    /// Function names, in matching order.
    #[serde(default)]
    pub functions:  Vec<String>,
    /// Constant characters, each written as a one-character string.
    #[serde(default)]
    pub constants:  Vec<String>,
    /// The starting symbol string.
    pub axiom:      String,
    /// `(predecessor, successor)` pairs in declaration order.
    #[serde(default)]
    pub rules:      Vec<(String, String)>,
    /// Number of generations to rewrite.
    #[serde(default)]
    pub iterations: usize,
    /// Optional bound on the length of any generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
    /// Optional seed for interpreters with a random source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed:       Option<u64>,
}

impl GrammarConfig {
    /// Parses a grammar description from JSON text.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed input and
    /// `ConfigError::InvalidConstant` for constants that are not a single
    /// character.
    ///
    /// # Example
    /// ```
    /// use lsystem::grammar::config::GrammarConfig;
    ///
    /// let config = GrammarConfig::from_json_str(r#"{
    ///     "variables": ["F"],
    ///     "constants": ["[", "]"],
    ///     "axiom": "F",
    ///     "rules": [["F", "F[F]F"]],
    ///     "iterations": 2
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.alphabet().unwrap().constants, vec!['[', ']']);
    /// assert_eq!(config.iterations, 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.alphabet()?;
        Ok(config)
    }

    /// Reads and parses a grammar description file.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, and otherwise as
    /// [`GrammarConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(),
                                                                                source })?;
        Self::from_json_str(&json)
    }

    /// Builds the alphabet described by this configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConstant` for a constant entry that is not
    /// exactly one character.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        let constants = self.constants
                            .iter()
                            .map(|entry| {
                                let mut chars = entry.chars();
                                match (chars.next(), chars.next()) {
                                    (Some(c), None) => Ok(c),
                                    _ => Err(ConfigError::InvalidConstant { constant: entry.clone() }),
                                }
                            })
                            .collect::<Result<Vec<_>, _>>()?;

        Ok(Alphabet { variables: self.variables.clone(),
                      functions: self.functions.clone(),
                      constants })
    }
}
