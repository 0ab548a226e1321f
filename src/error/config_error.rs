use std::path::PathBuf;

#[derive(Debug)]
/// Represents all errors that can occur while loading a grammar description.
pub enum ConfigError {
    /// The grammar file could not be read.
    Io {
        /// The path that was being read.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The grammar description is not valid JSON for a grammar.
    Json(serde_json::Error),
    /// A constant was not exactly one character long.
    InvalidConstant {
        /// The offending entry.
        constant: String,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read grammar file '{}': {source}", path.display())
            },
            Self::Json(e) => write!(f, "Invalid grammar description: {e}"),
            Self::InvalidConstant { constant } => write!(f,
                                                         "Invalid grammar description: constant '{constant}' must be a single character."),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::InvalidConstant { .. } => None,
        }
    }
}
