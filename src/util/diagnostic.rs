//! User-friendly diagnostic messages.
//!
//! Fatal identification errors are rendered with the offending file, the
//! underlying cause and a suggested fix.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a candidate manifest cannot be decoded.
    pub const INVALID_MANIFEST: &str =
        "Fix the TOML syntax, e.g. by running `cargo metadata` in that directory";

    /// Suggestion when a package is unexpectedly not identified.
    pub const NOT_IDENTIFIED: &str =
        "Only binary crates listed in a parent workspace's `members` are identified";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    /// Cause lines, printed under the location
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    /// Offending file
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a new note diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref path) = self.location {
            writeln!(f, "  --> {}", path.display())?;
        }

        for line in self.context.iter().flat_map(|ctx| ctx.lines()) {
            writeln!(f, "  → {}", line)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "help: consider:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic) {
    eprint!("{}", diagnostic);
}
