//! Generation inputs and outputs

use crate::error::Result;
use crate::notification::NotificationCollection;
use crate::types::NaiveDateTime;
use std::fmt;
use std::path::Path;

/// Caller-supplied facts written into the header comment
///
/// Both fields are optional; a missing one simply omits its comment line,
/// which keeps output reproducible when no timestamp is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationContext {
    /// Name of the drawing the document was loaded from
    pub source_name: Option<String>,
    pub generated_at: Option<NaiveDateTime>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }
}

/// Text of a generated Rust program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProgram {
    text: String,
}

impl SourceProgram {
    pub fn new(text: impl Into<String>) -> Self {
        SourceProgram { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Write the program to disk, replacing any existing file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), &self.text)?;
        tracing::info!(path = %path.as_ref().display(), bytes = self.text.len(), "wrote generated program");
        Ok(())
    }
}

impl fmt::Display for SourceProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A generated program plus the non-fatal issues met on the way
#[derive(Debug, Clone)]
pub struct GeneratedProgram {
    pub program: SourceProgram,
    pub notifications: NotificationCollection,
}

impl GeneratedProgram {
    pub fn text(&self) -> &str {
        self.program.text()
    }
}
