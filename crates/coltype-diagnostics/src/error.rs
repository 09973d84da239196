//! Error and diagnostic types

use crate::{ErrorCode, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A reportable error with optional location, note and help
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<SourceLocation>,
    /// The input being processed when the error occurred
    pub note: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            note: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic for a terminal, with note and help lines if any
    #[cfg(feature = "colored")]
    pub fn render(&self) -> String {
        use colored::Colorize;

        let mut out = format!("{}[{}]: {}", "error".red().bold(), self.code, self.message.bold());
        if let Some(loc) = &self.location {
            out.push_str(&format!("\n  {} {}", "-->".blue().bold(), loc));
        }
        if let Some(note) = &self.note {
            out.push_str(&format!("\n  {} {}", "= note:".bold(), note));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main error type of the decimal type family
#[derive(Debug, Clone, Error)]
pub enum TypeError {
    /// Malformed declaration text
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        declaration: String,
        location: Option<SourceLocation>,
    },

    /// Declaration that parses but does not describe a valid type
    #[error("{code}: {message}")]
    Declaration {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Literal that cannot be represented by the target type
    #[error("{code}: {message}")]
    Value {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Internal failure
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl TypeError {
    pub fn parse(code: ErrorCode, message: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            declaration: declaration.into(),
            location: None,
        }
    }

    pub fn parse_at(
        code: ErrorCode,
        message: impl Into<String>,
        declaration: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            declaration: declaration.into(),
            location: Some(location),
        }
    }

    pub fn declaration(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Declaration {
            code,
            message: message.into(),
            context: None,
        }
    }

    pub fn value(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Value {
            code,
            message: message.into(),
            context: None,
        }
    }

    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    /// Attach context (the offending input, usually) to declaration and value errors
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Declaration { context, .. } | Self::Value { context, .. } => {
                *context = Some(ctx.into());
            }
            Self::Parse { .. } | Self::System { .. } => {}
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. }
            | Self::Declaration { code, .. }
            | Self::Value { code, .. }
            | Self::System { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. }
            | Self::Declaration { message, .. }
            | Self::Value { message, .. }
            | Self::System { message, .. } => message,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Parse { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.message());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc.clone());
        }
        let context = match self {
            Self::Declaration { context, .. } | Self::Value { context, .. } => context.as_deref(),
            Self::Parse { declaration, .. } => Some(declaration.as_str()),
            Self::System { .. } => None,
        };
        if let Some(ctx) = context {
            diag = diag.with_note(format!("while processing `{ctx}`"));
        }
        match self.code().info().help {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEC0001, DEC0101, DEC0102, DEC0103, DEC0200};

    #[test]
    fn test_error_display_and_code() {
        let err = TypeError::declaration(DEC0101, "Decimal data type family must have precision and optional scale arguments");
        assert_eq!(err.code(), DEC0101);
        assert!(err.to_string().starts_with("DEC0101: Decimal data type family"));
    }

    #[test]
    fn test_parse_error_diagnostic() {
        let err = TypeError::parse_at(
            DEC0001,
            "Unexpected ')'",
            "Decimal(10,)",
            SourceLocation::at("Decimal(10,)", 11),
        );
        let diag = err.to_diagnostic();
        assert!(diag.to_string().contains("DEC0001"));
        assert!(diag.to_string().contains("1:12"));
        assert_eq!(diag.note.as_deref(), Some("while processing `Decimal(10,)`"));
        assert_eq!(diag.help, None);
    }

    #[test]
    fn test_diagnostic_keeps_context_and_code_help() {
        let err = TypeError::declaration(DEC0103, "Scale 12 is out of bounds (max scale: 9)")
            .with_context("Decimal(9, 12)");
        let diag = err.to_diagnostic();
        assert_eq!(diag.note.as_deref(), Some("while processing `Decimal(9, 12)`"));
        assert_eq!(diag.help.as_deref(), DEC0103.info().help);
        assert!(diag.help.is_some());

        let diag = TypeError::declaration(DEC0102, "Decimal argument precision is invalid").to_diagnostic();
        assert_eq!(diag.note, None);
        assert_eq!(diag.help.as_deref(), DEC0102.info().help);
    }

    #[cfg(feature = "colored")]
    #[test]
    fn test_render_shows_note_and_help() {
        colored::control::set_override(false);
        let rendered = TypeError::declaration(DEC0103, "Scale 12 is out of bounds (max scale: 9)")
            .with_context("Decimal(9, 12)")
            .to_diagnostic()
            .render();
        assert!(rendered.starts_with("error[DEC0103]: Scale 12"));
        assert!(rendered.contains("= note: while processing `Decimal(9, 12)`"));
        assert!(rendered.contains("help: Precision must be in 1..=76"));
    }

    #[test]
    fn test_context_only_on_declaration_and_value() {
        let err = TypeError::value(DEC0200, "Decimal math overflow").with_context("99999999999");
        assert!(matches!(&err, TypeError::Value { context: Some(c), .. } if c == "99999999999"));

        let err = TypeError::system(crate::DEC0400, "boom").with_context("ignored");
        assert_eq!(err.to_diagnostic().note, None);
        assert_eq!(err.to_diagnostic().help, None);
    }
}
