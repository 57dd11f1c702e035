use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for javagen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Kind of integer literal being constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 32-bit `int` literal (no suffix).
    Int,
    /// 64-bit `long` literal (`L` suffix).
    Long,
}

impl IntWidth {
    /// Get the target-language keyword for this width.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for IntWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported radix {radix} for {width} literal")]
    #[diagnostic(
        code(javagen::unsupported_radix),
        help("integer literals can be written in radix 2, 10 or 16")
    )]
    UnsupportedRadix { radix: u32, width: IntWidth },

    #[error("value {value} does not fit in an {width} literal")]
    #[diagnostic(
        code(javagen::literal_out_of_range),
        help("use a long literal for values outside the 32-bit range")
    )]
    LiteralOutOfRange { value: i64, width: IntWidth },

    #[error("unsupported element for call: {kind} '{name}'")]
    #[diagnostic(
        code(javagen::unsupported_element),
        help("only method elements can be turned into calls")
    )]
    UnsupportedElement { kind: String, name: String },

    #[error("cannot {operation} on type '{ty}'")]
    #[diagnostic(code(javagen::invalid_type_operation))]
    InvalidTypeOperation {
        operation: &'static str,
        ty: String,
    },

    #[error("invalid identifier '{name}'")]
    #[diagnostic(
        code(javagen::invalid_identifier),
        help("{reason}. Identifiers start with a letter, '_' or '$' and are not reserved words.")
    )]
    InvalidIdentifier { name: String, reason: String },

    #[error("cannot import '{requested}': '{simple_name}' already refers to '{existing}'")]
    #[diagnostic(
        code(javagen::import_conflict),
        help("refer to one of the types by its qualified name instead")
    )]
    ImportConflict {
        simple_name: String,
        existing: String,
        requested: String,
    },

    #[error("failed to parse render configuration")]
    #[diagnostic(code(javagen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an unsupported radix error
    pub fn unsupported_radix(radix: u32, width: IntWidth) -> Box<Self> {
        Box::new(Error::UnsupportedRadix { radix, width })
    }

    /// Create a literal range error
    pub fn literal_out_of_range(value: i64, width: IntWidth) -> Box<Self> {
        Box::new(Error::LiteralOutOfRange { value, width })
    }

    /// Create an unsupported element error
    pub fn unsupported_element(kind: impl Into<String>, name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedElement {
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Create an invalid type operation error
    pub fn invalid_type_operation(operation: &'static str, ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTypeOperation {
            operation,
            ty: ty.into(),
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an import conflict error
    pub fn import_conflict(
        simple_name: impl Into<String>,
        existing: impl Into<String>,
        requested: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::ImportConflict {
            simple_name: simple_name.into(),
            existing: existing.into(),
            requested: requested.into(),
        })
    }

    /// Create a configuration parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::unsupported_radix(8, IntWidth::Int);
        assert_eq!(err.to_string(), "unsupported radix 8 for int literal");

        let err = Error::literal_out_of_range(1 << 40, IntWidth::Int);
        assert_eq!(
            err.to_string(),
            "value 1099511627776 does not fit in an int literal"
        );

        let err = Error::invalid_type_operation("add type arguments", "java.lang.Integer");
        assert_eq!(
            err.to_string(),
            "cannot add type arguments on type 'java.lang.Integer'"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::unsupported_element("field", "count");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("javagen::unsupported_element".to_string())
        );
    }
}
