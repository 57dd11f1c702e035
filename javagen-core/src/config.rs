//! Render configuration.

use serde::Deserialize;

use crate::{Error, Indent, Result};

/// The package whose types are visible everywhere without an import.
pub const DEFAULT_IMPLICIT_PACKAGE: &str = "java.lang";

/// Settings that shape the rendered source.
///
/// # Example
///
/// ```
/// use javagen_core::{Indent, RenderConfig};
///
/// let config = RenderConfig::from_toml_str(
///     r#"
///     indent = 2
///     implicit_package = "java.lang"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.indent, Indent::Spaces(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation used for each nesting level.
    pub indent: Indent,
    /// Package whose types never need an import or qualification.
    pub implicit_package: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            implicit_package: DEFAULT_IMPLICIT_PACKAGE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Self::from_toml_named(src, "javagen.toml")
    }

    /// Parse a configuration, reporting errors against `filename`.
    pub fn from_toml_named(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::config(e, src, filename))
    }

    /// Set the indentation.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the implicitly visible package.
    pub fn with_implicit_package(mut self, package: impl Into<String>) -> Self {
        self.implicit_package = package.into();
        self
    }
}
