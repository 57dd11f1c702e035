//! Indentation configuration for generated source.

use std::fmt;

use serde::Deserialize;

const SPACES: &str = "        ";

/// Indentation style for generated code.
///
/// Deserializes from either a space width (`indent = 4`) or the string
/// `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentValue")]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndentValue {
    Width(u8),
    Name(String),
}

impl TryFrom<IndentValue> for Indent {
    type Error = String;

    fn try_from(value: IndentValue) -> Result<Self, Self::Error> {
        match value {
            IndentValue::Width(width @ 1..=8) => Ok(Self::Spaces(width)),
            IndentValue::Width(width) => {
                Err(format!("invalid indent width {}, expected 1 to 8", width))
            }
            IndentValue::Name(name) if name == "tab" => Ok(Self::Tab),
            IndentValue::Name(name) => Err(format!(
                "invalid indent '{}', expected a width or \"tab\"",
                name
            )),
        }
    }
}

impl Indent {
    /// 4-space indentation, the conventional Java layout.
    pub const JAVA: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from((*width).clamp(1, 8))],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{} spaces", width),
            Self::Tab => f.write_str("tab"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(8).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Config {
            indent: Indent,
        }
        let config: Config = toml::from_str("indent = 2").unwrap();
        assert_eq!(config.indent, Indent::Spaces(2));

        let config: Config = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(config.indent, Indent::Tab);

        assert!(toml::from_str::<Config>("indent = 0").is_err());
        assert!(toml::from_str::<Config>(r#"indent = "spaces""#).is_err());
    }
}
