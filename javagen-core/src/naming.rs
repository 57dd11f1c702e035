//! Identifier rules for the generated language.

use crate::{Error, Result};

/// Reserved words that cannot be used as identifiers.
/// Includes the literals `true`, `false` and `null`.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_", "true", "false", "null",
];

/// Check if a name is a reserved word.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Check a single identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if is_identifier_start(c) => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
    }

    if !chars.all(is_identifier_part) {
        return Some("name must contain only letters, digits, underscores and dollar signs");
    }

    if is_java_keyword(name) {
        return Some("name is a reserved word");
    }

    None
}

/// Validate that a name can be emitted as a bare identifier.
pub fn validate_identifier(name: &str) -> Result<()> {
    match identifier_problem(name) {
        Some(reason) => Err(Error::invalid_identifier(name, reason)),
        None => Ok(()),
    }
}

/// Validate a dotted package name such as `java.util`.
///
/// The empty string denotes the unnamed package and is accepted.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    for segment in name.split('.') {
        if let Some(reason) = identifier_problem(segment) {
            return Err(Error::invalid_identifier(name, reason));
        }
    }
    Ok(())
}
