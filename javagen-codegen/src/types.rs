//! Type factories.
//!
//! Primitive types are constants; class types are created from package and
//! simple name, or parsed from a source-style name with [`type_named`].

use std::sync::Arc;

use javagen_core::{Error, Result};

use crate::model::{ClassType, JType, Primitive};

pub const BOOLEAN: JType = JType::Primitive(Primitive::Boolean);
pub const BYTE: JType = JType::Primitive(Primitive::Byte);
pub const SHORT: JType = JType::Primitive(Primitive::Short);
pub const CHAR: JType = JType::Primitive(Primitive::Char);
pub const INT: JType = JType::Primitive(Primitive::Int);
pub const LONG: JType = JType::Primitive(Primitive::Long);
pub const FLOAT: JType = JType::Primitive(Primitive::Float);
pub const DOUBLE: JType = JType::Primitive(Primitive::Double);
pub const VOID: JType = JType::Primitive(Primitive::Void);

/// `java.lang.String`
pub fn string() -> JType {
    lang("String")
}

/// `java.lang.Object`
pub fn object() -> JType {
    lang("Object")
}

fn lang(simple_name: &str) -> JType {
    JType::Class(Arc::new(ClassType::top_level(
        javagen_core::DEFAULT_IMPLICIT_PACKAGE,
        simple_name,
    )))
}

/// A top-level class in `package` (empty for the unnamed package).
pub fn reference(package: &str, simple_name: &str) -> Result<JType> {
    JType::class(package, simple_name)
}

/// Parse a source-style type name.
///
/// Accepts primitive keywords, qualified class names with `$` separating
/// nested classes, and any number of trailing `[]`:
///
/// ```
/// use javagen_codegen::types;
///
/// let ty = types::type_named("java.util.Map$Entry[]").unwrap();
/// assert_eq!(ty.qualified_name(), "java.util.Map$Entry[]");
/// assert_eq!(types::type_named("int").unwrap(), types::INT);
/// assert!(types::type_named("java.util.").is_err());
/// ```
pub fn type_named(name: &str) -> Result<JType> {
    let name = name.trim();
    if let Some(element) = name.strip_suffix("[]") {
        return Ok(type_named(element)?.array());
    }
    if let Some(primitive) = Primitive::from_keyword(name) {
        return Ok(JType::Primitive(primitive));
    }

    let (package, binary) = match name.rfind('.') {
        Some(dot) => (&name[..dot], &name[dot + 1..]),
        None => ("", name),
    };
    let mut segments = binary.split('$');
    let top = segments.next().unwrap_or_default();
    if top.is_empty() {
        return Err(Error::invalid_identifier(name, "missing class name"));
    }
    segments.try_fold(JType::class(package, top)?, |ty, nested| {
        ty.nested_class(nested)
    })
}
