//! Explicit import tracking for a compilation unit.

use indexmap::IndexMap;
use javagen_core::{Error, Result, validate_identifier, validate_package_name};

use crate::model::JType;

/// Split a qualified name like `java.util.Map$Entry` into its package and
/// the simple name of the innermost class.
pub(crate) fn split_qualified(qualified: &str) -> (&str, &str) {
    let (package, class_part) = match qualified.rfind('.') {
        Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
        None => ("", qualified),
    };
    let simple = match class_part.rfind('$') {
        Some(dollar) => &class_part[dollar + 1..],
        None => class_part,
    };
    (package, simple)
}

/// Tracks the explicit single-type imports of one compilation unit.
///
/// Keyed by simple name, so two imports that would bind the same simple
/// name to different types are rejected. Maintains insertion order for
/// deterministic output.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportTable;
///
/// let mut imports = ImportTable::new();
/// imports.add("java.util.List").unwrap();
/// imports.add("java.util.Map").unwrap();
///
/// assert!(imports.has_simple_name("List"));
/// assert!(imports.add("java.awt.List").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    /// Simple name -> qualified name
    imports: IndexMap<String, String>,
}

impl ImportTable {
    /// Create a new empty import table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import by qualified name (`$` separates nested classes).
    ///
    /// Importing the same type twice is a no-op.
    pub fn add(&mut self, qualified: &str) -> Result<()> {
        let (package, simple) = split_qualified(qualified);
        validate_package_name(package)?;
        validate_identifier(simple)?;

        match self.imports.get(simple) {
            Some(existing) if existing == qualified => Ok(()),
            Some(existing) => Err(Error::import_conflict(simple, existing, qualified)),
            None => {
                self.imports
                    .insert(simple.to_string(), qualified.to_string());
                Ok(())
            }
        }
    }

    /// Add an import for a class type.
    pub fn add_type(&mut self, ty: &JType) -> Result<()> {
        if !ty.is_class() {
            return Err(Error::invalid_type_operation("import", ty.qualified_name()));
        }
        self.add(&ty.qualified_name())
    }

    /// Merge another table into this one.
    pub fn merge(&mut self, other: &ImportTable) -> Result<()> {
        for qualified in other.imports.values() {
            self.add(qualified)?;
        }
        Ok(())
    }

    /// Check if some import binds this simple name.
    pub fn has_simple_name(&self, simple: &str) -> bool {
        self.imports.contains_key(simple)
    }

    /// Check if exactly this qualified name is imported.
    pub fn contains(&self, qualified: &str) -> bool {
        let (_, simple) = split_qualified(qualified);
        self.imports.get(simple).is_some_and(|q| q == qualified)
    }

    /// Get the qualified name bound to a simple name.
    pub fn get(&self, simple: &str) -> Option<&str> {
        self.imports.get(simple).map(String::as_str)
    }

    /// Iterate over qualified names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.values().map(String::as_str)
    }

    /// Import declarations sorted by qualified name, in source form.
    pub fn declarations(&self) -> Vec<String> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
            .into_iter()
            .map(|q| format!("import {};", q.replace('$', ".")))
            .collect()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("java.util.List"), ("java.util", "List"));
        assert_eq!(split_qualified("java.util.Map$Entry"), ("java.util", "Entry"));
        assert_eq!(split_qualified("Foo"), ("", "Foo"));
    }

    #[test]
    fn test_import_table_basic() {
        let mut imports = ImportTable::new();
        imports.add("java.util.List").unwrap();
        imports.add("java.util.Map$Entry").unwrap();

        assert!(imports.has_simple_name("List"));
        assert!(imports.has_simple_name("Entry"));
        assert!(!imports.has_simple_name("Map"));
        assert!(imports.contains("java.util.List"));
        assert!(!imports.contains("java.awt.List"));
        assert_eq!(imports.get("Entry"), Some("java.util.Map$Entry"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_duplicate_import_is_noop() {
        let mut imports = ImportTable::new();
        imports.add("java.util.List").unwrap();
        imports.add("java.util.List").unwrap();
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_conflicting_import() {
        let mut imports = ImportTable::new();
        imports.add("java.util.List").unwrap();
        let err = imports.add("java.awt.List").unwrap_err();
        assert!(matches!(*err, Error::ImportConflict { .. }));
        assert_eq!(imports.get("List"), Some("java.util.List"));
    }

    #[test]
    fn test_invalid_import() {
        let mut imports = ImportTable::new();
        assert!(imports.add("java.util.").is_err());
        assert!(imports.add("java.int.List").is_err());
        assert!(imports.is_empty());
    }

    #[test]
    fn test_add_type() {
        let mut imports = ImportTable::new();
        let entry = types::type_named("java.util.Map$Entry").unwrap();
        imports.add_type(&entry).unwrap();
        assert!(imports.contains("java.util.Map$Entry"));
        assert!(imports.add_type(&types::INT).is_err());
    }

    #[test]
    fn test_merge_and_declarations() {
        let mut a = ImportTable::new();
        a.add("java.util.Map$Entry").unwrap();

        let mut b = ImportTable::new();
        b.add("java.io.File").unwrap();

        a.merge(&b).unwrap();
        assert_eq!(
            a.declarations(),
            vec!["import java.io.File;", "import java.util.Map.Entry;"]
        );
    }
}
