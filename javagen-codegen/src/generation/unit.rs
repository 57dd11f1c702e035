//! Per-compilation-unit resolution context.

use std::sync::Arc;

use javagen_core::{Result, validate_package_name};

use super::{ClassRegistry, ImportTable};

/// What a renderer needs to know about the compilation unit it writes into.
///
/// The class registry is shared behind an `Arc` so that units generated in
/// parallel can consult the same set of known classes.
#[derive(Debug, Clone, Default)]
pub struct UnitContext {
    package: String,
    imports: ImportTable,
    classes: Arc<ClassRegistry>,
}

impl UnitContext {
    /// Create a context for a unit in `package` (empty for the unnamed package).
    pub fn new(package: impl Into<String>) -> Result<Self> {
        let package = package.into();
        validate_package_name(&package)?;
        Ok(Self {
            package,
            imports: ImportTable::new(),
            classes: Arc::default(),
        })
    }

    /// Add an explicit import.
    pub fn with_import(mut self, qualified: &str) -> Result<Self> {
        self.imports.add(qualified)?;
        Ok(self)
    }

    /// Use a shared class registry.
    pub fn with_classes(mut self, classes: Arc<ClassRegistry>) -> Self {
        self.classes = classes;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }

    /// Mutable access to the import table.
    pub fn imports_mut(&mut self) -> &mut ImportTable {
        &mut self.imports
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_context() {
        let classes: Arc<ClassRegistry> = Arc::new(["com.example.Foo"].into_iter().collect());
        let unit = UnitContext::new("com.example")
            .unwrap()
            .with_import("java.util.List")
            .unwrap()
            .with_classes(classes);

        assert_eq!(unit.package(), "com.example");
        assert!(unit.imports().has_simple_name("List"));
        assert!(unit.classes().contains("com.example.Foo"));
    }

    #[test]
    fn test_invalid_package() {
        assert!(UnitContext::new("com.1example").is_err());
        assert!(UnitContext::new("").is_ok());
    }
}
