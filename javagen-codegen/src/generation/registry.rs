//! Registry of classes known to a generation run.

use indexmap::IndexSet;

/// The set of classes being generated (or otherwise known) by qualified name.
///
/// Consulted when deciding whether a type of the implicitly visible
/// package is shadowed by a same-named class in the current package.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: IndexSet<String>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class by qualified name.
    ///
    /// Returns `false` if the class was already registered.
    pub fn add(&mut self, qualified: impl Into<String>) -> bool {
        self.classes.insert(qualified.into())
    }

    /// Check if a class is registered.
    pub fn contains(&self, qualified: &str) -> bool {
        self.classes.contains(qualified)
    }

    /// Iterate over registered classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
