//! Per-task generation state.

use std::collections::HashMap;

use javagen_core::{Result, validate_identifier};
use tracing::{debug, trace};

use crate::model::{Expr, Name};

/// State owned by one in-flight generation task (typically one output file).
///
/// Holds the name interning cache: within a context, every request for the
/// same identifier yields the identical [`Name`] node, so repeated mentions
/// of a variable can be recognized by identity. Each task creates its own
/// context; tasks running in parallel never share one.
///
/// # Example
///
/// ```
/// use javagen_codegen::GenerationContext;
///
/// let mut ctx = GenerationContext::new();
/// let a = ctx.name("count").unwrap();
/// let b = ctx.name("count").unwrap();
/// assert_eq!(a, b);
///
/// let mut other = GenerationContext::new();
/// assert_ne!(a, other.name("count").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct GenerationContext {
    names: HashMap<String, Name>,
}

impl GenerationContext {
    pub fn new() -> Self {
        debug!("generation context created");
        Self::default()
    }

    /// Resolve an identifier to its canonical name node.
    ///
    /// The identifier is validated on first use; invalid identifiers are
    /// rejected and not cached.
    pub fn name_node(&mut self, identifier: &str) -> Result<Name> {
        if let Some(name) = self.names.get(identifier) {
            trace!(identifier, "name cache hit");
            return Ok(name.clone());
        }

        validate_identifier(identifier)?;
        let name = Name::new(identifier);
        self.names.insert(identifier.to_string(), name.clone());
        trace!(identifier, cached = self.names.len(), "interned name");
        Ok(name)
    }

    /// Resolve an identifier to a name expression.
    pub fn name(&mut self, identifier: &str) -> Result<Expr> {
        self.name_node(identifier).map(Expr::Name)
    }

    /// Whether the identifier has been interned in this context.
    pub fn contains(&self, identifier: &str) -> bool {
        self.names.contains_key(identifier)
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Drop for GenerationContext {
    fn drop(&mut self) {
        debug!(names = self.names.len(), "generation context finished");
    }
}
