//! Compilation-unit state consulted while rendering:
//! - [`ImportTable`] - Explicit import tracking and conflict detection
//! - [`ClassRegistry`] - Classes known to the generation run
//! - [`UnitContext`] - Package, imports and known classes of one unit

mod imports;
mod registry;
mod unit;

pub use imports::ImportTable;
pub use registry::ClassRegistry;
pub use unit::UnitContext;
