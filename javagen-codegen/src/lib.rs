//! Building blocks for generating Java source code.
//!
//! This crate models Java types and expressions as immutable nodes and
//! renders them as source text, choosing between simple and qualified type
//! names from the imports and package of the compilation unit being written.
//!
//! # Module Organization
//!
//! - [`model`] - Type and expression nodes (JType, Expr, Call, IntLiteral, etc.)
//! - [`types`] - Type factories (primitive constants, `type_named`, etc.)
//! - [`exprs`] - Literal, array and call factories
//! - [`builder`] - Writer contract and the `String`-backed SourceWriter
//! - [`generation`] - Compilation-unit state (UnitContext, ImportTable, etc.)
//!
//! # Example
//!
//! ```
//! use javagen_codegen::{GenerationContext, SourceWriter, exprs, generation::UnitContext, types};
//!
//! let mut ctx = GenerationContext::new();
//! let unit = UnitContext::new("com.example")
//!     .unwrap()
//!     .with_import("java.util.Objects")
//!     .unwrap();
//!
//! let hash = exprs::call_static_named("java.util.Objects", "hash")
//!     .unwrap()
//!     .arg(ctx.name("id").unwrap())
//!     .arg(exprs::hex(0xff))
//!     .arg(types::string().class_literal());
//!
//! let code = SourceWriter::new(unit).expr_line(&hash).finish();
//! assert_eq!(code, "Objects.hash(id, 0xff, String.class)\n");
//! ```

pub mod builder;
mod context;
pub mod exprs;
pub mod generation;
pub mod model;
pub mod types;

pub use builder::{Render, SourceWriter, Writer, render_to_string};
pub use context::GenerationContext;
pub use javagen_core::{Error, IntWidth, RenderConfig, Result};
pub use model::{Call, Expr, IntLiteral, JType, Name};
