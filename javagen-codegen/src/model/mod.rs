//! The type and expression model.
//!
//! - [`JType`] - Primitive, class, parameterized and array type references
//! - [`Expr`] - Literals, names, arrays, member references and calls
//! - [`Call`] - Direct, static and constructor invocations
//! - [`IntLiteral`] - Integer literal encoding (radix, grouping, suffix)
//! - [`Element`] - Reflective elements convertible into calls
//!
//! Every node renders itself through [`Render`](crate::builder::Render).

mod call;
mod element;
mod expr;
mod jtype;
mod literal;

pub use call::Call;
pub use element::{Element, ElementKind, ElementRef};
pub use expr::{Expr, MethodRefReceiver, Name, StaticMember};
pub use jtype::{ClassType, JType, Primitive};
pub use literal::{DIGIT_SEPARATOR, IntLiteral, Radix};
