//! Factory functions for expressions and calls.
//!
//! Name references are not built here: they come from a
//! [`GenerationContext`](crate::GenerationContext) so that they can be
//! interned per task.
//!
//! # Example
//!
//! ```
//! use javagen_codegen::exprs;
//!
//! assert_eq!(exprs::hex(255).to_string(), "0xff");
//! assert_eq!(exprs::decimal_grouped(1_000_000i64, 3).to_string(), "1_000_000L");
//! assert!(exprs::decimal_float(1.5f64).is_none());
//! ```

use javagen_core::{Error, Result, validate_identifier};
use tracing::debug;

use crate::model::{
    Call, Element, ElementKind, Expr, IntLiteral, JType, MethodRefReceiver, Radix,
};
use crate::types;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Integer values that have a literal form: `i32` renders as an `int`
/// literal, `i64` as a `long` literal.
pub trait IntegerValue: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn literal(self, radix: Radix, group_interval: u32) -> IntLiteral;
}

impl IntegerValue for i32 {
    fn literal(self, radix: Radix, group_interval: u32) -> IntLiteral {
        IntLiteral::int(self, radix, group_interval)
    }
}

impl IntegerValue for i64 {
    fn literal(self, radix: Radix, group_interval: u32) -> IntLiteral {
        IntLiteral::long(self, radix, group_interval)
    }
}

/// Floating-point values (`f32` for `float`, `f64` for `double`).
pub trait FloatValue: sealed::Sealed + Copy {}

impl FloatValue for f32 {}
impl FloatValue for f64 {}

/// Any value accepted by the format-string factories.
pub trait NumericValue: sealed::Sealed + Copy {}

impl<T: sealed::Sealed + Copy> NumericValue for T {}

fn unavailable(feature: &'static str) -> Option<Expr> {
    debug!(feature, "literal form is not available");
    None
}

/// Decimal integer literal.
pub fn decimal<V: IntegerValue>(value: V) -> Expr {
    Expr::Int(value.literal(Radix::Decimal, 0))
}

/// Decimal integer literal with `_` every `interval` digits (0 = ungrouped).
pub fn decimal_grouped<V: IntegerValue>(value: V, interval: u32) -> Expr {
    Expr::Int(value.literal(Radix::Decimal, interval))
}

/// Hexadecimal integer literal.
pub fn hex<V: IntegerValue>(value: V) -> Expr {
    Expr::Int(value.literal(Radix::Hex, 0))
}

/// Hexadecimal integer literal with `_` every `interval` digits.
pub fn hex_grouped<V: IntegerValue>(value: V, interval: u32) -> Expr {
    Expr::Int(value.literal(Radix::Hex, interval))
}

/// Binary integer literal.
pub fn binary<V: IntegerValue>(value: V) -> Expr {
    Expr::Int(value.literal(Radix::Binary, 0))
}

/// Binary integer literal with `_` every `interval` digits.
pub fn binary_grouped<V: IntegerValue>(value: V, interval: u32) -> Expr {
    Expr::Int(value.literal(Radix::Binary, interval))
}

/// Decimal floating-point literal. Not available: always `None`.
pub fn decimal_float<V: FloatValue>(_value: V) -> Option<Expr> {
    unavailable("decimal floating-point literal")
}

/// Grouped decimal floating-point literal. Not available: always `None`.
pub fn decimal_float_grouped<V: FloatValue>(_value: V, _interval: u32) -> Option<Expr> {
    unavailable("grouped decimal floating-point literal")
}

/// Hexadecimal floating-point literal. Not available: always `None`.
pub fn hex_float<V: FloatValue>(_value: V) -> Option<Expr> {
    unavailable("hexadecimal floating-point literal")
}

/// Grouped hexadecimal floating-point literal. Not available: always `None`.
pub fn hex_float_grouped<V: FloatValue>(_value: V, _interval: u32) -> Option<Expr> {
    unavailable("grouped hexadecimal floating-point literal")
}

/// Decimal literal shaped by a format string. Not available: always `None`.
pub fn decimal_formatted<V: NumericValue>(_value: V, _format: &str) -> Option<Expr> {
    unavailable("formatted decimal literal")
}

/// Hexadecimal literal shaped by a format string. Not available: always `None`.
pub fn hex_formatted<V: NumericValue>(_value: V, _format: &str) -> Option<Expr> {
    unavailable("formatted hexadecimal literal")
}

/// Binary literal shaped by a format string. Not available: always `None`.
pub fn binary_formatted<V: NumericValue>(_value: V, _format: &str) -> Option<Expr> {
    unavailable("formatted binary literal")
}

/// Character literal. Not available: always `None`.
pub fn ch(_code_point: u32) -> Option<Expr> {
    unavailable("character literal")
}

/// String literal; escaping happens at render time.
pub fn string(value: impl Into<String>) -> Expr {
    Expr::Str(value.into())
}

/// Array initializer from expressions.
pub fn array(members: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Array(members.into_iter().collect())
}

/// Array initializer of string literals.
pub fn array_of_strings<S: Into<String>>(members: impl IntoIterator<Item = S>) -> Expr {
    array(members.into_iter().map(string))
}

/// Array initializer of decimal integer literals.
pub fn array_of_ints<V: IntegerValue>(members: impl IntoIterator<Item = V>) -> Expr {
    array(members.into_iter().map(decimal))
}

/// Call with a bare method name.
///
/// Fails if `name` is not a legal method name.
pub fn call(name: impl Into<String>) -> Result<Call> {
    let name = name.into();
    validate_identifier(&name)?;
    Ok(Call::Direct {
        name,
        args: Vec::new(),
    })
}

/// Static call on `ty`.
pub fn call_static(ty: &JType, name: impl Into<String>) -> Result<Call> {
    ty.call_static(name)
}

/// Static call on a type given by name, e.g. `"java.util.Objects"`.
pub fn call_static_named(ty: &str, name: impl Into<String>) -> Result<Call> {
    types::type_named(ty)?.call_static(name)
}

/// Constructor call.
pub fn new_instance(ty: &JType) -> Call {
    ty.new_instance()
}

/// Call of the method described by a reflective element.
///
/// Only method elements are accepted.
pub fn call_element<E: Element + ?Sized>(element: &E) -> Result<Call> {
    match element.kind() {
        ElementKind::Method => call(element.simple_name()),
        kind => Err(Error::unsupported_element(
            kind.as_str(),
            element.simple_name(),
        )),
    }
}

/// Method reference without an explicit receiver.
pub fn unqualified_method_ref(name: impl Into<String>) -> Expr {
    Expr::MethodRef {
        receiver: MethodRefReceiver::Unqualified,
        name: name.into(),
    }
}
