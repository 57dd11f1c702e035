//! Reflective program elements that can be turned into model nodes.

use std::fmt;

/// Kind of a declared program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Module,
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
    EnumConstant,
    Field,
    RecordComponent,
    Parameter,
    LocalVariable,
    ExceptionParameter,
    ResourceVariable,
    BindingVariable,
    TypeParameter,
    Method,
    Constructor,
    StaticInit,
    InstanceInit,
    Other,
}

impl ElementKind {
    pub const ALL: [ElementKind; 21] = [
        Self::Package,
        Self::Module,
        Self::Class,
        Self::Interface,
        Self::Enum,
        Self::Record,
        Self::AnnotationType,
        Self::EnumConstant,
        Self::Field,
        Self::RecordComponent,
        Self::Parameter,
        Self::LocalVariable,
        Self::ExceptionParameter,
        Self::ResourceVariable,
        Self::BindingVariable,
        Self::TypeParameter,
        Self::Method,
        Self::Constructor,
        Self::StaticInit,
        Self::InstanceInit,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Module => "module",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::AnnotationType => "annotation type",
            Self::EnumConstant => "enum constant",
            Self::Field => "field",
            Self::RecordComponent => "record component",
            Self::Parameter => "parameter",
            Self::LocalVariable => "local variable",
            Self::ExceptionParameter => "exception parameter",
            Self::ResourceVariable => "resource variable",
            Self::BindingVariable => "binding variable",
            Self::TypeParameter => "type parameter",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::StaticInit => "static initializer",
            Self::InstanceInit => "instance initializer",
            Self::Other => "element",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A program element from some reflective model (an annotation processor,
/// a class-file reader, ...).
///
/// Implement this trait to build calls straight from such a model via
/// [`exprs::call_element`](crate::exprs::call_element).
pub trait Element {
    fn kind(&self) -> ElementKind;

    fn simple_name(&self) -> &str;
}

/// A plain [`Element`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    kind: ElementKind,
    simple_name: String,
}

impl ElementRef {
    pub fn new(kind: ElementKind, simple_name: impl Into<String>) -> Self {
        Self {
            kind,
            simple_name: simple_name.into(),
        }
    }

    /// Shorthand for a method element.
    pub fn method(simple_name: impl Into<String>) -> Self {
        Self::new(ElementKind::Method, simple_name)
    }
}

impl Element for ElementRef {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn simple_name(&self) -> &str {
        &self.simple_name
    }
}
