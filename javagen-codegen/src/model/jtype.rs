//! Type references and their context-aware rendering.

use std::fmt;
use std::sync::Arc;

use javagen_core::{Error, Result, validate_identifier};
use tracing::trace;

use super::{Call, Expr, MethodRefReceiver, StaticMember};
use crate::builder::{Keyword, Punct, Render, Token, Writer, render_separated};

/// Primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl Primitive {
    pub const ALL: [Primitive; 9] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Char,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Void,
    ];

    pub fn keyword(&self) -> Keyword {
        match self {
            Self::Boolean => Keyword::Boolean,
            Self::Byte => Keyword::Byte,
            Self::Short => Keyword::Short,
            Self::Char => Keyword::Char,
            Self::Int => Keyword::Int,
            Self::Long => Keyword::Long,
            Self::Float => Keyword::Float,
            Self::Double => Keyword::Double,
            Self::Void => Keyword::Void,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.keyword().as_str()
    }

    /// Parse a primitive keyword.
    pub fn from_keyword(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Simple name of the wrapper class in `java.lang`.
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Char => "Character",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Void => "Void",
        }
    }

    /// Inverse of [`wrapper_name`](Self::wrapper_name), excluding `Void`,
    /// which has no unboxed form.
    pub fn from_wrapper_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|p| *p != Self::Void)
            .find(|p| p.wrapper_name() == name)
    }
}

/// A named class, interface or enum, possibly nested in another.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ClassType {
    enclosing: Option<Arc<ClassType>>,
    package: Arc<str>,
    simple_name: Arc<str>,
    unboxed: Option<Primitive>,
}

impl ClassType {
    pub(crate) fn top_level(package: &str, simple_name: &str) -> Self {
        let unboxed = if package == javagen_core::DEFAULT_IMPLICIT_PACKAGE {
            Primitive::from_wrapper_name(simple_name)
        } else {
            None
        };
        Self {
            enclosing: None,
            package: package.into(),
            simple_name: simple_name.into(),
            unboxed,
        }
    }

    pub(crate) fn nested(enclosing: &Arc<ClassType>, simple_name: &str) -> Self {
        Self {
            enclosing: Some(Arc::clone(enclosing)),
            package: Arc::clone(&enclosing.package),
            simple_name: simple_name.into(),
            unboxed: None,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn enclosing(&self) -> Option<&ClassType> {
        self.enclosing.as_deref()
    }

    /// `Outer$Inner` for nested classes.
    pub fn binary_name(&self) -> String {
        self.join_names('$')
    }

    /// `pkg.Outer$Inner` for nested classes.
    pub fn qualified_name(&self) -> String {
        match &self.enclosing {
            Some(outer) => format!("{}${}", outer.qualified_name(), self.simple_name),
            None => qualify(&self.package, &self.binary_name()),
        }
    }

    /// Name chain joined with `sep`, outermost first.
    fn join_names(&self, sep: char) -> String {
        match &self.enclosing {
            Some(outer) => format!("{}{}{}", outer.join_names(sep), sep, self.simple_name),
            None => self.simple_name.to_string(),
        }
    }

    /// `pkg.Outer.Inner`, the name as written in source.
    pub fn source_name(&self) -> String {
        qualify(&self.package, &self.join_names('.'))
    }

    /// The top-level class this one is nested in, or itself.
    fn outermost(&self) -> &ClassType {
        match &self.enclosing {
            Some(outer) => outer.outermost(),
            None => self,
        }
    }

    /// Decide how this class is spelled in the current unit.
    ///
    /// Checks run against the outermost simple name, which is the one
    /// that leads the printed `Outer.Inner` chain.
    fn resolve(&self, writer: &dyn Writer) -> Resolution {
        let current = writer.current_package();
        let same_package = current == &*self.package;
        let outermost = self.outermost();

        if same_package && writer.has_explicit_import(&outermost.simple_name) {
            return Resolution::Masked;
        }
        if &*self.package == writer.implicit_package()
            && !writer.has_class(&qualify(current, &outermost.simple_name))
        {
            return Resolution::Implicit;
        }
        if same_package {
            return Resolution::SamePackage;
        }
        if writer.imports_type(&self.qualified_name()) {
            return Resolution::Imported;
        }
        if self.enclosing.is_some() && writer.imports_type(&outermost.qualified_name()) {
            return Resolution::EnclosingImported;
        }
        Resolution::Qualified
    }

    fn render_name(&self, writer: &mut dyn Writer) {
        let resolution = self.resolve(writer);
        trace!(ty = %self.qualified_name(), ?resolution, "resolved class name");

        let name = match resolution {
            // The import binds only the innermost name
            Resolution::Imported => self.simple_name.to_string(),
            Resolution::Implicit | Resolution::SamePackage | Resolution::EnclosingImported => {
                self.join_names('.')
            }
            Resolution::Masked | Resolution::Qualified => self.source_name(),
        };
        writer.emit_token(Token::Ident(&name));
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// Which naming rule applied to a class reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// Same package, but an explicit import claims the leading simple name.
    Masked,
    /// Lives in the implicitly visible package.
    Implicit,
    SamePackage,
    /// The unit imports exactly this type.
    Imported,
    /// The unit imports the top-level class enclosing this nested type.
    EnclosingImported,
    Qualified,
}

/// A type reference.
///
/// Types are immutable and cheap to clone; clones share their name data.
///
/// # Example
///
/// ```
/// use javagen_codegen::types;
///
/// let outer = types::type_named("com.example.Outer").unwrap();
/// let inner = outer.nested_class("Inner").unwrap();
/// assert_eq!(inner.binary_name(), "Outer$Inner");
/// assert_eq!(inner.qualified_name(), "com.example.Outer$Inner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JType {
    Primitive(Primitive),
    /// A class type; nested classes carry their enclosing class.
    Class(Arc<ClassType>),
    /// A class type with type arguments, e.g. `List<String>`.
    Parameterized {
        raw: Arc<ClassType>,
        args: Arc<[JType]>,
    },
    Array(Arc<JType>),
}

impl JType {
    /// Create a top-level class type.
    pub fn class(package: &str, simple_name: &str) -> Result<Self> {
        javagen_core::validate_package_name(package)?;
        validate_identifier(simple_name)?;
        Ok(Self::Class(Arc::new(ClassType::top_level(
            package,
            simple_name,
        ))))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Whether this is a plain (non-parameterized) class type.
    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// The class underlying a class or parameterized type.
    pub fn class_type(&self) -> Option<&ClassType> {
        match self {
            Self::Class(c) | Self::Parameterized { raw: c, .. } => Some(c),
            Self::Primitive(_) | Self::Array(_) => None,
        }
    }

    /// Type arguments of a parameterized type.
    pub fn type_args(&self) -> &[JType] {
        match self {
            Self::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    pub fn simple_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.as_str().to_string(),
            Self::Class(c) | Self::Parameterized { raw: c, .. } => c.simple_name().to_string(),
            Self::Array(elem) => format!("{}[]", elem.simple_name()),
        }
    }

    /// Binary name; parameterized types answer for their raw type.
    pub fn binary_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.as_str().to_string(),
            Self::Class(c) | Self::Parameterized { raw: c, .. } => c.binary_name(),
            Self::Array(elem) => format!("{}[]", elem.binary_name()),
        }
    }

    /// Qualified name; parameterized types answer for their raw type.
    pub fn qualified_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.as_str().to_string(),
            Self::Class(c) | Self::Parameterized { raw: c, .. } => c.qualified_name(),
            Self::Array(elem) => format!("{}[]", elem.qualified_name()),
        }
    }

    /// Primitive counterpart of a wrapper class, or this type itself.
    pub fn unbox(&self) -> JType {
        match self {
            Self::Class(c) => match c.unboxed {
                Some(p) => Self::Primitive(p),
                None => self.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Wrapper class of a primitive, or this type itself.
    pub fn boxed(&self) -> JType {
        match self {
            Self::Primitive(p) => {
                let mut wrapper =
                    ClassType::top_level(javagen_core::DEFAULT_IMPLICIT_PACKAGE, p.wrapper_name());
                wrapper.unboxed = (*p != Primitive::Void).then_some(*p);
                Self::Class(Arc::new(wrapper))
            }
            _ => self.clone(),
        }
    }

    /// Parameterize a class type.
    ///
    /// Primitives, wrapper classes, arrays and already parameterized types
    /// cannot take type arguments, and primitives cannot be type arguments.
    /// An empty argument list returns the type unchanged.
    pub fn type_arg(&self, args: impl IntoIterator<Item = JType>) -> Result<JType> {
        let raw = match self {
            Self::Class(c) if c.unboxed.is_none() => c,
            _ => {
                return Err(Error::invalid_type_operation(
                    "add type arguments",
                    self.qualified_name(),
                ));
            }
        };

        let args: Vec<JType> = args.into_iter().collect();
        if let Some(arg) = args.iter().find(|a| a.is_primitive()) {
            return Err(Error::invalid_type_operation(
                "use a primitive as type argument",
                arg.qualified_name(),
            ));
        }
        if args.is_empty() {
            return Ok(self.clone());
        }

        Ok(Self::Parameterized {
            raw: Arc::clone(raw),
            args: args.into(),
        })
    }

    /// A class nested in this one, in the same package.
    pub fn nested_class(&self, name: &str) -> Result<JType> {
        match self {
            Self::Class(c) => {
                validate_identifier(name)?;
                Ok(Self::Class(Arc::new(ClassType::nested(c, name))))
            }
            _ => Err(Error::invalid_type_operation(
                "nest a class",
                self.qualified_name(),
            )),
        }
    }

    /// Array type with this element type.
    pub fn array(&self) -> JType {
        Self::Array(Arc::new(self.clone()))
    }

    /// The erasure: parameterized types lose their arguments.
    pub fn erasure(&self) -> JType {
        match self {
            Self::Parameterized { raw, .. } => Self::Class(Arc::clone(raw)),
            Self::Array(elem) => elem.erasure().array(),
            _ => self.clone(),
        }
    }

    /// `Type.class`
    pub fn class_literal(&self) -> Expr {
        Expr::StaticRef {
            ty: self.erasure(),
            member: StaticMember::Class,
        }
    }

    /// `Type.this`
    pub fn this_ref(&self) -> Expr {
        Expr::StaticRef {
            ty: self.erasure(),
            member: StaticMember::This,
        }
    }

    /// `Type.super`
    pub fn super_ref(&self) -> Expr {
        Expr::StaticRef {
            ty: self.erasure(),
            member: StaticMember::Super,
        }
    }

    /// `new Type(...)`
    pub fn new_instance(&self) -> Call {
        Call::New {
            ty: self.clone(),
            args: Vec::new(),
        }
    }

    /// `Type.name(...)`
    ///
    /// Fails if `name` is not a legal method name.
    pub fn call_static(&self, name: impl Into<String>) -> Result<Call> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Call::Static {
            ty: self.erasure(),
            name,
            args: Vec::new(),
        })
    }

    /// `Type::name`
    pub fn method_ref(&self, name: impl Into<String>) -> Expr {
        Expr::MethodRef {
            receiver: MethodRefReceiver::Type(self.clone()),
            name: name.into(),
        }
    }
}

impl Render for JType {
    fn render(&self, writer: &mut dyn Writer) {
        match self {
            Self::Primitive(p) => writer.emit_token(Token::Keyword(p.keyword())),
            Self::Class(c) => c.render_name(writer),
            Self::Parameterized { raw, args } => {
                raw.render_name(writer);
                writer.emit_token(Token::Punct(Punct::Lt));
                render_separated(args, writer);
                writer.emit_token(Token::Punct(Punct::Gt));
            }
            Self::Array(elem) => {
                elem.render(writer);
                writer.emit_token(Token::Punct(Punct::LBracket));
                writer.emit_token(Token::Punct(Punct::RBracket));
            }
        }
    }
}

impl From<Primitive> for JType {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl fmt::Display for JType {
    /// Fully qualified source form, e.g. `java.util.List<java.util.Map.Entry>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Class(c) => f.write_str(&c.source_name()),
            Self::Parameterized { raw, args } => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "{}<{}>", raw.source_name(), args.join(", "))
            }
            Self::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}
