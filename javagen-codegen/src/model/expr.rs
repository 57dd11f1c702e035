//! Expression nodes.

use std::fmt;
use std::sync::Arc;

use javagen_core::quote_string;

use super::{Call, IntLiteral, JType};
use crate::builder::{
    Keyword, Punct, Render, Token, Writer, render_separated, render_to_string,
};
use crate::generation::UnitContext;

/// A canonical identifier node.
///
/// Names are handed out by a [`GenerationContext`](crate::GenerationContext),
/// which returns the same node for the same identifier. Equality is node
/// identity: two names are equal only if they came from the same context
/// lookup.
#[derive(Clone)]
pub struct Name(Arc<str>);

impl Name {
    pub(crate) fn new(identifier: &str) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(a: &Name, b: &Name) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        Name::ptr_eq(self, other)
    }
}

impl Eq for Name {}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.as_str()).finish()
    }
}

/// Member selected by a static member reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticMember {
    Class,
    This,
    Super,
}

impl StaticMember {
    pub fn keyword(&self) -> Keyword {
        match self {
            Self::Class => Keyword::Class,
            Self::This => Keyword::This,
            Self::Super => Keyword::Super,
        }
    }
}

/// Left-hand side of a method reference.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodRefReceiver {
    /// No explicit receiver; rendered against `this`.
    Unqualified,
    Expr(Box<Expr>),
    Type(JType),
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An `int` or `long` literal.
    Int(IntLiteral),
    /// A string literal, stored unescaped.
    Str(String),
    Name(Name),
    /// An array initializer `{a, b}`.
    Array(Vec<Expr>),
    /// `Type.class`, `Type.this` or `Type.super`.
    StaticRef { ty: JType, member: StaticMember },
    /// `receiver::name`
    MethodRef {
        receiver: MethodRefReceiver,
        name: String,
    },
    Call(Box<Call>),
}

impl Expr {
    /// The canonical name node, if this is a name reference.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Members of an array initializer.
    pub fn array_members(&self) -> Option<&[Expr]> {
        match self {
            Self::Array(members) => Some(members),
            _ => None,
        }
    }

    /// `self::name`
    pub fn method_ref(self, name: impl Into<String>) -> Expr {
        Expr::MethodRef {
            receiver: MethodRefReceiver::Expr(Box::new(self)),
            name: name.into(),
        }
    }
}

impl Render for Expr {
    fn render(&self, writer: &mut dyn Writer) {
        match self {
            Self::Int(lit) => writer.emit_token(Token::Literal(&lit.encode())),
            Self::Str(s) => writer.emit_token(Token::Literal(&quote_string(s))),
            Self::Name(name) => writer.emit_token(Token::Ident(name.as_str())),
            Self::Array(members) => {
                writer.emit_token(Token::Punct(Punct::LBrace));
                render_separated(members, writer);
                writer.emit_token(Token::Punct(Punct::RBrace));
            }
            Self::StaticRef { ty, member } => {
                ty.render(writer);
                writer.emit_token(Token::Punct(Punct::Dot));
                writer.emit_token(Token::Keyword(member.keyword()));
            }
            Self::MethodRef { receiver, name } => {
                match receiver {
                    MethodRefReceiver::Unqualified => {
                        writer.emit_token(Token::Keyword(Keyword::This))
                    }
                    MethodRefReceiver::Expr(expr) => expr.render(writer),
                    MethodRefReceiver::Type(ty) => ty.render(writer),
                }
                writer.emit_token(Token::Punct(Punct::DoubleColon));
                writer.emit_token(Token::Ident(name));
            }
            Self::Call(call) => call.render(writer),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders outside any compilation unit: class types appear qualified
    /// unless they belong to the implicitly visible package.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_to_string(self, &UnitContext::default()))
    }
}

impl From<IntLiteral> for Expr {
    fn from(lit: IntLiteral) -> Self {
        Self::Int(lit)
    }
}

impl From<Name> for Expr {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(Box::new(call))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Radix;
    use crate::types;

    fn render(expr: &Expr) -> String {
        render_to_string(expr, &UnitContext::new("p").unwrap())
    }

    #[test]
    fn test_name_identity() {
        let a = Name::new("x");
        let b = a.clone();
        let c = Name::new("x");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(format!("{:?}", a), "Name(\"x\")");
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(render(&IntLiteral::long(16, Radix::Hex, 0).into()), "0x10L");
        assert_eq!(render(&Expr::Str("a\"b".into())), "\"a\\\"b\"");
        assert_eq!(render(&Name::new("count").into()), "count");
    }

    #[test]
    fn test_render_arrays() {
        assert_eq!(render(&Expr::Array(Vec::new())), "{}");
        let members = vec![
            IntLiteral::int(1, Radix::Decimal, 0).into(),
            Expr::Str("two".into()),
            Expr::Array(vec![Name::new("three").into()]),
        ];
        assert_eq!(render(&Expr::Array(members)), "{1, \"two\", {three}}");
    }

    #[test]
    fn test_render_static_refs() {
        let outer = types::type_named("p.Outer").unwrap();
        assert_eq!(render(&outer.class_literal()), "Outer.class");
        assert_eq!(render(&outer.this_ref()), "Outer.this");
        assert_eq!(render(&outer.super_ref()), "Outer.super");
        assert_eq!(render(&types::INT.class_literal()), "int.class");
        assert_eq!(
            render(&types::string().array().class_literal()),
            "String[].class"
        );
    }

    #[test]
    fn test_render_method_refs() {
        let unqualified = Expr::MethodRef {
            receiver: MethodRefReceiver::Unqualified,
            name: "run".into(),
        };
        assert_eq!(render(&unqualified), "this::run");
        assert_eq!(render(&types::string().method_ref("valueOf")), "String::valueOf");
        assert_eq!(
            render(&Expr::from(Name::new("list")).method_ref("add")),
            "list::add"
        );
    }

    #[test]
    fn test_accessors() {
        let name = Name::new("x");
        assert!(Expr::from(name.clone()).as_name().is_some_and(|n| *n == name));
        assert!(Expr::Str("s".into()).as_name().is_none());
        assert_eq!(Expr::Array(Vec::new()).array_members(), Some(&[][..]));
    }
}
