//! Invocation nodes.

use super::{Expr, JType};
use crate::builder::{Keyword, Punct, Render, Token, Writer, render_separated};

/// A method or constructor invocation.
///
/// Arguments are appended after construction:
///
/// ```
/// use javagen_codegen::{exprs, types};
///
/// let call = types::type_named("java.util.Objects")
///     .unwrap()
///     .call_static("hash")
///     .unwrap()
///     .arg(exprs::decimal(1))
///     .arg(exprs::string("a"));
/// assert_eq!(call.arguments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `name(args)`, receiver implied by context.
    Direct { name: String, args: Vec<Expr> },
    /// `Type.name(args)`
    Static {
        ty: JType,
        name: String,
        args: Vec<Expr>,
    },
    /// `new Type(args)`
    New { ty: JType, args: Vec<Expr> },
}

impl Call {
    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args_mut().push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = Expr>) -> Self {
        self.args_mut().extend(args);
        self
    }

    pub fn arguments(&self) -> &[Expr] {
        match self {
            Self::Direct { args, .. } | Self::Static { args, .. } | Self::New { args, .. } => args,
        }
    }

    /// Method name; `None` for constructor calls.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Direct { name, .. } | Self::Static { name, .. } => Some(name),
            Self::New { .. } => None,
        }
    }

    /// Owning type of static and constructor calls.
    pub fn owner(&self) -> Option<&JType> {
        match self {
            Self::Static { ty, .. } | Self::New { ty, .. } => Some(ty),
            Self::Direct { .. } => None,
        }
    }

    fn args_mut(&mut self) -> &mut Vec<Expr> {
        match self {
            Self::Direct { args, .. } | Self::Static { args, .. } | Self::New { args, .. } => args,
        }
    }
}

impl Render for Call {
    fn render(&self, writer: &mut dyn Writer) {
        match self {
            Self::Direct { name, .. } => writer.emit_token(Token::Ident(name)),
            Self::Static { ty, name, .. } => {
                ty.render(writer);
                writer.emit_token(Token::Punct(Punct::Dot));
                writer.emit_token(Token::Ident(name));
            }
            Self::New { ty, .. } => {
                writer.emit_token(Token::Keyword(Keyword::New));
                ty.render(writer);
            }
        }
        writer.emit_token(Token::Punct(Punct::LParen));
        render_separated(self.arguments(), writer);
        writer.emit_token(Token::Punct(Punct::RParen));
    }
}
