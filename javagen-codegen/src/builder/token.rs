//! Tokens emitted by node renderers.

/// Reserved words the model emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Void,
    Class,
    This,
    Super,
    New,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
            Self::Class => "class",
            Self::This => "this",
            Self::Super => "super",
            Self::New => "new",
        }
    }
}

/// Punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    Dot,
    Comma,
    DoubleColon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
}

impl Punct {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Comma => ",",
            Self::DoubleColon => "::",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }
}

/// A single token handed to a [`Writer`](super::Writer).
///
/// Keywords, identifiers and literals are *word* tokens: a writer must keep
/// two adjacent word tokens apart (`new Foo`, not `newFoo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Keyword(Keyword),
    Punct(Punct),
    /// An identifier or a (possibly qualified) class name.
    Ident(&'a str),
    /// A fully encoded literal such as `0xffL` or `"text"`.
    Literal(&'a str),
}

impl Token<'_> {
    /// Text of the token as it appears in source.
    pub fn text(&self) -> &str {
        match self {
            Token::Keyword(k) => k.as_str(),
            Token::Punct(p) => p.as_str(),
            Token::Ident(s) | Token::Literal(s) => s,
        }
    }

    /// Whether the token needs separation from a preceding word.
    pub fn is_word(&self) -> bool {
        !matches!(self, Token::Punct(_))
    }
}
