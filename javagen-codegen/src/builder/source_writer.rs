//! Buffered writer producing indented source text.

use javagen_core::RenderConfig;

use super::{Punct, Render, Token, Writer};
use crate::generation::UnitContext;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '"' || c == '\''
}

/// [`Writer`] that renders into a `String` for one compilation unit.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example
///
/// ```
/// use javagen_codegen::{SourceWriter, exprs, generation::UnitContext, types};
///
/// let unit = UnitContext::new("com.example").unwrap();
/// let list = types::type_named("java.util.ArrayList").unwrap();
/// let code = SourceWriter::new(unit)
///     .expr_line(&list.new_instance().arg(exprs::decimal(16)))
///     .finish();
///
/// assert_eq!(code, "new java.util.ArrayList(16)\n");
/// ```
#[derive(Debug, Clone)]
pub struct SourceWriter {
    unit: UnitContext,
    config: RenderConfig,
    indent_level: usize,
    at_line_start: bool,
    buffer: String,
}

impl SourceWriter {
    /// Create a writer for `unit` with the default configuration.
    pub fn new(unit: UnitContext) -> Self {
        Self::with_config(unit, RenderConfig::default())
    }

    /// Create a writer for `unit` with an explicit configuration.
    pub fn with_config(unit: UnitContext, config: RenderConfig) -> Self {
        Self {
            unit,
            config,
            indent_level: 0,
            at_line_start: true,
            buffer: String::new(),
        }
    }

    /// Render a node (mutable).
    pub fn push_node(&mut self, node: &dyn Render) -> &mut Self {
        node.render(self);
        self
    }

    /// Add a line of raw text with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.emit_raw(s);
        self.push_newline()
    }

    /// End the current line (mutable).
    pub fn push_newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Render a node.
    pub fn node(mut self, node: &dyn Render) -> Self {
        self.push_node(node);
        self
    }

    /// Render a node and end the line.
    pub fn expr_line(mut self, node: &dyn Render) -> Self {
        self.push_node(node).push_newline();
        self
    }

    /// Add a line of raw text.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// The unit this writer renders into.
    pub fn unit(&self) -> &UnitContext {
        &self.unit
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated source.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.buffer.push_str(self.config.indent.as_str());
            }
            self.at_line_start = false;
        }
    }
}

impl Writer for SourceWriter {
    fn current_package(&self) -> &str {
        self.unit.package()
    }

    fn has_explicit_import(&self, simple_name: &str) -> bool {
        self.unit.imports().has_simple_name(simple_name)
    }

    fn imports_type(&self, qualified_name: &str) -> bool {
        self.unit.imports().contains(qualified_name)
    }

    fn has_class(&self, qualified_name: &str) -> bool {
        self.unit.classes().contains(qualified_name)
    }

    fn implicit_package(&self) -> &str {
        &self.config.implicit_package
    }

    fn emit_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_indent();
        self.buffer.push_str(text);
    }

    fn emit_token(&mut self, token: Token<'_>) {
        if token.is_word() && !self.at_line_start && self.buffer.ends_with(is_word_char) {
            self.buffer.push(' ');
        }
        match token {
            Token::Punct(Punct::Comma) => self.emit_raw(", "),
            other => self.emit_raw(other.text()),
        }
    }
}

/// Render a single node against `unit` with the default configuration.
pub fn render_to_string(node: &dyn Render, unit: &UnitContext) -> String {
    SourceWriter::new(unit.clone()).node(node).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Keyword;

    fn writer() -> SourceWriter {
        SourceWriter::new(UnitContext::default())
    }

    #[test]
    fn test_word_spacing() {
        let mut w = writer();
        w.emit_token(Token::Keyword(Keyword::New));
        w.emit_token(Token::Ident("Foo"));
        w.emit_token(Token::Punct(Punct::LParen));
        w.emit_token(Token::Literal("1"));
        w.emit_token(Token::Punct(Punct::Comma));
        w.emit_token(Token::Literal("\"a\""));
        w.emit_token(Token::Punct(Punct::RParen));
        assert_eq!(w.finish(), "new Foo(1, \"a\")");
    }

    #[test]
    fn test_no_space_after_punct() {
        let mut w = writer();
        w.emit_token(Token::Ident("Foo"));
        w.emit_token(Token::Punct(Punct::Dot));
        w.emit_token(Token::Keyword(Keyword::Class));
        assert_eq!(w.finish(), "Foo.class");
    }

    #[test]
    fn test_indentation() {
        let code = writer()
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .finish();
        assert_eq!(code, "class Foo {\n    int x;\n}\n");
    }

    #[test]
    fn test_configured_indent() {
        let config = RenderConfig::default().with_indent(javagen_core::Indent::Tab);
        let code = SourceWriter::with_config(UnitContext::default(), config)
            .indent()
            .line("x")
            .finish();
        assert_eq!(code, "\tx\n");
    }

    #[test]
    fn test_mutable_api() {
        let mut w = writer();
        w.push_line("a").push_indent().push_line("b").push_dedent().push_line("c");
        assert_eq!(w.as_str(), "a\n    b\nc\n");
    }

    #[test]
    fn test_resolution_queries() {
        let unit = UnitContext::new("com.example")
            .unwrap()
            .with_import("java.util.List")
            .unwrap();
        let w = SourceWriter::new(unit);
        assert_eq!(w.current_package(), "com.example");
        assert!(w.has_explicit_import("List"));
        assert!(w.imports_type("java.util.List"));
        assert!(!w.has_class("com.example.String"));
        assert_eq!(w.implicit_package(), "java.lang");
    }
}
