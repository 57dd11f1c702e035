//! The writer contract between model nodes and text emission.

use javagen_core::DEFAULT_IMPLICIT_PACKAGE;

use super::Token;

/// Sink and resolution context for rendering nodes.
///
/// A writer knows which compilation unit is being emitted (its package and
/// imports) and receives the token stream produced by [`Render`] impls.
pub trait Writer {
    /// Package of the compilation unit being written (empty for the unnamed package).
    fn current_package(&self) -> &str;

    /// Whether the unit explicitly imports some type with this simple name.
    fn has_explicit_import(&self, simple_name: &str) -> bool;

    /// Whether the unit explicitly imports exactly this qualified name.
    fn imports_type(&self, _qualified_name: &str) -> bool {
        false
    }

    /// Whether a class with this qualified name is known to the generation.
    ///
    /// Used to detect classes in the current package that shadow types of
    /// the implicitly visible package.
    fn has_class(&self, qualified_name: &str) -> bool;

    /// Package whose types are visible without import.
    fn implicit_package(&self) -> &str {
        DEFAULT_IMPLICIT_PACKAGE
    }

    /// Emit raw text.
    fn emit_raw(&mut self, text: &str);

    /// Emit a token.
    fn emit_token(&mut self, token: Token<'_>);
}

/// Trait for model nodes that render themselves through a [`Writer`].
pub trait Render {
    /// Emit this node's tokens.
    fn render(&self, writer: &mut dyn Writer);
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, writer: &mut dyn Writer) {
        (*self).render(writer)
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, writer: &mut dyn Writer) {
        self.as_ref().render(writer)
    }
}

/// Render `items` separated by commas.
pub(crate) fn render_separated<T: Render>(items: &[T], writer: &mut dyn Writer) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.emit_token(Token::Punct(super::Punct::Comma));
        }
        item.render(writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Punct;
    use crate::types;

    /// Writer relying on every default method.
    #[derive(Default)]
    struct Minimal {
        out: String,
    }

    impl Writer for Minimal {
        fn current_package(&self) -> &str {
            "p"
        }

        fn has_explicit_import(&self, _simple_name: &str) -> bool {
            false
        }

        fn has_class(&self, _qualified_name: &str) -> bool {
            false
        }

        fn emit_raw(&mut self, text: &str) {
            self.out.push_str(text);
        }

        fn emit_token(&mut self, token: Token<'_>) {
            self.out.push_str(token.text());
        }
    }

    #[test]
    fn test_defaults() {
        let w = Minimal::default();
        assert!(!w.imports_type("java.util.List"));
        assert_eq!(w.implicit_package(), "java.lang");
    }

    #[test]
    fn test_render_through_defaults() {
        let mut w = Minimal::default();
        types::type_named("java.util.List").unwrap().render(&mut w);
        w.emit_token(Token::Punct(Punct::Comma));
        types::string().render(&mut w);
        assert_eq!(w.out, "java.util.List,String");
    }
}
