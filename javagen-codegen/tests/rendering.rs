//! Snapshot tests for rendering nodes into compilation units.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::sync::Arc;

use javagen_codegen::generation::{ClassRegistry, UnitContext};
use javagen_codegen::{GenerationContext, RenderConfig, SourceWriter, exprs, types};
use javagen_core::Indent;

fn unit(package: &str, imports: &[&str]) -> UnitContext {
    imports
        .iter()
        .fold(UnitContext::new(package).unwrap(), |unit, import| {
            unit.with_import(import).unwrap()
        })
}

#[test]
fn test_imported_and_masked_names() {
    let local_list = types::reference("com.example", "List").unwrap();
    let list = types::type_named("java.util.List").unwrap();
    let array_list = types::type_named("java.util.ArrayList")
        .unwrap()
        .type_arg([types::string()])
        .unwrap();

    let code = SourceWriter::new(unit("com.example", &["java.util.List", "java.util.ArrayList"]))
        .expr_line(&array_list.new_instance())
        .expr_line(&list.class_literal())
        .expr_line(&local_list.class_literal())
        .expr_line(&types::type_named("java.util.Set").unwrap().class_literal())
        .finish();

    insta::assert_snapshot!(code, @r"
    new ArrayList<String>()
    List.class
    com.example.List.class
    java.util.Set.class
    ");
}

#[test]
fn test_implicit_package_shadowed_by_known_class() {
    let mut classes = ClassRegistry::new();
    classes.add("com.example.String");
    let shadowing = unit("com.example", &[]).with_classes(Arc::new(classes));

    let code = SourceWriter::new(shadowing)
        .expr_line(&types::string().class_literal())
        .expr_line(&types::reference("com.example", "String").unwrap().class_literal())
        .expr_line(&types::object().class_literal())
        .finish();

    insta::assert_snapshot!(code, @r"
    java.lang.String.class
    String.class
    Object.class
    ");
}

#[test]
fn test_nested_classes() {
    let inner = types::type_named("com.example.Outer$Inner").unwrap();
    let deep = inner.nested_class("Deep").unwrap();

    let here = SourceWriter::new(unit("com.example", &[]))
        .expr_line(&inner.this_ref())
        .expr_line(&deep.new_instance())
        .finish();
    let elsewhere = SourceWriter::new(unit("org.other", &[]))
        .expr_line(&inner.this_ref())
        .expr_line(&deep.new_instance())
        .finish();

    insta::assert_snapshot!(here, @r"
    Outer.Inner.this
    new Outer.Inner.Deep()
    ");
    insta::assert_snapshot!(elsewhere, @r"
    com.example.Outer.Inner.this
    new com.example.Outer.Inner.Deep()
    ");
}

#[test]
fn test_nested_class_references_follow_imports() {
    let entry = types::type_named("java.util.Map$Entry").unwrap();
    let state = types::type_named("java.lang.Thread$State").unwrap();
    let inner = types::type_named("com.example.Outer$Inner").unwrap();

    let mut classes = ClassRegistry::new();
    classes.add("com.example.Thread");
    let code = SourceWriter::new(
        unit("com.example", &["java.util.Map$Entry", "org.other.Outer"])
            .with_classes(Arc::new(classes)),
    )
    .expr_line(&entry.class_literal())
    .expr_line(&state.class_literal())
    .expr_line(&inner.class_literal())
    .finish();

    let through_outer = SourceWriter::new(unit("org.other", &["java.util.Map"]))
        .expr_line(&entry.class_literal())
        .expr_line(&state.class_literal())
        .finish();

    insta::assert_snapshot!(code, @r"
    Entry.class
    java.lang.Thread.State.class
    com.example.Outer.Inner.class
    ");
    insta::assert_snapshot!(through_outer, @r"
    Map.Entry.class
    Thread.State.class
    ");
}

#[test]
fn test_calls_and_arguments() {
    let mut ctx = GenerationContext::new();
    let objects = types::type_named("java.util.Objects").unwrap();

    let code = SourceWriter::new(unit("com.example", &["java.util.Objects"]))
        .expr_line(
            &objects
                .call_static("requireNonNull")
                .unwrap()
                .arg(ctx.name("value").unwrap())
                .arg(exprs::string("value must not be null")),
        )
        .expr_line(
            &exprs::call("configure")
                .unwrap()
                .arg(exprs::array_of_ints([1, 2, 3]))
                .arg(exprs::hex_grouped(0xdead_beef_i64, 4))
                .arg(exprs::binary(5)),
        )
        .expr_line(&exprs::call("register").unwrap().args([
            types::string().method_ref("valueOf"),
            exprs::unqualified_method_ref("close"),
            ctx.name("listener").unwrap().method_ref("accept"),
        ]))
        .finish();

    insta::assert_snapshot!(code, @r#"
    Objects.requireNonNull(value, "value must not be null")
    configure({1, 2, 3}, 0xdead_beefL, 0b101)
    register(String::valueOf, this::close, listener::accept)
    "#);
}

#[test]
fn test_indented_block() {
    let config = RenderConfig::default().with_indent(Indent::Spaces(2));
    let code = SourceWriter::with_config(unit("com.example", &[]), config)
        .line("static {")
        .indent()
        .expr_line(&exprs::call("init").unwrap().arg(types::INT.array().class_literal()))
        .dedent()
        .line("}")
        .finish();

    insta::assert_snapshot!(code, @r"
    static {
      init(int[].class)
    }
    ");
}

#[test]
fn test_config_from_toml() {
    let config = RenderConfig::from_toml_str("indent = \"tab\"\nimplicit_package = \"com.example.lang\"").unwrap();
    let code = SourceWriter::with_config(unit("app", &[]), config)
        .indent()
        .expr_line(&types::reference("com.example.lang", "Base").unwrap().class_literal())
        .expr_line(&types::string().class_literal())
        .finish();

    assert_eq!(code, "\tBase.class\n\tjava.lang.String.class\n");
}

#[test]
fn test_rendering_is_repeatable() {
    let unit = unit("com.example", &["java.util.Map"]);
    let entry = types::type_named("java.util.Map")
        .unwrap()
        .type_arg([types::string(), types::object().array()])
        .unwrap();

    let first = SourceWriter::new(unit.clone()).node(&entry).finish();
    let second = SourceWriter::new(unit).node(&entry).finish();
    assert_eq!(first, "Map<String, Object[]>");
    assert_eq!(first, second);
}
