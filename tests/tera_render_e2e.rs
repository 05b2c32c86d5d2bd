//! End-to-end behavior of `tera_render` through a loaded registry and the real engine.

use std::fs;

use serde_json::json;

use tera_render::error::{BindError, Error, ExecutionError};
use tera_render::extension::{self, FUNCTION_NAME};
use tera_render::host::{
    ArgumentExpr, CallArgument, DataChunk, FunctionRegistry, LogicalType, StringVector, Value,
};
use tera_render::TeraRenderBindData;

fn registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    extension::load(&mut registry);
    registry
}

/// Run one call where every argument is constant, over a single row.
fn render_constant(arguments: &[CallArgument]) -> Result<Option<String>, Error> {
    let chunk = DataChunk::from_call_site(arguments, 1, |_| None)?;
    let out = extension::invoke(&registry(), FUNCTION_NAME, arguments, &chunk)?;
    Ok(out.into_inner().remove(0))
}

fn text(s: &str) -> CallArgument {
    CallArgument::constant(Value::varchar(s))
}

fn autoescape(on: bool) -> CallArgument {
    CallArgument::constant(Value::Boolean(on)).named("autoescape")
}

#[test]
fn test_plain_template_passes_through() {
    let out = render_constant(&[text("Hello, World!")]).unwrap();
    assert_eq!(out.as_deref(), Some("Hello, World!"));
}

#[test]
fn test_literal_templates_ignore_context() {
    let context = json!({"name": "World", "items": [1, 2], "nested": {"a": "<b>"}}).to_string();
    for template in [
        "Hello, World!",
        "",
        "  leading and trailing  \n",
        "<p class=\"x\">B&O's 'quote' & more</p>",
        "curly } braces { alone",
    ] {
        for escape in [true, false] {
            let out = render_constant(&[text(template), text(&context), autoescape(escape)]).unwrap();
            assert_eq!(out.as_deref(), Some(template), "autoescape={escape}");
        }
    }
}

#[test]
fn test_variable_from_context() {
    let context = json!({"foo": "bar"}).to_string();
    let out = render_constant(&[text("Hello, {{ foo }}"), text(&context)]).unwrap();
    assert_eq!(out.as_deref(), Some("Hello, bar"));
}

#[test]
fn test_inline_escaping_defaults_on() {
    let template = text("{{ company }}");
    let context = text(r#"{"company": "B&O"}"#);

    let escaped = render_constant(&[template.clone(), context.clone()]).unwrap();
    assert_eq!(escaped.as_deref(), Some("B&amp;O"));

    let raw = render_constant(&[template, context, autoescape(false)]).unwrap();
    assert_eq!(raw.as_deref(), Some("B&O"));
}

#[test]
fn test_case_filters() {
    let out = render_constant(&[
        text("{{ name | snake_case }} {{ name | kebab_case }} {{ name | pascal_case }}"),
        text(&json!({"name": "order line item"}).to_string()),
    ])
    .unwrap();
    assert_eq!(out.as_deref(), Some("order_line_item order-line-item OrderLineItem"));
}

#[test]
fn test_unknown_option_fails_at_bind() {
    let err = render_constant(&[
        text("x"),
        CallArgument::constant(Value::Integer(1)).named("bogus"),
    ])
    .unwrap_err();
    assert_eq!(err, Error::Bind(BindError::UnknownArgument("bogus".into())));
}

#[test]
fn test_zero_arguments_fail_at_bind() {
    let chunk = DataChunk::new(vec![]).unwrap();
    let err = extension::invoke(&registry(), FUNCTION_NAME, &[], &chunk).unwrap_err();
    assert_eq!(err.to_string(), "tera_render takes at least one argument");
}

#[test]
fn test_extra_positional_argument_fails_at_execution() {
    let registry = registry();
    let arguments = [text("x"), text("{}"), text("extra")];
    // Binding succeeds: the trailing argument is unnamed.
    let bound = registry.bind(FUNCTION_NAME, &arguments).unwrap();
    let chunk = DataChunk::from_call_site(&arguments, 1, |_| None).unwrap();
    assert_eq!(
        bound.execute(&chunk).unwrap_err(),
        ExecutionError::InvalidArity {
            columns: 3,
            optional_args: 0
        }
    );
}

#[test]
fn test_missing_variable_names_it() {
    let err = render_constant(&[text("{{ missing_thing }}"), text("{}")]).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Error rendering template: Tera render error:"), "{message}");
    assert!(message.contains("missing_thing"), "{message}");
}

#[test]
fn test_invalid_json_context() {
    let err = render_constant(&[text("{{ a }}"), text("{not json")]).unwrap_err();
    assert!(
        err.to_string().starts_with("Error rendering template: Invalid JSON:"),
        "{err}"
    );
}

#[test]
fn test_bound_configurations_compare_structurally() {
    let registry = registry();
    let base = [text("x"), autoescape(false)];
    let a = registry.bind(FUNCTION_NAME, &base).unwrap();
    let b = registry.bind(FUNCTION_NAME, &base).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.clone(), a);

    let with_path = [
        text("x"),
        autoescape(false),
        text("templates/*").named("template_path"),
    ];
    let c = registry.bind(FUNCTION_NAME, &with_path).unwrap();
    assert_ne!(a, c);

    let data = c
        .bind_data
        .as_any()
        .downcast_ref::<TeraRenderBindData>()
        .unwrap();
    assert_eq!(data.template_path(), "templates/*");
    assert_eq!(data.optional_args(), 2);
}

#[test]
fn test_columns_with_nulls() {
    let arguments = [
        CallArgument::column("template", LogicalType::Varchar),
        CallArgument::column("context", LogicalType::Json),
    ];
    // A context column is rejected at bind time: only the template may vary per row.
    let err = registry().bind(FUNCTION_NAME, &arguments).unwrap_err();
    assert_eq!(err, BindError::NonConstantArgument { position: 1 });

    let arguments = [
        CallArgument::column("template", LogicalType::Varchar),
        text(r#"{"n": 7}"#),
    ];
    let templates: StringVector = [Some("n={{ n }}"), None, Some("{{ n * 2 }}")]
        .into_iter()
        .collect();
    let chunk = DataChunk::from_call_site(&arguments, templates.len(), |name| {
        (name == "template").then_some(&templates)
    })
    .unwrap();
    let out = extension::invoke(&registry(), FUNCTION_NAME, &arguments, &chunk).unwrap();
    assert_eq!(
        out.into_inner(),
        vec![Some("n=7".to_string()), None, Some("14".to_string())]
    );
}

#[test]
fn test_null_context_yields_null() {
    let out = render_constant(&[text("{{ a }}"), CallArgument::constant(Value::Null)]).unwrap();
    assert_eq!(out, None);
}

#[test]
fn test_file_mode_escapes_listed_suffixes_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.html"), "<p>{{ body }}</p>").unwrap();
    fs::write(dir.path().join("note.txt"), "{{ body }}").unwrap();
    let glob = format!("{}/*", dir.path().display());

    let options = |template: &str| {
        vec![
            text(template),
            text(r#"{"body": "<b>hi</b>"}"#),
            text(&glob).named("template_path"),
            CallArgument::list(vec![ArgumentExpr::Constant(Value::varchar(".html"))])
                .named("autoescape_extensions"),
        ]
    };

    let html = render_constant(&options("page.html")).unwrap();
    assert_eq!(html.as_deref(), Some("<p>&lt;b&gt;hi&lt;&#x2F;b&gt;</p>"));

    let txt = render_constant(&options("note.txt")).unwrap();
    assert_eq!(txt.as_deref(), Some("<b>hi</b>"));
}

#[test]
fn test_file_mode_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let glob = format!("{}/*", dir.path().display());

    let err = render_constant(&[text("nope.txt"), text("{}"), text(&glob).named("template_path")])
        .unwrap_err();
    assert!(err.to_string().contains("nope.txt"), "{err}");
}
