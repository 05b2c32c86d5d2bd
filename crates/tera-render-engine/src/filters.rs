//! Case-conversion filters available to every rendered template.

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Tera, Value};

type FilterArgs = HashMap<String, Value>;

/// Register the case filters on a Tera instance.
pub(crate) fn register(tera: &mut Tera) {
    tera.register_filter("snake_case", |value: &Value, _: &FilterArgs| {
        convert("snake_case", value, |s| s.to_snake_case())
    });
    tera.register_filter("pascal_case", |value: &Value, _: &FilterArgs| {
        convert("pascal_case", value, |s| s.to_pascal_case())
    });
    tera.register_filter("camel_case", |value: &Value, _: &FilterArgs| {
        convert("camel_case", value, |s| s.to_lower_camel_case())
    });
    tera.register_filter("kebab_case", |value: &Value, _: &FilterArgs| {
        convert("kebab_case", value, |s| s.to_kebab_case())
    });
}

fn convert(filter: &str, value: &Value, case: impl Fn(&str) -> String) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))?;
    Ok(Value::String(case(s)))
}
