use crate::i18n::bundle::strings;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    get_nested_value(strings(), key).and_then(|v| render_value(v, args))
}

/// Translate a key; unknown keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate with `{name}` / `{{name}}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Translate with a single substitution.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

/// A string array entry, empty when the key is missing or not an array.
#[must_use]
pub fn t_list(key: &str) -> Vec<String> {
    get_nested_value(strings(), key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        assert_eq!(
            render_value(&value, Some(&args)).unwrap(),
            "Hello, Tester! Tester!"
        );
    }

    #[test]
    fn non_string_entries_do_not_render() {
        assert_eq!(render_value(&serde_json::json!({"one": "x"}), None), None);
        assert_eq!(t("menu"), "menu");
    }

    #[test]
    fn missing_key_renders_itself() {
        assert_eq!(t("nope.not.here"), "nope.not.here");
    }

    #[test]
    fn bundled_strings_resolve() {
        assert_eq!(t("menu.title"), "Accessibility options");
        assert_eq!(tr1("announce.text_size", "size", "large"), "Text size set to large");
        assert_eq!(t_list("labs.keys_items").len(), 3);
        assert!(t_list("menu.title").is_empty());
    }
}
