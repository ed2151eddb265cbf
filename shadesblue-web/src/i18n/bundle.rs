use once_cell::sync::Lazy;
use serde_json::Value;

const EN: &str = include_str!("../../i18n/en.json");

static STRINGS: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(EN).unwrap_or_else(|err| {
        log::error!("english string table is invalid: {err}");
        Value::Object(serde_json::Map::new())
    })
});

/// The bundled English string table.
pub(super) fn strings() -> &'static Value {
    &STRINGS
}
