//! `application/x-www-form-urlencoded` query strings, as `URLSearchParams` reads and writes them.

use url::form_urlencoded;

/// Decode a query string (with or without a leading `?`) into ordered pairs.
#[must_use]
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Encode ordered pairs; empty input yields an empty string.
#[must_use]
pub fn build_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}

/// Replace or drop keys in `pairs`. A `None` value removes the key; others
/// are overwritten in place or appended.
pub fn patch_query(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    match value {
        None => pairs.retain(|(k, _)| k != key),
        Some(v) => match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = v.to_string(),
            None => pairs.push((key.to_string(), v.to_string())),
        },
    }
}

/// Form-encode a single component (spaces become `+`).
#[must_use]
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plus_and_percent_escapes() {
        let pairs = parse_query("?q=leaflet+map&source=open-source&x=%2Fa%20b");
        assert_eq!(pairs[0], ("q".into(), "leaflet map".into()));
        assert_eq!(pairs[1].1, "open-source");
        assert_eq!(pairs[2].1, "/a b");
    }

    #[test]
    fn malformed_escape_is_kept_literally() {
        let pairs = parse_query("a=100%&b=%zz");
        assert_eq!(pairs[0].1, "100%");
        assert_eq!(pairs[1].1, "%zz");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert!(parse_query("?").is_empty());
        assert_eq!(parse_query("&&q=x&").len(), 1);
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_component("a b&c/d+e"), "a+b%26c%2Fd%2Be");
        assert_eq!(build_query(&[("q", "r&d")]), "q=r%26d");
    }

    #[test]
    fn patch_overwrites_then_removes() {
        let mut pairs = parse_query("page=3&sort=name");
        patch_query(&mut pairs, "page", Some("1"));
        patch_query(&mut pairs, "sort", None);
        patch_query(&mut pairs, "dir", Some("desc"));
        assert_eq!(build_query(&pairs), "page=1&dir=desc");
    }
}
