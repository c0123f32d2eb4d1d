//! Parametrization identifiers
//!
//! Instance ids like `a-dog` or `1.5-x y` become safe identifiers so they can
//! be used as path segments and filter keys.

/// Turn a raw parametrization id (or one of its components) into a safe
/// identifier.
///
/// Non `[A-Za-z0-9_]` characters become `_`; a leading digit or an empty
/// result gets a `_` prefix. Applying it twice is a no-op.
pub fn sanitize_param_id(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Split a node name like `test_m[a-dog]` into `("test_m", Some("a-dog"))`.
///
/// Only a trailing `[...]` counts; names without one return `None`.
pub fn split_param_suffix(name: &str) -> (&str, Option<&str>) {
    if !name.ends_with(']') {
        return (name, None);
    }
    match name.find('[') {
        Some(open) if open > 0 => (&name[..open], Some(&name[open + 1..name.len() - 1])),
        _ => (name, None),
    }
}

/// Components of a raw parametrization id (`a-dog` → `a`, `dog`).
pub fn param_components(raw_id: &str) -> Vec<String> {
    raw_id
        .split('-')
        .filter(|part| !part.is_empty())
        .map(sanitize_param_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_identifiers() {
        assert_eq!(sanitize_param_id("dog"), "dog");
        assert_eq!(sanitize_param_id("mode_a"), "mode_a");
    }

    #[test]
    fn sanitize_prefixes_digits_and_replaces_symbols() {
        assert_eq!(sanitize_param_id("1"), "_1");
        assert_eq!(sanitize_param_id("a-dog"), "a_dog");
        assert_eq!(sanitize_param_id("1.5 x"), "_1_5_x");
        assert_eq!(sanitize_param_id(""), "_");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["1", "a-dog", "", "x y", "_2"] {
            let once = sanitize_param_id(raw);
            assert_eq!(sanitize_param_id(&once), once);
        }
    }

    #[test]
    fn split_suffix() {
        assert_eq!(split_param_suffix("test_x[1]"), ("test_x", Some("1")));
        assert_eq!(split_param_suffix("test_m[a-dog]"), ("test_m", Some("a-dog")));
        assert_eq!(split_param_suffix("test_y"), ("test_y", None));
        assert_eq!(split_param_suffix("[weird]"), ("[weird]", None));
    }

    #[test]
    fn split_suffix_keeps_nested_brackets_in_id() {
        assert_eq!(
            split_param_suffix("test_z[[1, 2]-x]"),
            ("test_z", Some("[1, 2]-x"))
        );
    }

    #[test]
    fn components_split_on_dash() {
        assert_eq!(param_components("a-dog"), vec!["a", "dog"]);
        assert_eq!(param_components("1"), vec!["_1"]);
        assert!(param_components("").is_empty());
    }
}
