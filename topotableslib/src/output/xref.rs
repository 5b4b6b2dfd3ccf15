//! Sphinx cross-reference markup.

use crate::data::FormatName;

/// `:ref:` role pairing a visible label with a lookup key.
pub fn sphinx_ref(label: &str, key: &str, suffix: &str) -> String {
    format!(":ref:`{} <{}{}>`", label, key, suffix)
}

/// Cross-reference cell for a format: keyed on the first alias, labelled
/// with all of them.
pub fn format_ref(format: &FormatName, suffix: &str) -> String {
    sphinx_ref(&format.label(), format.key(), suffix)
}
