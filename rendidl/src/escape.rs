//! XML entity escaping for metadata field values.
//!
//! Thin wrapper over `quick_xml::escape` so the rest of the crate deals in
//! owned, optional strings: an absent field stays absent, a present field
//! comes back as a fresh allocation safe to splice into a document.

use quick_xml::escape::{escape, unescape};

/// Escapes an optional raw field value for inclusion in XML text content.
///
/// `None` in, `None` out. Present values get `&`, `<`, `>`, `"` and `'`
/// replaced by their entity references. The input is treated as opaque
/// text; no validation is performed.
pub fn escape_field(value: Option<&str>) -> Option<String> {
    value.map(|raw| escape(raw).into_owned())
}

/// Inverse of [`escape_field`] for a present value.
///
/// Exposed so callers (and tests) can recover the original text from an
/// escaped document; the conversion path itself never unescapes.
pub fn unescape_field(value: &str) -> Result<String, quick_xml::escape::EscapeError> {
    Ok(unescape(value)?.into_owned())
}
