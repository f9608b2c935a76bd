//! Surgical template patching.
//!
//! Control points sometimes send their own DIDL-Lite document along with a
//! URI and expect to get it back, possibly with updated tag contents, when
//! they query the renderer later. Rewriting only the spans we understand
//! keeps whatever custom markup the control point embedded intact
//! byte-for-byte.

use tracing::debug;

/// Strategy for rewriting one delimited span of a template document.
///
/// The conversion layer only ever asks for "replace whatever sits between
/// these two delimiters"; swapping this implementation for a structural
/// XML editor would not change that contract.
pub trait TemplateEditor {
    /// Replaces the text strictly between the first `open` and the first
    /// following `close` with `content`.
    ///
    /// An absent `content` means "do not touch this field" (distinct from
    /// replacing with an empty string). Missing delimiters leave `doc`
    /// unchanged; a best-effort patch is not an error.
    fn replace_between(&self, doc: &mut String, open: &str, close: &str, content: Option<&str>);
}

/// Flat first-occurrence substring editor.
///
/// Deliberately not an XML parser. The delimiters are matched as literal
/// text anywhere in the document, including inside comments or attribute
/// values that happen to contain them; first occurrence wins, even when a
/// template carries several items. That is the accepted trade-off for
/// leaving every unrecognized byte of the control point's document alone.
#[derive(Debug, Default)]
pub struct SubstringEditor;

impl TemplateEditor for SubstringEditor {
    fn replace_between(&self, doc: &mut String, open: &str, close: &str, content: Option<&str>) {
        let Some(content) = content else {
            return;
        };
        let Some(open_at) = doc.find(open) else {
            debug!(delimiter = open, "delimiter not found, field left untouched");
            return;
        };
        let span_start = open_at + open.len();
        let Some(close_at) = doc[span_start..].find(close) else {
            debug!(delimiter = close, "closing delimiter not found, field left untouched");
            return;
        };
        // Equal and unequal length replacements share this path; the
        // buffer shifts its tail only when the lengths differ.
        doc.replace_range(span_start..span_start + close_at, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(doc: &str, open: &str, close: &str, content: Option<&str>) -> String {
        let mut buf = doc.to_owned();
        SubstringEditor.replace_between(&mut buf, open, close, content);
        buf
    }

    #[test]
    fn replaces_span_between_delimiters() {
        let doc = patch(
            "<x><dc:title>old</dc:title></x>",
            "<dc:title>",
            "</dc:title>",
            Some("new title"),
        );
        assert_eq!(doc, "<x><dc:title>new title</dc:title></x>");
    }

    #[test]
    fn absent_content_means_no_touch() {
        let original = "<dc:title>keep me</dc:title>";
        assert_eq!(patch(original, "<dc:title>", "</dc:title>", None), original);
    }

    #[test]
    fn empty_content_empties_the_span() {
        let doc = patch("<a>x</a>", "<a>", "</a>", Some(""));
        assert_eq!(doc, "<a></a>");
    }

    #[test]
    fn missing_open_delimiter_is_a_silent_skip() {
        let original = "<upnp:album>a</upnp:album>";
        assert_eq!(
            patch(original, "<upnp:genre>", "</upnp:genre>", Some("Rock")),
            original
        );
    }

    #[test]
    fn missing_close_delimiter_is_a_silent_skip() {
        let original = "<dc:title>unterminated";
        assert_eq!(
            patch(original, "<dc:title>", "</dc:title>", Some("x")),
            original
        );
    }

    #[test]
    fn equal_and_unequal_lengths_behave_identically() {
        let template = "<a>abc</a><b>rest</b>";
        let same_len = patch(template, "<a>", "</a>", Some("xyz"));
        let longer = patch(template, "<a>", "</a>", Some("0123456789"));
        assert_eq!(same_len, "<a>xyz</a><b>rest</b>");
        assert_eq!(longer, "<a>0123456789</a><b>rest</b>");
    }

    #[test]
    fn first_occurrence_wins() {
        let doc = patch(
            "<a>one</a><a>two</a>",
            "<a>",
            "</a>",
            Some("patched"),
        );
        assert_eq!(doc, "<a>patched</a><a>two</a>");
    }

    #[test]
    fn attribute_value_patching_uses_bare_quote_as_closer() {
        let doc = patch(
            r#"<item id="old-id" parentID="0">"#,
            r#"id=""#,
            r#"""#,
            Some("gmr-00000001"),
        );
        assert_eq!(doc, r#"<item id="gmr-00000001" parentID="0">"#);
    }
}
