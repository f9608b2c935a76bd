//! # rendidl - "now playing" DIDL-Lite documents
//!
//! Builds the DIDL-Lite XML fragment a UPnP/DLNA control point expects as
//! track metadata, from a [`TrackInfo`] record. Two modes:
//!
//! - **Generation**: no template available, emit a fresh minimal document.
//! - **Patching**: the control point previously sent its own DIDL-Lite
//!   document; rewrite only the known tags' contents inside it and hand
//!   back everything else byte-for-byte, so custom markup survives.
//!
//! Each produced document carries a freshly generated item identifier to
//! discourage control points from caching item content by id.
//!
//! # Examples
//!
//! ```rust
//! use rendidl::DidlRenderer;
//! use renmetadata::TrackInfo;
//!
//! let renderer = DidlRenderer::new();
//! let mut track = TrackInfo::new();
//! track.title = Some("My Song".to_string());
//!
//! let didl = renderer.to_didl(&track, None);
//! assert!(didl.contains("<dc:title>My Song</dc:title>"));
//! ```

pub mod escape;
mod errors;
pub mod extract;
mod generate;
mod ident;
pub mod patch;

pub use errors::DidlError;
pub use extract::{parse_didl, track_from_didl};
pub use ident::ItemIdGenerator;
pub use patch::{SubstringEditor, TemplateEditor};

use renmetadata::TrackInfo;
use tracing::debug;

use crate::escape::escape_field;
use crate::generate::generate_didl;

/// Converts track records into DIDL-Lite documents.
///
/// Owns the identifier generator, so one renderer instance hands out
/// distinct item ids for its whole lifetime, including under concurrent
/// calls. The template-editing strategy is pluggable; the default is the
/// flat substring editor (see [`SubstringEditor`] for its trade-offs).
#[derive(Debug)]
pub struct DidlRenderer<E: TemplateEditor = SubstringEditor> {
    ids: ItemIdGenerator,
    editor: E,
}

impl DidlRenderer {
    pub fn new() -> Self {
        Self {
            ids: ItemIdGenerator::new(),
            editor: SubstringEditor,
        }
    }

    /// Renderer with a seeded identifier counter, for deterministic output.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            ids: ItemIdGenerator::with_seed(seed),
            editor: SubstringEditor,
        }
    }
}

impl<E: TemplateEditor> DidlRenderer<E> {
    /// Renderer with a custom editing strategy.
    pub fn with_editor(editor: E, ids: ItemIdGenerator) -> Self {
        Self { ids, editor }
    }

    /// Renders `track` as a DIDL-Lite document.
    ///
    /// With no template (or an empty one) this generates the minimal fixed
    /// document. Otherwise the template is copied and patched: each present
    /// field replaces the first matching tag span, absent fields and tags
    /// missing from the template are skipped, and the first `id="..."`
    /// attribute value is overwritten with a fresh identifier. The call
    /// never fails; a template that defeats the patcher comes back with the
    /// affected fields untouched.
    pub fn to_didl(&self, track: &TrackInfo, template: Option<&str>) -> String {
        let title = escape_field(track.title.as_deref());
        let artist = escape_field(track.artist.as_deref());
        let album = escape_field(track.album.as_deref());
        let genre = escape_field(track.genre.as_deref());
        let composer = escape_field(track.composer.as_deref());
        let id = self.ids.next_id();

        match template {
            Some(original) if !original.is_empty() => {
                debug!(id = %id, "patching control-point template");
                let mut doc = original.to_owned();
                let editor = &self.editor;
                editor.replace_between(&mut doc, "<dc:title>", "</dc:title>", title.as_deref());
                editor.replace_between(
                    &mut doc,
                    "<upnp:artist>",
                    "</upnp:artist>",
                    artist.as_deref(),
                );
                editor.replace_between(&mut doc, "<upnp:album>", "</upnp:album>", album.as_deref());
                editor.replace_between(&mut doc, "<upnp:genre>", "</upnp:genre>", genre.as_deref());
                editor.replace_between(
                    &mut doc,
                    "<upnp:creator>",
                    "</upnp:creator>",
                    composer.as_deref(),
                );
                editor.replace_between(&mut doc, "id=\"", "\"", Some(&id));
                doc
            }
            _ => {
                debug!(id = %id, "generating minimal document");
                generate_didl(
                    &id,
                    title.as_deref(),
                    artist.as_deref(),
                    album.as_deref(),
                    genre.as_deref(),
                    composer.as_deref(),
                )
            }
        }
    }
}

impl Default for DidlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
