//! Extraction of track fields from incoming DIDL-Lite.
//!
//! The transport layer receives a DIDL-Lite document alongside each URI it
//! is told to play. This module pulls the known fields back out of such a
//! document so the playback layer can seed a [`TrackInfo`] from it; the
//! document itself is kept verbatim for later patching.

use renmetadata::TrackInfo;
use serde::Deserialize;

use crate::errors::DidlError;

/// Root of an incoming DIDL-Lite document. Unknown elements and
/// attributes are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename = "DIDL-Lite")]
pub struct DidlLite {
    #[serde(rename = "item", default)]
    pub items: Vec<DidlItem>,
}

/// One item of an incoming document, reduced to the fields the renderer
/// displays. Accepts both prefixed and bare element names, as some
/// control points omit the namespace prefixes.
#[derive(Debug, Deserialize)]
pub struct DidlItem {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,

    #[serde(rename = "dc:title", alias = "title", default)]
    pub title: Option<String>,

    #[serde(rename = "upnp:artist", alias = "artist", default)]
    pub artist: Option<String>,

    #[serde(rename = "upnp:album", alias = "album", default)]
    pub album: Option<String>,

    #[serde(rename = "upnp:genre", alias = "genre", default)]
    pub genre: Option<String>,

    #[serde(rename = "upnp:creator", alias = "creator", default)]
    pub composer: Option<String>,
}

/// Parses a DIDL-Lite document.
pub fn parse_didl(input: &str) -> Result<DidlLite, DidlError> {
    Ok(quick_xml::de::from_str(input)?)
}

/// Builds a [`TrackInfo`] from the first item of a DIDL-Lite document.
///
/// A document without items yields an all-absent record. Entity
/// references in field values are decoded by the parser.
pub fn track_from_didl(input: &str) -> Result<TrackInfo, DidlError> {
    let didl = parse_didl(input)?;
    let mut track = TrackInfo::new();
    if let Some(item) = didl.items.into_iter().next() {
        track.title = item.title;
        track.artist = item.artist;
        track.album = item.album;
        track.genre = item.genre;
        track.composer = item.composer;
    }
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/">
            <item id="song-1">
                <dc:title>Song &amp; Dance</dc:title>
                <upnp:artist>Somebody</upnp:artist>
                <upnp:genre>Folk</upnp:genre>
            </item>
        </DIDL-Lite>
    "#;

    #[test]
    fn parses_items_and_decodes_entities() {
        let didl = parse_didl(SAMPLE).unwrap();
        assert_eq!(didl.items.len(), 1);
        assert_eq!(didl.items[0].id.as_deref(), Some("song-1"));
        assert_eq!(didl.items[0].title.as_deref(), Some("Song & Dance"));
    }

    #[test]
    fn track_takes_first_item_fields() {
        let track = track_from_didl(SAMPLE).unwrap();
        assert_eq!(track.title.as_deref(), Some("Song & Dance"));
        assert_eq!(track.artist.as_deref(), Some("Somebody"));
        assert_eq!(track.genre.as_deref(), Some("Folk"));
        assert_eq!(track.album, None);
        assert_eq!(track.composer, None);
    }

    #[test]
    fn empty_document_yields_empty_record() {
        let xml = r#"<DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/"></DIDL-Lite>"#;
        assert!(track_from_didl(xml).unwrap().is_empty());
    }

    #[test]
    fn bare_element_names_are_accepted() {
        let xml = r#"
            <DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/">
                <item id="1"><title>Bare</title><artist>A</artist></item>
            </DIDL-Lite>
        "#;
        let track = track_from_didl(xml).unwrap();
        assert_eq!(track.title.as_deref(), Some("Bare"));
        assert_eq!(track.artist.as_deref(), Some("A"));
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        assert!(parse_didl("not xml at all <<<").is_err());
    }
}
