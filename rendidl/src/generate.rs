//! Fresh-document generation, used when no control-point template exists.

pub(crate) const DIDL_HEADER: &str = "<DIDL-Lite \
    xmlns=\"urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/\" \
    xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
    xmlns:upnp=\"urn:schemas-upnp-org:metadata-1-0/upnp/\">";
pub(crate) const DIDL_FOOTER: &str = "</DIDL-Lite>";

/// Builds the minimal complete DIDL-Lite document for one item.
///
/// Field values must already be escaped; absent fields render as empty
/// elements. Output is deterministic apart from `id`.
pub(crate) fn generate_didl(
    id: &str,
    title: Option<&str>,
    artist: Option<&str>,
    album: Option<&str>,
    genre: Option<&str>,
    composer: Option<&str>,
) -> String {
    format!(
        "{header}\n<item id=\"{id}\">\n\
         \t<dc:title>{title}</dc:title>\n\
         \t<upnp:artist>{artist}</upnp:artist>\n\
         \t<upnp:album>{album}</upnp:album>\n\
         \t<upnp:genre>{genre}</upnp:genre>\n\
         \t<upnp:creator>{composer}</upnp:creator>\n\
         </item>\n{footer}",
        header = DIDL_HEADER,
        id = id,
        title = title.unwrap_or(""),
        artist = artist.unwrap_or(""),
        album = album.unwrap_or(""),
        genre = genre.unwrap_or(""),
        composer = composer.unwrap_or(""),
        footer = DIDL_FOOTER,
    )
}
