use thiserror::Error;

/// Errors surfaced by the fallible, parse-side operations.
///
/// Document conversion itself ([`crate::DidlRenderer::to_didl`]) never
/// fails; only extraction of fields from incoming DIDL-Lite can.
#[derive(Debug, Error)]
pub enum DidlError {
    #[error("DIDL-Lite parse error: {0}")]
    Parse(#[from] quick_xml::de::DeError),
}
