use rendidl::DidlRenderer;
use renmetadata::TrackInfo;

fn main() {
    let renderer = DidlRenderer::new();

    let mut track = TrackInfo::new();
    track.title = Some("Song & Dance".to_string());
    track.artist = Some("The <Band>".to_string());
    track.album = Some("Greatest Hits".to_string());

    println!("=== Generation mode (no template) ===");
    let generated = renderer.to_didl(&track, None);
    println!("{}", generated);

    // A control point sent this document earlier; only the tags we know
    // get rewritten, the custom markup survives.
    let template = r#"<DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/">
<item id="cp-item-1" parentID="0" restricted="1">
  <dc:title>previous title</dc:title>
  <upnp:artist>previous artist</upnp:artist>
  <upnp:class>object.item.audioItem.musicTrack</upnp:class>
  <vendor:extension xmlns:vendor="urn:example">kept as-is</vendor:extension>
</item>
</DIDL-Lite>"#;

    println!("\n=== Patch mode (control-point template) ===");
    let patched = renderer.to_didl(&track, Some(template));
    println!("{}", patched);

    println!("\n=== Fields extracted back from the patched document ===");
    let extracted = rendidl::track_from_didl(&patched).expect("patched document parses");
    println!("{:#?}", extracted);
}
