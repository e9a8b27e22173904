//! Media-type detection for image attachments, by file extension.

/// Map a filename to the media type sent to the vision provider.
/// Unknown extensions fall back to a generic binary type.
pub fn media_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "gif"          => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "webp"         => "image/webp",
        _              => "application/octet-stream",
    }
}
