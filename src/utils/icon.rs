use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use camino::Utf8Path;
use std::fs;

/// Loads a mod icon and encodes it as a data URI handle.
/// Returns None when the file is absent or not a supported image type.
pub fn load_icon_as_data_uri(icon_path: &Utf8Path) -> Option<String> {
    let icon_bytes = fs::read(icon_path).ok()?;

    let mime_type = match icon_path.extension()? {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => return None,
    };

    Some(format!("data:{};base64,{}", mime_type, BASE64.encode(&icon_bytes)))
}
