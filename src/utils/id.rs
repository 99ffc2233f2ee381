use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use indexmap::IndexMap;

/// Derives a stable mod identifier from package contents: Blake3 over every
/// entry path and its bytes, truncated to 16 bytes and encoded with
/// base64url (no padding, ~22 characters). The same archive always yields
/// the same id.
pub fn content_id(entries: &IndexMap<String, Vec<u8>>) -> String {
    let mut hasher = blake3::Hasher::new();
    for (path, data) in entries {
        hasher.update(path.as_bytes());
        hasher.update(&[0]); // keep path/data boundaries unambiguous
        hasher.update(data);
    }

    let hash = hasher.finalize();
    URL_SAFE_NO_PAD.encode(&hash.as_bytes()[..16])
}
