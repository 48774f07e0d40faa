/// Decode bytes as UTF-8, replacing invalid sequences rather than
/// failing. Uploads are user-supplied and frequently mislabeled.
pub fn extract_plain(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
