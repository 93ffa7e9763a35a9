use crate::hasher::CubeHash;
use crate::params::Params;

/// Compute the CubeHash digest of `message` in one go.
///
/// `message` can be raw bytes or text; text is hashed through its UTF-8 encoding.
///
/// ```
/// use cubehash::Params;
///
/// let params = Params::configure(None, None, None, None, Some(256));
/// assert_eq!(cubehash::digest("abc", params), cubehash::digest(b"abc", params));
/// assert_eq!(cubehash::digest(b"", params).len(), 32);
/// ```
pub fn digest(message: impl AsRef<[u8]>, params: Params) -> Vec<u8> {
    let mut hasher = CubeHash::new(params);
    let mut output = vec![0u8; params.digest_len()];
    hasher.update_unchecked(message.as_ref());
    hasher.finalize_unchecked(&mut output);
    output
}

/// Compute the CubeHash digest of `message`, encoded as lowercase hexadecimal.
///
/// The result has exactly `h / 4` characters.
pub fn digest_hex(message: impl AsRef<[u8]>, params: Params) -> String {
    hex::encode(digest(message, params))
}

/// The bytes hashed for a textual message: its UTF-8 encoding.
pub fn text_to_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}
