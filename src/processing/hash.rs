// src/processing/hash.rs

use md5::{Digest, Md5};

/// Lowercase hex MD5 of `bytes`.
///
/// Used as a change-detection fingerprint when comparing reports, not as a
/// security control.
///
/// # Examples
///
/// ```
/// use project_scanner::processing::md5_hex;
///
/// assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
