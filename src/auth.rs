//! Stream-key verification.
//!
//! Publishers prove themselves with a single pre-shared key carried in the
//! `key` field of the callback body. The comparison is exact: case-sensitive,
//! no trimming, no normalization. A missing field is a plain rejection.

/// Decide whether a presented key authorizes the publish.
///
/// `provided` is the decoded `key` form field, or `None` when the body had no
/// such field. Only an exact byte-for-byte match with the configured key is
/// accepted.
pub fn verify_key(expected: &str, provided: Option<&str>) -> bool {
    match provided {
        Some(key) => constant_time_eq(expected.as_bytes(), key.as_bytes()),
        None => false,
    }
}

/// Constant-time byte comparison to prevent timing side-channel attacks.
///
/// Always iterates over the full length of `expected` regardless of `provided`
/// length, so an attacker cannot determine the key length from response times.
pub fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let mut diff = u8::from(expected.len() != provided.len());
    // Always iterate over the expected key length to avoid timing leak
    for i in 0..expected.len() {
        let p = if i < provided.len() {
            provided[i]
        } else {
            0xff
        };
        diff |= expected[i] ^ p;
    }
    diff == 0
}
