//! Post identifiers and limits.

use sha2::{Digest, Sha256};

/// Default maximum post size in bytes (1 MiB).
pub const MAX_POST_BYTES: usize = 1024 * 1024;

/// Number of digest bytes kept in a post id.
const POST_ID_BYTES: usize = 16;

/// Derives the id of a post from its text.
///
/// The id is the first 16 bytes of the SHA-256 digest, hex encoded, so equal
/// texts always share an id and re-posting overwrites the earlier entry.
pub fn post_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..POST_ID_BYTES])
}
