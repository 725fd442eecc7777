//! SHA-256 tree hash over 1 MiB chunks.

use sha2::{Digest, Sha256};

/// Chunk size of the leaves.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Hex tree hash of `data`.
///
/// Leaves are the SHA-256 of each 1 MiB chunk; adjacent pairs are
/// concatenated and hashed until one digest remains. An odd digest at the
/// end of a level is carried up unchanged.
///
/// ```
/// use aws_services::services::glacier::tree_hash;
///
/// // One chunk: the tree hash equals the plain SHA-256.
/// assert_eq!(
///     tree_hash(b"hello"),
///     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
/// );
/// ```
pub fn tree_hash(data: &[u8]) -> String {
    hex::encode(tree_hash_bytes(data))
}

/// Raw tree hash digest of `data`.
pub fn tree_hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut level: Vec<[u8; 32]> = if data.is_empty() {
        vec![Sha256::digest(data).into()]
    } else {
        data.chunks(CHUNK_SIZE)
            .map(|chunk| Sha256::digest(chunk).into())
            .collect()
    };

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => {
                    let mut hasher = Sha256::new();
                    hasher.update(left);
                    hasher.update(right);
                    hasher.finalize().into()
                }
                carried => carried[0],
            })
            .collect();
    }

    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    fn combine(a: [u8; 32], b: [u8; 32]) -> [u8; 32] {
        let mut joined = a.to_vec();
        joined.extend_from_slice(&b);
        sha(&joined)
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(
            tree_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_two_chunks() {
        let data = vec![7u8; CHUNK_SIZE + 10];
        let expected = combine(sha(&data[..CHUNK_SIZE]), sha(&data[CHUNK_SIZE..]));
        assert_eq!(tree_hash_bytes(&data), expected);
    }

    #[test]
    fn test_odd_leaf_is_promoted() {
        let data = vec![1u8; 2 * CHUNK_SIZE + 1];
        let a = sha(&data[..CHUNK_SIZE]);
        let b = sha(&data[CHUNK_SIZE..2 * CHUNK_SIZE]);
        let c = sha(&data[2 * CHUNK_SIZE..]);
        assert_eq!(tree_hash_bytes(&data), combine(combine(a, b), c));
    }
}
