//! BLAKE3 digest of chunk file contents.

use crate::chunk::ChunkHash;

/// Computes BLAKE3 digests of rendered chunk files.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Blake3Hasher;

impl Blake3Hasher {
    /// Hashes `data` in one shot.
    pub(crate) fn hash(data: &[u8]) -> ChunkHash {
        ChunkHash::new(blake3::hash(data).into())
    }
}
