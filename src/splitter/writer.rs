//! Writes rendered chunks to numbered files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::chunk::{ChunkFile, ChunkHash, LineChunk};
use crate::error::SplitError;

#[cfg(feature = "hash-blake3")]
use crate::hash::Blake3Hasher;

/// Creates `dir` (and any missing parents) unless it already is a directory.
pub(crate) fn ensure_output_dir(dir: &Path) -> Result<(), SplitError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| SplitError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created output directory");
    Ok(())
}

/// Writes one chunk to `<dir>/split_<index>.csv`, replacing any existing file.
///
/// The file handle is closed before this returns, on success and on error.
pub(crate) fn write_chunk(dir: &Path, chunk: &LineChunk) -> Result<ChunkFile, SplitError> {
    let path = dir.join(chunk.file_name());
    let data = chunk.render();

    {
        let mut file = File::create(&path)?;
        file.write_all(&data)?;
        file.flush()?;
    }

    tracing::info!(
        index = chunk.index,
        lines = chunk.len(),
        path = %path.display(),
        "wrote chunk"
    );

    Ok(ChunkFile {
        index: chunk.index,
        path,
        line_count: chunk.len(),
        bytes: data.len() as u64,
        hash: digest(&data),
    })
}

fn digest(data: &[u8]) -> Option<ChunkHash> {
    #[cfg(feature = "hash-blake3")]
    return Some(Blake3Hasher::hash(data));
    #[cfg(not(feature = "hash-blake3"))]
    {
        let _ = data;
        None
    }
}
