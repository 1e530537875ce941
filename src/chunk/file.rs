//! Records of chunk files written to disk.

use std::fmt;
use std::path::PathBuf;

use super::ChunkHash;

/// One output file produced by a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    /// 1-based chunk number; the file is named `split_<index>.csv`.
    pub index: usize,

    /// Full path of the written file.
    pub path: PathBuf,

    /// Data lines in the file, not counting the header.
    pub line_count: usize,

    /// Total bytes written, header included.
    pub bytes: u64,

    /// Digest of the file contents (if computed).
    pub hash: Option<ChunkHash>,
}

impl fmt::Display for ChunkFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} lines, {} bytes",
            self.path.display(),
            self.line_count,
            self.bytes
        )?;
        if let Some(hash) = self.hash {
            write!(f, ", blake3={}", hash)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: Option<ChunkHash>) -> ChunkFile {
        ChunkFile {
            index: 3,
            path: PathBuf::from("out").join("split_3.csv"),
            line_count: 50,
            bytes: 812,
            hash,
        }
    }

    #[test]
    fn test_display_without_hash() {
        let expected = format!("{} (50 lines, 812 bytes)", record(None).path.display());
        assert_eq!(record(None).to_string(), expected);
    }

    #[test]
    fn test_display_with_hash() {
        let text = record(Some(ChunkHash::new([0xab; 32]))).to_string();
        assert!(text.ends_with(&format!(", blake3={})", "ab".repeat(32))));
        assert!(text.contains("(50 lines, 812 bytes, "));
    }
}
