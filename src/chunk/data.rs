//! The LineChunk type - one output file's worth of data lines.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

/// A bounded group of data lines destined for one output file.
///
/// Chunks are numbered from 1 in emission order. Lines are raw bytes, so
/// input in any encoding is written back unchanged. When a header was
/// captured every chunk shares the same `Bytes` for it.
///
/// # Example
///
/// ```
/// use csvsplit::LineChunk;
///
/// let chunk = LineChunk::new(1, Some("id,name".into()), vec!["1,a".into(), "2,b".into()]);
///
/// assert_eq!(chunk.len(), 2);
/// assert_eq!(&chunk.render()[..], b"id,name\n1,a\n2,b\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChunk {
    /// 1-based position of this chunk in the output sequence.
    pub index: usize,

    /// The header line repeated atop this chunk, if one was captured.
    pub header: Option<Bytes>,

    /// Data lines in input order, without line terminators.
    pub lines: Vec<Bytes>,
}

impl LineChunk {
    /// Creates a new chunk.
    pub fn new(index: usize, header: Option<Bytes>, lines: Vec<Bytes>) -> Self {
        Self {
            index,
            header,
            lines,
        }
    }

    /// Returns the number of data lines (the header is not counted).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the chunk has no data lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the header line, if any.
    pub fn header(&self) -> Option<&[u8]> {
        self.header.as_deref()
    }

    /// Returns the file name this chunk is written under: `split_<index>.csv`.
    pub fn file_name(&self) -> String {
        format!("split_{}.csv", self.index)
    }

    /// Renders the exact bytes of the chunk file.
    ///
    /// The header (if any) comes first, then every data line; each line is
    /// terminated with `\n`.
    pub fn render(&self) -> Bytes {
        let header_len = self.header.as_ref().map_or(0, |h| h.len() + 1);
        let body_len: usize = self.lines.iter().map(|l| l.len() + 1).sum();

        let mut out = BytesMut::with_capacity(header_len + body_len);
        if let Some(header) = &self.header {
            out.put_slice(header);
            out.put_u8(b'\n');
        }
        for line in &self.lines {
            out.put_slice(line);
            out.put_u8(b'\n');
        }
        out.freeze()
    }

    /// Consumes the chunk and returns its data lines.
    pub fn into_lines(self) -> Vec<Bytes> {
        self.lines
    }
}

impl fmt::Display for LineChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineChunk(#{}, {} lines", self.index, self.len())?;
        if self.header.is_some() {
            write!(f, ", with header")?;
        }
        write!(f, ")")
    }
}
