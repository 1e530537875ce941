//! Async stream adapter for line chunking.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use csvsplit::{chunk_lines_async, LineChunker};
//! use futures_io::AsyncBufRead;
//!
//! async fn demo<R: AsyncBufRead + Unpin>(reader: R) -> Result<(), csvsplit::SplitError> {
//!     let mut stream = chunk_lines_async(reader, LineChunker::new(1000, true)?);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("{}: {} lines", chunk.file_name(), chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncBufRead;
use pin_project_lite::pin_project;

use crate::chunk::LineChunk;
use crate::chunker::LineChunker;
use crate::error::SplitError;
use crate::util::LineFramer;

pin_project! {
    /// A stream that yields line chunks from an async buffered reader.
    ///
    /// Produces exactly the chunks [`LineChunks`](crate::LineChunks) would
    /// produce for the same bytes, with the same line framing. Fused after
    /// the first error.
    pub struct LineChunkStream<R> {
        #[pin]
        reader: R,
        chunker: LineChunker,
        framer: LineFramer,
        finished: bool,
    }
}

impl<R> LineChunkStream<R> {
    /// Creates a new chunk stream.
    pub fn new(reader: R, chunker: LineChunker) -> Self {
        Self {
            reader,
            chunker,
            framer: LineFramer::new(),
            finished: false,
        }
    }

    /// Returns the chunker driving this stream.
    pub fn chunker(&self) -> &LineChunker {
        &self.chunker
    }
}

impl<R: AsyncBufRead> Stream for LineChunkStream<R> {
    type Item = Result<LineChunk, SplitError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            let (used, line) = match this.reader.as_mut().poll_fill_buf(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(SplitError::Io(e))));
                }
                Poll::Ready(Ok([])) => {
                    *this.finished = true;
                    let tail = this.framer.finish().and_then(|l| this.chunker.push(l));
                    return Poll::Ready(tail.or_else(|| this.chunker.finish()).map(Ok));
                }
                Poll::Ready(Ok(buf)) => this.framer.feed(buf),
            };
            this.reader.as_mut().consume(used);

            if let Some(chunk) = line.and_then(|l| this.chunker.push(l)) {
                return Poll::Ready(Some(Ok(chunk)));
            }
        }
    }
}

/// Creates a chunk stream from an async buffered reader.
///
/// Uses `futures_io::AsyncBufRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, convert with `tokio_util::compat` and wrap in a
/// `futures_util::io::BufReader`:
///
/// ```ignore
/// use futures_util::io::BufReader;
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use csvsplit::{chunk_lines_async, LineChunker};
///
/// let file = tokio::fs::File::open("large.csv").await?;
/// let stream = chunk_lines_async(BufReader::new(file.compat()), LineChunker::new(1000, true)?);
/// ```
pub fn chunk_lines_async<R: AsyncBufRead>(reader: R, chunker: LineChunker) -> LineChunkStream<R> {
    LineChunkStream::new(reader, chunker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use futures_util::io::{AsyncReadExt, BufReader};

    async fn collect(input: &[u8], k: usize, header: bool) -> Vec<LineChunk> {
        let stream = chunk_lines_async(input, LineChunker::new(k, header).unwrap());
        stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[tokio::test]
    async fn test_stream_empty() {
        assert!(collect(b"", 10, true).await.is_empty());
    }

    #[tokio::test]
    async fn test_stream_header_only() {
        assert!(collect(b"h\n", 10, true).await.is_empty());
    }

    #[tokio::test]
    async fn test_stream_chunks() {
        let chunks = collect(b"h\n1\n2\n3", 2, true).await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines, ["1", "2"]);
        assert_eq!(chunks[1].lines, ["3"]);
        assert!(chunks.iter().all(|c| c.header() == Some(&b"h"[..])));
    }

    #[tokio::test]
    async fn test_stream_exact_multiple_with_trailing_newline() {
        let chunks = collect(b"1\r\n2\r\n", 1, false).await;
        let lines: Vec<_> = chunks.into_iter().flat_map(|c| c.into_lines()).collect();
        assert_eq!(lines, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_stream_cr_only_and_non_utf8() {
        let chunks = collect(b"h\rJos\xe9\rRen\xe9e\r", 1, true).await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines, [&b"Jos\xe9"[..]]);
        assert_eq!(chunks[1].lines, [&b"Ren\xe9e"[..]]);
    }

    #[tokio::test]
    async fn test_stream_read_error_fuses() {
        let reader = BufReader::new((&b"a\n"[..]).chain(Broken));
        let mut stream = chunk_lines_async(reader, LineChunker::new(1, false).unwrap());

        assert_eq!(stream.next().await.unwrap().unwrap().lines, ["a"]);
        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(err.to_string(), "An error occurred: device error");
        assert!(stream.next().await.is_none());
    }

    struct Broken;

    impl futures_io::AsyncRead for Broken {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut [u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(std::io::Error::other("device error")))
        }
    }
}
