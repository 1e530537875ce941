// Integration tests for the async line stream (feature = "async-io")
#![cfg(feature = "async-io")]

use std::io::Cursor;

use csvsplit::{LineChunker, chunk_lines_async};
use futures_util::StreamExt;
use futures_util::io::BufReader;
use tokio_util::compat::TokioAsyncReadCompatExt;

fn sample(n: usize) -> String {
    let mut s = String::from("id,value\n");
    for i in 0..n {
        s.push_str(&format!("{},{}\n", i, i * i));
    }
    s
}

#[tokio::test]
async fn test_async_matches_sync_on_tokio_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("input.csv");
    let content = sample(57);
    tokio::fs::write(&path, &content).await.unwrap();

    let file = tokio::fs::File::open(&path).await.unwrap();
    // Small buffer so lines straddle fill_buf boundaries
    let reader = BufReader::with_capacity(7, file.compat());
    let async_chunks: Vec<_> = chunk_lines_async(reader, LineChunker::new(10, true).unwrap())
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    let sync_chunks: Vec<_> = LineChunker::new(10, true)
        .unwrap()
        .chunks(Cursor::new(content))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(async_chunks.len(), 6);
    assert_eq!(async_chunks, sync_chunks);
}

#[tokio::test]
async fn test_async_chunker_state_after_stream() {
    let content = sample(3);
    let mut stream = chunk_lines_async(content.as_bytes(), LineChunker::new(2, true).unwrap());

    while let Some(chunk) = stream.next().await {
        chunk.unwrap();
    }

    assert_eq!(stream.chunker().header(), Some(&b"id,value"[..]));
    assert_eq!(stream.chunker().lines_seen(), 3);
    assert_eq!(stream.chunker().chunks_emitted(), 2);
}
