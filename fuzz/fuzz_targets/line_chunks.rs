#![no_main]

use std::io::{BufReader, Cursor};

use bytes::Bytes;
use csvsplit::LineChunker;
use libfuzzer_sys::fuzz_target;

/// Normalises every terminator to `\n`, then splits.
fn reference_lines(data: &[u8]) -> Vec<Bytes> {
    let mut normalised = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        match data[i] {
            b'\r' if data.get(i + 1) == Some(&b'\n') => {
                normalised.push(b'\n');
                i += 1;
            }
            b'\r' => normalised.push(b'\n'),
            b => normalised.push(b),
        }
        i += 1;
    }

    normalised
        .split_inclusive(|&b| b == b'\n')
        .map(|l| Bytes::copy_from_slice(l.strip_suffix(b"\n").unwrap_or(l)))
        .collect()
}

fuzz_target!(|input: (u8, u8, bool, Vec<u8>)| {
    let (k, capacity, include_header, data) = input;
    let k = usize::from(k).max(1);
    // Small reader buffers split `\r\n` pairs across reads
    let reader = BufReader::with_capacity(usize::from(capacity).max(1), Cursor::new(&data));

    let chunks = LineChunker::new(k, include_header)
        .unwrap()
        .chunks(reader)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let mut expected = reference_lines(&data);
    let header = if include_header && !expected.is_empty() {
        Some(expected.remove(0))
    } else {
        None
    };

    // Verify: chunk count is ceil(n / k)
    assert_eq!(chunks.len(), expected.len().div_ceil(k));

    for (i, chunk) in chunks.iter().enumerate() {
        // Verify: contiguous numbering from 1
        assert_eq!(chunk.index, i + 1);
        // Verify: every chunk but the last is full
        if i + 1 < chunks.len() {
            assert_eq!(chunk.len(), k);
        }
        assert!(!chunk.is_empty() && chunk.len() <= k);
        assert_eq!(chunk.header(), header.as_deref());
    }

    // Verify: no line dropped, duplicated or reordered
    let rejoined: Vec<Bytes> = chunks.into_iter().flat_map(|c| c.into_lines()).collect();
    assert_eq!(rejoined, expected);
});
