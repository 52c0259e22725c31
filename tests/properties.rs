use ironstream::testing::assert_chunk_layout;
use ironstream::{memory, pipe_all, split, temp, ChunkReader};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Bytes drawn from a tiny alphabet so that delimiters show up often,
/// including partial and overlapping matches.
#[derive(Clone, Debug)]
struct Text(Vec<u8>);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let alphabet = b"ab,\r\n";
        let len = usize::arbitrary(g) % 64;
        Text((0..len).map(|_| *g.choose(alphabet).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Text))
    }
}

const DELIMITERS: [&[u8]; 4] = [b",", b"\r\n", b"aba", b"\n\n"];

fn join(records: &[Vec<u8>], delimiter: &[u8]) -> Vec<u8> {
    records.join(delimiter)
}

#[quickcheck]
fn split_then_join_round_trips(Text(content): Text, chunk: usize, which: u8) -> bool {
    let delimiter = DELIMITERS[usize::from(which) % DELIMITERS.len()];
    let chunk_size = chunk % (content.len() + 10) + 1;
    let mut stream = memory(&content).unwrap();
    let records = split(&mut stream, delimiter, chunk_size)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    !records.is_empty() && join(&records, delimiter) == content
}

#[quickcheck]
fn record_count_is_chunk_size_independent(Text(content): Text, chunk: usize) -> bool {
    let chunk_size = chunk % (content.len() + 10) + 1;
    let count = |size: usize| {
        let mut stream = memory(&content).unwrap();
        split(&mut stream, ",", size).unwrap().count()
    };
    let expected = content.iter().filter(|&&b| b == b',').count() + 1;
    count(chunk_size) == expected && count(1) == expected
}

#[quickcheck]
fn chunks_are_full_except_the_last(content: Vec<u8>, chunk: u8) -> bool {
    let chunk_size = usize::from(chunk) + 1;
    let mut stream = memory(&content).unwrap();
    let chunks = ChunkReader::new(&mut stream, chunk_size)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_chunk_layout(&chunks, content.len(), chunk_size);
    chunks.len() == content.len().div_ceil(chunk_size) && chunks.concat() == content
}

#[quickcheck]
fn pipe_preserves_content(content: Vec<u8>, chunk: u8) -> bool {
    let mut input = memory(&content).unwrap();
    let mut output = memory("").unwrap();
    let copied = pipe_all(&mut input, &mut output, usize::from(chunk) + 1).unwrap();
    copied == content.len() && output.snapshot() == content
}

#[quickcheck]
fn temp_spill_is_transparent(content: Vec<u8>, max_memory: u8) -> bool {
    let mut stream = temp(&content, Some(usize::from(max_memory))).unwrap();
    stream.snapshot() == content
}
