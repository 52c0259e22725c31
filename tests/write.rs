use anyhow::Result;
use ironstream::testing::*;
use ironstream::{
    file, get_lines, memory, ChunkWriter, LineDelimiter, StreamError, DEFAULT_CHUNK_SIZE,
};
use std::fmt;

#[test]
fn filter_pipeline() -> Result<()> {
    let mut input = memory("ab\ncd\nde\ng")?;
    let mut output = memory("")?;

    let lines = get_lines(&mut input, LineDelimiter::Lf, DEFAULT_CHUNK_SIZE)?;
    let filtered = lines
        .filter(|line| !matches!(line, Ok(l) if l == b"de"))
        .map(|line| {
            line.map(|mut l| {
                l.push(b'\n');
                l
            })
        });

    let written = ChunkWriter::new(&mut output, filtered)?.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(written, vec![3, 3, 2]);
    assert_stream_contents(&mut output, "ab\ncd\ng\n");
    Ok(())
}

#[test]
fn write_all_returns_total() -> Result<()> {
    let mut output = memory("")?;
    let total = ChunkWriter::from_chunks(&mut output, vec!["one", "two", "three"])?.write_all()?;
    assert_eq!(total, 11);
    assert_stream_contents(&mut output, "onetwothree");
    Ok(())
}

#[test]
fn nothing_is_written_until_pulled() -> Result<()> {
    let mut output = memory("")?;
    let mut writer = ChunkWriter::from_chunks(&mut output, ["a", "b"])?;
    assert_eq!(writer.stream().size(), Some(0));
    assert_eq!(writer.next().transpose()?, Some(1));
    assert_eq!(writer.stream().size(), Some(1));
    drop(writer);
    assert_stream_contents(&mut output, "a");
    Ok(())
}

#[test]
fn empty_source_writes_nothing() -> Result<()> {
    let mut output = memory("")?;
    let chunks: Vec<Vec<u8>> = Vec::new();
    assert_eq!(ChunkWriter::from_chunks(&mut output, chunks)?.write_all()?, 0);
    assert!(output.snapshot().is_empty());
    Ok(())
}

#[test]
fn rewind_resets_target() -> Result<()> {
    let mut output = memory("")?;
    let mut writer = ChunkWriter::from_chunks(&mut output, ["abc", "X"])?;
    writer.next().transpose()?;
    writer.rewind()?;
    writer.next().transpose()?;
    assert_eq!(writer.source().size_hint(), (0, Some(0)));
    drop(writer);
    assert_stream_contents(&mut output, "Xbc");
    Ok(())
}

#[derive(Debug)]
struct NotBytes(u32);

impl fmt::Display for NotBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a byte string", self.0)
    }
}

impl std::error::Error for NotBytes {}

#[test]
fn source_errors_are_unwritable_source() -> Result<()> {
    let mut output = memory("")?;
    let source = vec![Ok("ok".to_string()), Err(NotBytes(7)), Ok("never".to_string())];
    let mut writer = ChunkWriter::new(&mut output, source)?;

    assert_eq!(writer.next().transpose()?, Some(2));
    let err = writer.next().expect("second item").unwrap_err();
    assert!(matches!(err, StreamError::UnwritableSource(_)));
    assert!(err.to_string().contains("7 is not a byte string"));
    drop(writer);

    let mut output2 = memory("")?;
    let source = vec![Ok(b"ab".to_vec()), Err(NotBytes(1)), Ok(b"cd".to_vec())];
    let err = ChunkWriter::new(&mut output2, source)?.write_all().unwrap_err();
    assert!(matches!(err, StreamError::UnwritableSource(_)));
    assert_stream_contents(&mut output2, "ab");
    Ok(())
}

#[test]
fn rejects_unwritable_target() -> Result<()> {
    let temp = mock_file("abc")?;
    let mut read_only = file(temp.path(), "rb")?;
    assert!(matches!(
        ChunkWriter::from_chunks(&mut read_only, ["x"]),
        Err(StreamError::NotWritable)
    ));

    let mut closed = memory("")?;
    closed.close();
    assert!(matches!(
        ChunkWriter::from_chunks(&mut closed, ["x"]),
        Err(StreamError::ResourceClosed)
    ));
    Ok(())
}
