use anyhow::Result;
use ironstream::testing::*;
use ironstream::{
    get_lines, memory, pipe, pipe_all, read_chunks, read_lines, read_split, split, temp, write,
    write_all, LineDelimiter, StreamError,
};

#[test]
fn read_chunks_and_lines() -> Result<()> {
    let mut stream = memory("line 1\nline 2")?;
    let chunks = read_chunks(&mut stream, 5)?.collect::<Result<Vec<_>, _>>()?;
    assert_records_equal(&chunks, &["line ", "1\nlin", "e 2"]);

    stream.rewind()?;
    let lines = read_lines(read_chunks(&mut stream, 5)?, LineDelimiter::Lf)
        .collect::<Result<Vec<_>, _>>()?;
    assert_records_equal(&lines, &["line 1", "line 2"]);
    Ok(())
}

#[test]
fn get_lines_over_crlf() -> Result<()> {
    let mut stream = temp("\r\nline 1\r\nline 2\r\nline 3\r\n", None)?;
    let lines = get_lines(&mut stream, LineDelimiter::Lf, 3)?.collect::<Result<Vec<_>, _>>()?;
    assert_records_equal(&lines, &["", "line 1", "line 2", "line 3", ""]);
    Ok(())
}

#[test]
fn split_helpers() -> Result<()> {
    let mut stream = memory("a|b||c")?;
    let records = split(&mut stream, "||", 2)?.collect::<Result<Vec<_>, _>>()?;
    assert_records_equal(&records, &["a|b", "c"]);

    stream.rewind()?;
    let records = read_split(read_chunks(&mut stream, 1)?, "|")?.collect::<Result<Vec<_>, _>>()?;
    assert_records_equal(&records, &["a", "b", "", "c"]);

    assert!(matches!(split(&mut stream, "", 2), Err(StreamError::InvalidArgument(_))));
    Ok(())
}

#[test]
fn write_helpers() -> Result<()> {
    let mut output = memory("")?;
    let counts = write(&mut output, ["ab", "c"])?.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(counts, vec![2, 1]);
    assert_eq!(write_all(&mut output, vec![b"de".to_vec()])?, 2);
    assert_stream_contents(&mut output, "abcde");
    Ok(())
}

#[test]
fn pipe_copies_exactly() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let body = sample_lines(3);
    assert_eq!(body.len(), 21);
    for chunk_size in chunk_sizes() {
        let mut input = memory(&body)?;
        let mut output = memory("")?;
        assert_eq!(pipe_all(&mut input, &mut output, chunk_size)?, 21);
        assert_stream_contents(&mut output, &body);
    }
    Ok(())
}

#[test]
fn pipe_is_lazy() -> Result<()> {
    let mut input = memory("abcdef")?;
    let mut output = memory("")?;
    let mut piping = pipe(&mut input, &mut output, 4)?;
    assert_eq!(piping.next().transpose()?, Some(4));
    assert_eq!(piping.stream().size(), Some(4));
    assert_eq!(piping.next().transpose()?, Some(2));
    assert!(piping.next().is_none());
    Ok(())
}

#[test]
fn pipe_checks_both_ends() -> Result<()> {
    let mut input = memory("abc")?;
    let mut closed = memory("")?;
    closed.close();
    assert!(matches!(pipe(&mut input, &mut closed, 4), Err(StreamError::ResourceClosed)));
    assert!(matches!(pipe(&mut closed, &mut input, 4), Err(StreamError::ResourceClosed)));

    let temp = mock_file("abc")?;
    let mut read_only = ironstream::file(temp.path(), "rb")?;
    assert!(matches!(pipe(&mut input, &mut read_only, 4), Err(StreamError::NotWritable)));
    assert!(matches!(pipe(&mut input, &mut closed, 0), Err(StreamError::InvalidArgument(_))));
    Ok(())
}
