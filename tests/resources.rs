use anyhow::Result;
use ironstream::io::{MemoryResource, Resource, TempResource};
use ironstream::testing::*;
use ironstream::{
    memory, null, temp, DefaultStreamFactory, Stream, StreamError, StreamFactory, TempOptions,
    Whence, DEFAULT_MAX_MEMORY,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn memory_stream_round_trip() -> Result<()> {
    let mut stream = memory("Test Content")?;
    assert_stream_contents(&mut stream, "Test Content");
    stream.seek(0, Whence::End)?;
    stream.write(b"!")?;
    assert_eq!(stream.size(), Some(13));
    assert_stream_contents(&mut stream, "Test Content!");
    Ok(())
}

#[test]
fn memory_stream_overwrites_in_place() -> Result<()> {
    let mut stream = memory("abcdef")?;
    stream.seek(2, Whence::Start)?;
    stream.write(b"XY")?;
    assert_eq!(stream.tell()?, 4);
    assert_stream_contents(&mut stream, "abXYef");
    Ok(())
}

#[test]
fn temp_stream_starts_at_zero() -> Result<()> {
    let mut stream = temp("Test Content", None)?;
    assert_eq!(stream.tell()?, 0);
    assert_eq!(stream.read(4)?, b"Test");
    assert_eq!(stream.metadata_value("stream_type"), Some(serde_json::json!("temp")));
    Ok(())
}

#[test]
fn temp_stream_spills_past_max_memory() -> Result<()> {
    init_logging();
    let mut stream = temp("", Some(16))?;
    let body = sample_lines(5);
    assert_eq!(stream.write(body.as_bytes())?, 35);
    assert_stream_contents(&mut stream, &body);

    let resource = stream.detach().expect("open");
    assert_eq!(resource.size(), Some(35));
    Ok(())
}

#[test]
fn temp_resource_reports_spill() -> Result<()> {
    let mut resource = TempResource::new(TempOptions { max_memory: 4 });
    assert_eq!(resource.options().max_memory, 4);
    resource.write(b"1234")?;
    assert!(!resource.is_spilled());
    resource.write(b"5")?;
    assert!(resource.is_spilled());
    Ok(())
}

#[test]
fn temp_defaults() {
    assert_eq!(TempOptions::default().max_memory, DEFAULT_MAX_MEMORY);
    assert_eq!(DEFAULT_MAX_MEMORY, 2 * 1024 * 1024);
}

#[test]
fn null_stream_is_always_at_end() -> Result<()> {
    let mut stream = null()?;
    assert!(stream.eof());
    assert!(stream.is_readable());
    assert!(stream.is_writable());
    assert!(stream.is_seekable());
    assert_eq!(stream.size(), Some(0));
    assert_eq!(stream.write(b"discarded")?, 9);
    assert_eq!(stream.read(10)?, b"");
    assert_eq!(stream.seek(100, Whence::Start)?, 0);
    assert!(stream.eof());
    assert!(stream.snapshot().is_empty());
    Ok(())
}

#[test]
fn custom_resource_via_from_resource() -> Result<()> {
    let mut stream = Stream::from_resource(MemoryResource::with_content("xyz"), "rb")?;
    assert!(!stream.is_writable());
    assert_eq!(stream.read(3)?, b"xyz");
    Ok(())
}

#[test]
fn boxed_resource_via_from_resource() -> Result<()> {
    let boxed: Box<dyn Resource> = Box::new(MemoryResource::new());
    let mut stream = Stream::from_resource(boxed, "wb")?;
    assert_eq!(stream.write(b"abc")?, 3);
    assert!(stream.snapshot().is_empty());
    Ok(())
}

#[test]
fn factory_creates_seekable_temp_streams() -> Result<()> {
    let factory = DefaultStreamFactory::default();
    let mut stream = factory.create_stream(b"hello")?;
    assert!(stream.is_readable() && stream.is_writable() && stream.is_seekable());
    assert_eq!(stream.tell()?, 0);
    assert_stream_contents(&mut stream, "hello");

    let small = DefaultStreamFactory::new(TempOptions { max_memory: 2 });
    let mut spilled = small.create_stream(b"spilled")?;
    assert_stream_contents(&mut spilled, "spilled");
    Ok(())
}

#[test]
fn factory_opens_files_and_resources() -> Result<()> {
    let factory = DefaultStreamFactory::default();
    let temp = mock_file("on disk")?;
    let mut stream = factory.create_stream_from_file(temp.path(), "rb")?;
    assert_eq!(stream.contents()?, b"on disk");

    let dir = TempDirPath::new()?;
    let missing = factory.create_stream_from_file(&dir.file_path("missing"), "rb");
    assert!(matches!(missing, Err(StreamError::InvalidArgument(_))));

    let mut wrapped =
        factory.create_stream_from_resource(Box::new(MemoryResource::with_content("mem")), "rb")?;
    assert_eq!(wrapped.contents()?, b"mem");
    Ok(())
}

#[cfg(feature = "stdio")]
mod stdio {
    use anyhow::Result;
    use ironstream::{stderr, stdin, stdout, StreamError};

    #[test]
    fn stdin_is_read_only_and_unseekable() -> Result<()> {
        let mut stream = stdin()?;
        assert!(stream.is_readable());
        assert!(!stream.is_writable());
        assert!(!stream.is_seekable());
        assert!(matches!(stream.tell(), Err(StreamError::NotSeekable)));
        assert!(matches!(stream.rewind(), Err(StreamError::NotSeekable)));
        assert_eq!(stream.metadata_value("stream_type"), Some(serde_json::json!("stdin")));
        stream.close();
        Ok(())
    }

    #[test]
    fn stdout_and_stderr_are_write_only() -> Result<()> {
        for mut stream in [stdout()?, stderr()?] {
            assert!(!stream.is_readable());
            assert!(stream.is_writable());
            assert!(!stream.is_seekable());
            assert_eq!(stream.write(b"")?, 0);
            assert!(matches!(stream.read(1), Err(StreamError::NotReadable)));
        }
        let stdout = stdout()?;
        let stderr = stderr()?;
        assert_eq!(stdout.metadata_value("stream_type"), Some(serde_json::json!("stdout")));
        assert_eq!(stderr.metadata_value("stream_type"), Some(serde_json::json!("stderr")));
        Ok(())
    }
}
