//! Assertion functions for stream output.
//!
//! Records and chunks are raw bytes; failure messages render them with
//! `String::from_utf8_lossy` so a mismatch reads like text.

use crate::stream::Stream;
use std::borrow::Cow;

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn render<T: AsRef<[u8]>>(items: &[T]) -> Vec<Cow<'_, str>> {
    items.iter().map(|item| lossy(item.as_ref())).collect()
}

/// Assert that yielded records equal `expected`, in order.
///
/// # Panics
///
/// Panics if the records differ in number or content.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_records_equal;
///
/// let records = vec![b"line 1".to_vec(), vec![]];
/// assert_records_equal(&records, &["line 1", ""]);
/// ```
pub fn assert_records_equal<A, E>(actual: &[A], expected: &[E])
where
    A: AsRef<[u8]>,
    E: AsRef<[u8]>,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Record count mismatch:\n  Expected: {:?}\n  Actual: {:?}",
        render(expected),
        render(actual)
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.as_ref() == e.as_ref(),
            "Record mismatch at index {i}:\n  Expected: {:?}\n  Actual: {:?}\n  Full expected: {:?}\n  Full actual: {:?}",
            lossy(e.as_ref()),
            lossy(a.as_ref()),
            render(expected),
            render(actual)
        );
    }
}

/// Assert that a stream holds exactly `expected`, reading it from the start.
///
/// # Panics
///
/// Panics if the contents differ. An unreadable stream compares as empty.
pub fn assert_stream_contents(stream: &mut Stream, expected: impl AsRef<[u8]>) {
    let actual = stream.snapshot();
    let expected = expected.as_ref();
    assert!(
        actual == expected,
        "Stream contents mismatch:\n  Expected: {:?}\n  Actual: {:?}",
        lossy(expected),
        lossy(&actual)
    );
}

/// Assert that `chunks` is how a reader with `chunk_size` would cut a stream
/// of `total` bytes: full chunks, then one shorter remainder if any, and
/// never an empty chunk.
///
/// # Panics
///
/// Panics if any chunk has the wrong size or the sizes don't add up to `total`.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_chunk_layout;
///
/// assert_chunk_layout(&[b"tes".to_vec(), b"t".to_vec()], 4, 3);
/// ```
pub fn assert_chunk_layout<T: AsRef<[u8]>>(chunks: &[T], total: usize, chunk_size: usize) {
    let sizes: Vec<usize> = chunks.iter().map(|c| c.as_ref().len()).collect();
    let mut expected = vec![chunk_size; total / chunk_size];
    if total % chunk_size != 0 {
        expected.push(total % chunk_size);
    }
    assert_eq!(
        sizes, expected,
        "Chunk layout mismatch for {total} bytes in chunks of {chunk_size}"
    );
}
