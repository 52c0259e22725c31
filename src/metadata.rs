use serde::Serialize;
use serde_json::Value;

/// Descriptive facts about an open stream's resource.
///
/// Captured when the stream is constructed and dropped when it is closed or
/// detached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// The mode string the stream was opened with.
    pub mode: String,
    pub seekable: bool,
    pub readable: bool,
    pub writable: bool,
    /// The resource's [`kind`](crate::io::Resource::kind).
    pub stream_type: String,
    /// Location the resource was opened from, when it has one.
    pub uri: Option<String>,
}

impl Metadata {
    /// Look up a single field by its serialized name.
    ///
    /// Returns `None` for unknown keys and for fields without a value.
    ///
    /// ```
    /// use ironstream::memory;
    /// use serde_json::json;
    ///
    /// let stream = memory("abc")?;
    /// let meta = stream.metadata().unwrap();
    /// assert_eq!(meta.get("mode"), Some(json!("rb+")));
    /// assert_eq!(meta.get("uri"), None);
    /// assert_eq!(meta.get("nope"), None);
    /// # Ok::<(), ironstream::StreamError>(())
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let Value::Object(mut fields) = serde_json::to_value(self).ok()? else {
            return None;
        };
        fields.remove(key).filter(|v| !v.is_null())
    }
}
