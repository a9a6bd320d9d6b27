use serde::{Deserialize, Serialize};

/// A single entry from a Google Takeout `watch-history.json` export
///
/// Only `title` and `time` matter to the pipeline; everything else in the
/// export (`titleUrl`, `subtitles`, `products`, ...) is ignored. Both fields
/// are optional here so that a missing one surfaces as a malformed record
/// during normalization rather than as an opaque parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawRecord {
    /// Title as exported, e.g. "Watched Cat Video"
    #[serde(default)]
    pub title: Option<String>,
    /// ISO-8601 timestamp, e.g. "2019-04-12T18:03:22.123Z"
    #[serde(default)]
    pub time: Option<String>,
}

impl RawRecord {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            time: Some(time.into()),
        }
    }
}
