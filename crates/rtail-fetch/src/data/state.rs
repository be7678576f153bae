use chrono::{DateTime, Utc};

/// Per-resource record threaded through every fetch of a tail run.
///
/// Created once by [`Tailer::initiate`](crate::Tailer::initiate) and then
/// mutated in place by each successful fetch. The follow loop is its only
/// owner, so the type is not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchState {
    resource: String,
    pub(crate) offset: u64,
    pub(crate) last_modified: Option<DateTime<Utc>>,
    pub(crate) expires: Option<DateTime<Utc>>,
}

impl FetchState {
    /// Create a state that will fetch `resource` starting at `offset`.
    pub fn new(resource: impl Into<String>, offset: u64) -> Self {
        Self {
            resource: resource.into(),
            offset,
            last_modified: None,
            expires: None,
        }
    }

    /// The remote resource, e.g. `https://example.com:8888/logs/app.log`.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Number of bytes of the resource already consumed.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    /// `true` while a previously received `Expires` lies strictly after `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| now < expires)
    }
}
