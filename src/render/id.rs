use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of an emitted chart container, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    pub fn next() -> ContainerId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a caller-chosen number. Uniqueness is then up to the caller.
    #[must_use]
    pub const fn from_raw(raw: u64) -> ContainerId {
        Self(raw)
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "chart_{}", self.0)
    }
}
