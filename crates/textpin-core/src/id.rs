//! Item identifiers.
//!
//! Ids are process-unique and monotonically increasing, so creation order
//! can be recovered from ids alone. An id is never reused within a session
//! and stays stable while the item is moved around the canvas.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a placed text item.
/// 8 bytes, Copy, Eq, Hash; ordering follows creation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh id. Monotonic within the process.
    pub fn next() -> Self {
        ItemId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw integer form, for host bridges and logs.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ItemId(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let a = ItemId::next();
        let b = ItemId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn display_is_hash_prefixed() {
        let id = ItemId::next();
        assert_eq!(format!("{id}"), format!("#{}", id.as_u64()));
    }
}
