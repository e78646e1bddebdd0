//! ID types for lane entities.

use serde::{Deserialize, Serialize};

/// Unique identifier for an enemy within one battle.
///
/// Ids are handed out by an [`EnemyIdCounter`] owned by the battle, start at 1
/// and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(u64);

impl EnemyId {
    /// Creates an enemy ID from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid enemy ID.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) enemy ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Monotonic allocator for [`EnemyId`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyIdCounter {
    last: u64,
}

impl EnemyIdCounter {
    /// Creates a counter that has not allocated anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Allocates the next id.
    pub fn allocate(&mut self) -> EnemyId {
        self.last += 1;
        EnemyId(self.last)
    }

    /// Returns the most recently allocated id ([`EnemyId::NULL`] if none).
    #[must_use]
    pub const fn last(&self) -> EnemyId {
        EnemyId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = EnemyIdCounter::new();
        assert_eq!(counter.last(), EnemyId::NULL);
        assert!(!counter.last().is_valid());

        let id = counter.allocate();
        assert_eq!(id.raw(), 1);
        assert!(id.is_valid());
        assert_eq!(counter.last(), id);
    }

    #[test]
    fn test_display() {
        assert_eq!(EnemyId::from_raw(7).to_string(), "enemy#7");
    }
}
