//! Entity identity and audit timestamps.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity and timestamps embedded in each aggregate
///
/// Composed as a value rather than inherited; the id is immutable once
/// assigned and `updated_at` never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    /// Unique identifier
    pub id: Uuid,

    /// Timestamp when the entity was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the entity was last updated
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Creates metadata for a brand-new entity
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds metadata from stored values
    pub fn reconstitute(id: Uuid, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            updated_at,
        }
    }

    /// Stamps the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meta_timestamps() {
        let meta = EntityMeta::new();
        assert_eq!(meta.created_at, meta.updated_at);
    }

    #[test]
    fn test_touch_never_precedes_creation() {
        let mut meta = EntityMeta::new();
        meta.touch();
        assert!(meta.updated_at >= meta.created_at);
    }

    #[test]
    fn test_reconstitute_takes_values_verbatim() {
        let original = EntityMeta::new();
        let rebuilt =
            EntityMeta::reconstitute(original.id, original.created_at, original.updated_at);
        assert_eq!(rebuilt, original);
    }
}
