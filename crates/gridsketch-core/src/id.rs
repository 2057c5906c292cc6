//! Shape identifier generation.

use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Source of fresh shape identifiers.
///
/// Generation is pluggable so hosts can pick their collision policy:
/// [`UuidIds`] (the default) treats v4 collisions as negligible rather
/// than impossible; [`SequentialIds`] is collision-free within a session
/// and deterministic, which keeps test output stable.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_id(&mut self) -> ShapeId;
}

/// Random UUIDv4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ShapeId {
        Uuid::new_v4()
    }
}

/// Monotonic counter identifiers, encoded into the UUID value space.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Create a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ShapeId {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_distinct_and_ordered() {
        let mut ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a, Uuid::from_u128(1));
        assert_eq!(b, Uuid::from_u128(2));
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
