// file: src/ingest/id.rs
// description: injectable identifier generation for ingested records
// reference: https://docs.rs/uuid

use uuid::Uuid;

/// Capability handed to the batch normalizer so callers control how record
/// ids are minted. Ids must be unique for the lifetime of the process.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests and reproducible fixtures.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_uniqueness() {
        let mut generator = UuidGenerator;
        let ids: HashSet<String> = (0..100).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_sequential_generator() {
        let mut generator = SequentialGenerator::new("ex");
        assert_eq!(generator.next_id(), "ex-0");
        assert_eq!(generator.next_id(), "ex-1");
    }
}
