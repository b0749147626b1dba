/// Segment id source. Swappable so tests can assert against stable ids.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Production generator: random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGen;

impl IdGenerator for UuidIdGen {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: `seg-0`, `seg-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGen {
    next: u64,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGen {
    fn next_id(&mut self) -> String {
        let id = format!("seg-{}", self.next);
        self.next += 1;
        id
    }
}
