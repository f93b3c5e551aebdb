use rand::distr::{Alphanumeric, SampleString};

/// Supplies identifiers for nodes and edges created during expansion.
///
/// Ids are opaque: nothing in the conversion core depends on their shape, only
/// on their uniqueness within a graph. Injecting the generator keeps the
/// expander deterministic under test.
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Collision-resistant random ids, the default for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let suffix = Alphanumeric.sample_string(&mut rand::rng(), 9).to_lowercase();
        format!("{}_{}", prefix, suffix)
    }
}

/// Counter-based ids for tests and reproducible exports.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}_{}", prefix, self.next);
        self.next += 1;
        id
    }
}
