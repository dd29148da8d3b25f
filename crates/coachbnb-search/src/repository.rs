//! Candidate supply. The search core ranks whatever a repository hands
//! it; persistence lives behind this trait.

use crate::{error::Result, model::Candidate};

/// Source of search candidates.
///
/// Implementations return the full candidate set; filtering and ranking
/// happen in the pipeline. At directory scale a linear scan per request
/// is the intended design.
pub trait CoachRepository: Send + Sync {
    fn coaches(&self) -> Result<Vec<Candidate>>;
}

/// A fixed in-memory candidate set, useful for tests and seed data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoaches {
    coaches: Vec<Candidate>,
}

impl InMemoryCoaches {
    #[must_use]
    pub fn new(coaches: Vec<Candidate>) -> Self {
        Self { coaches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coaches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coaches.is_empty()
    }
}

impl CoachRepository for InMemoryCoaches {
    fn coaches(&self) -> Result<Vec<Candidate>> {
        Ok(self.coaches.clone())
    }
}
