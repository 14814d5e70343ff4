use tokio::sync::RwLock;

/// Anything a [`Collection`] can hold. Records are looked up by their
/// string id and cloned out of the store, never borrowed.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// Outcome of [`Collection::remove_by_id_if`]: the record was removed,
/// was present but failed the check, or was not there at all.
#[derive(Debug, PartialEq)]
pub enum Removal<T> {
    Removed(T),
    Refused,
    Missing,
}

/// In-memory backing store for a single resource.
///
/// Records keep their insertion order, and a replaced record stays at
/// the index of the record it replaced. Every mutation takes the write
/// lock once, so a lookup and the change it guards happen atomically.
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn insert(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    pub async fn replace_by_id(&self, id: &str, record: T) -> Option<T> {
        let mut records = self.records.write().await;
        let index = records.iter().position(|existing| existing.id() == id)?;
        records[index] = record.clone();
        Some(record)
    }

    pub async fn remove_by_id_if<F>(&self, id: &str, check: F) -> Removal<T>
    where
        F: FnOnce(&T) -> bool,
    {
        let mut records = self.records.write().await;
        match records.iter().position(|existing| existing.id() == id) {
            Some(index) => {
                if check(&records[index]) {
                    Removal::Removed(records.remove(index))
                } else {
                    Removal::Refused
                }
            }
            None => Removal::Missing,
        }
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_keeps_insertion_order() {
        let store = Collection::new();
        store.insert(note("a", "first")).await;
        store.insert(note("b", "second")).await;
        store.insert(note("c", "third")).await;

        let ids: Vec<String> = store.all().await.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_a_copy() {
        let store = Collection::seeded(vec![note("a", "first"), note("b", "second")]);

        assert_eq!(store.find_by_id("b").await, Some(note("b", "second")));
        assert_eq!(store.find_by_id("missing").await, None);
    }

    #[tokio::test]
    async fn replace_by_id_keeps_the_record_position() {
        let store = Collection::seeded(vec![note("a", "first"), note("b", "second")]);

        let replaced = store.replace_by_id("a", note("a", "rewritten")).await;
        assert_eq!(replaced, Some(note("a", "rewritten")));

        let all = store.all().await;
        assert_eq!(all, vec![note("a", "rewritten"), note("b", "second")]);
    }

    #[tokio::test]
    async fn replace_by_id_misses_unknown_ids() {
        let store = Collection::seeded(vec![note("a", "first")]);

        assert_eq!(store.replace_by_id("b", note("b", "new")).await, None);
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn remove_by_id_if_takes_out_an_accepted_record() {
        let store = Collection::seeded(vec![note("a", "first"), note("b", "second")]);

        let removed = store.remove_by_id_if("a", |_| true).await;
        assert_eq!(removed, Removal::Removed(note("a", "first")));
        assert_eq!(store.all().await, vec![note("b", "second")]);
    }

    #[tokio::test]
    async fn remove_by_id_if_keeps_a_refused_record() {
        let store = Collection::seeded(vec![note("a", "first")]);

        let outcome = store.remove_by_id_if("a", |n| n.text == "second").await;
        assert_eq!(outcome, Removal::Refused);
        assert_eq!(store.all().await, vec![note("a", "first")]);
    }

    #[tokio::test]
    async fn remove_by_id_if_misses_unknown_ids() {
        let store = Collection::seeded(vec![note("a", "first")]);

        let outcome = store.remove_by_id_if("b", |_| true).await;
        assert_eq!(outcome, Removal::Missing);
        assert_eq!(store.all().await.len(), 1);
    }
}
