//! Owned, single-writer holder for the in-memory record collection.

use crate::record::CreditRecord;

/// The live dataset.
///
/// Loading a new file replaces the collection wholesale; there is no merge
/// or per-record patching. Everything outside the single writer reads
/// through [`RecordStore::records`].
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<CreditRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current collection and installs `records` in its place.
    pub fn replace(&mut self, records: Vec<CreditRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[CreditRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_records;

    #[test]
    fn starts_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn replace_discards_the_previous_collection() {
        let mut store = RecordStore::new();
        store.replace(parse_records("Nombre del Cliente\nJuan\nMaria"));
        assert_eq!(store.len(), 2);

        store.replace(parse_records("Nombre del Cliente\nPedro"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].cliente, "Pedro");
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = RecordStore::new();
        store.replace(parse_records("Nombre del Cliente\nJuan"));
        store.clear();
        assert!(store.is_empty());
    }
}
