//! ledger.rs
//! Dense, id-indexed cache of resolved constants.

use crate::store::{ConstantValue, EntryId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    values: Vec<Option<ConstantValue>>,
}

impl Ledger {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(size: usize) -> Self {
        Self { values: vec![None; size] }
    }

    #[inline(always)]
    pub fn get(&self, id: EntryId) -> Option<&ConstantValue> {
        self.values.get(id.index())?.as_ref()
    }

    pub fn insert(&mut self, id: EntryId, value: ConstantValue) {
        let idx = id.index();
        if idx >= self.values.len() {
            self.values.resize(idx + 1, None);
        }
        self.values[idx] = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_grows_and_get_reads_back() {
        let mut ledger = Ledger::new();
        assert!(ledger.get(EntryId(3)).is_none());

        ledger.insert(EntryId(3), ConstantValue::new(2.5, "m"));
        assert_eq!(ledger.get(EntryId(3)), Some(&ConstantValue::new(2.5, "m")));
        assert!(ledger.get(EntryId(0)).is_none());
    }
}
