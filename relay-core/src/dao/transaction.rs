use relay_common::prelude::*;

use super::{StoreTransaction, WorkOrderStore, WorkOrderUpdate};
use crate::model::CirculationHistory;

/// Scoped store transaction. It is either committed explicitly or rolled back when dropped, so
/// an early return never leaves writes pending.
pub struct Transaction {
    inner: Option<Box<dyn StoreTransaction>>,
}

impl Transaction {
    pub fn begin(store: &dyn WorkOrderStore) -> RelayResult<Self> {
        Ok(Self {
            inner: Some(store.begin_transaction()?),
        })
    }

    fn inner(&mut self) -> RelayResult<&mut Box<dyn StoreTransaction>> {
        self.inner
            .as_mut()
            .ok_or_else(|| ErrorCode::StoreError("transaction already released"))
    }

    pub fn update_work_order(
        &mut self,
        work_order_id: i64,
        expected_version: i64,
        update: WorkOrderUpdate,
    ) -> RelayResult<()> {
        self.inner()?
            .update_work_order(work_order_id, expected_version, update)
    }

    pub fn mark_work_order_ended(&mut self, work_order_id: i64) -> RelayResult<()> {
        self.inner()?.mark_work_order_ended(work_order_id)
    }

    pub fn create_circulation_history(&mut self, entry: CirculationHistory) -> RelayResult<()> {
        self.inner()?.create_circulation_history(entry)
    }

    pub fn commit(mut self) -> RelayResult<()> {
        match self.inner.take() {
            Some(inner) => inner.commit(),
            None => str_err!(StoreError, "transaction already released"),
        }
    }

    pub fn rollback(mut self) {
        if let Some(inner) = self.inner.take() {
            inner.rollback();
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            warn!("rolling back unreleased transaction");
            inner.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::dao::{MemoryStore, WorkOrderRecord};

    fn store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert_work_order(WorkOrderRecord {
            id: 1,
            title: "t".into(),
            process_id: 1,
            creator: 1,
            related_person: "[]".to_string(),
            state: "[]".to_string(),
            is_end: false,
            version: 0,
            created_at: Utc::now(),
        });
        store
    }

    fn update() -> WorkOrderUpdate {
        WorkOrderUpdate {
            state: Some("[{\"id\":\"a\",\"label\":\"A\"}]".to_string()),
            related_person: None,
        }
    }

    #[test]
    fn dropped_transaction_leaves_no_trace() {
        let store = store();
        {
            let mut tx = Transaction::begin(&store).expect("begin");
            tx.update_work_order(1, 0, update()).expect("stage update");
        }

        let record = store.find_work_order(1).expect("work order");
        assert_eq!(record.state, "[]");
        assert_eq!(record.version, 0);
    }

    #[test]
    fn commit_applies_and_bumps_version() {
        let store = store();
        let mut tx = Transaction::begin(&store).expect("begin");
        tx.update_work_order(1, 0, update()).expect("stage update");
        tx.commit().expect("commit");

        let record = store.find_work_order(1).expect("work order");
        assert_eq!(record.state, "[{\"id\":\"a\",\"label\":\"A\"}]");
        assert_eq!(record.version, 1);
    }
}
