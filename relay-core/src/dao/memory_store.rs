use dashmap::DashMap;
use relay_common::prelude::*;

use super::{
    DepartmentRecord, ProcessDefinitionRecord, StoreTransaction, UserRecord, WorkOrderRecord,
    WorkOrderStore, WorkOrderUpdate,
};
use crate::model::CirculationHistory;

#[derive(Default)]
struct Tables {
    work_orders: DashMap<i64, WorkOrderRecord>,
    process_definitions: DashMap<i64, ProcessDefinitionRecord>,
    form_data: DashMap<i64, Vec<String>>,
    circulation_history: DashMap<i64, Vec<CirculationHistory>>,
    users: DashMap<i64, UserRecord>,
    departments: DashMap<i64, DepartmentRecord>,
    history_id: AtomicI64,
    /// Held while a transaction is validated and applied.
    commit_lock: Mutex<()>,
}

impl Tables {
    fn append_history(&self, mut entry: CirculationHistory) {
        entry.id = self.history_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        self.circulation_history
            .entry(entry.work_order_id)
            .or_default()
            .push(entry);
    }
}

/// In-process `WorkOrderStore` keeping every table in a `DashMap`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_work_order(&self, record: WorkOrderRecord) {
        self.tables.work_orders.insert(record.id, record);
    }

    pub fn insert_process_definition(&self, record: ProcessDefinitionRecord) {
        self.tables.process_definitions.insert(record.id, record);
    }

    pub fn insert_form_data(&self, work_order_id: i64, blobs: Vec<String>) {
        self.tables.form_data.insert(work_order_id, blobs);
    }

    pub fn insert_user(&self, record: UserRecord) {
        self.tables.users.insert(record.user_id, record);
    }

    pub fn insert_department(&self, record: DepartmentRecord) {
        self.tables.departments.insert(record.dept_id, record);
    }

    /// Appends a history entry outside any transaction, the given `id` is replaced.
    pub fn insert_circulation_history(&self, entry: CirculationHistory) {
        self.tables.append_history(entry);
    }
}

impl WorkOrderStore for MemoryStore {
    fn find_work_order(&self, work_order_id: i64) -> RelayResult<WorkOrderRecord> {
        self.tables
            .work_orders
            .get(&work_order_id)
            .map(|x| x.clone())
            .ok_or_else(|| ErrorCode::NotFound(format!("work order not found: {}", work_order_id)))
    }

    fn find_process_definition(&self, process_id: i64) -> RelayResult<ProcessDefinitionRecord> {
        self.tables
            .process_definitions
            .get(&process_id)
            .map(|x| x.clone())
            .ok_or_else(|| ErrorCode::NotFound(format!("process not found: {}", process_id)))
    }

    fn find_form_data(&self, work_order_id: i64) -> RelayResult<Vec<String>> {
        Ok(self
            .tables
            .form_data
            .get(&work_order_id)
            .map(|x| x.clone())
            .unwrap_or_default())
    }

    fn find_circulation_history(&self, work_order_id: i64) -> RelayResult<Vec<CirculationHistory>> {
        let mut history = self
            .tables
            .circulation_history
            .get(&work_order_id)
            .map(|x| x.clone())
            .unwrap_or_default();
        // ids break ties between entries created within the same instant
        history.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(history)
    }

    fn find_user(&self, user_id: i64) -> RelayResult<UserRecord> {
        self.tables
            .users
            .get(&user_id)
            .map(|x| x.clone())
            .ok_or_else(|| ErrorCode::NotFound(format!("user not found: {}", user_id)))
    }

    fn find_department(&self, dept_id: i64) -> RelayResult<DepartmentRecord> {
        self.tables
            .departments
            .get(&dept_id)
            .map(|x| x.clone())
            .ok_or_else(|| ErrorCode::NotFound(format!("department not found: {}", dept_id)))
    }

    fn begin_transaction(&self) -> RelayResult<Box<dyn StoreTransaction>> {
        Ok(Box::new(MemoryTransaction {
            tables: self.tables.clone(),
            writes: Vec::default(),
        }))
    }
}

enum StagedWrite {
    UpdateWorkOrder {
        work_order_id: i64,
        expected_version: i64,
        update: WorkOrderUpdate,
    },
    MarkEnded(i64),
    CreateHistory(CirculationHistory),
}

struct MemoryTransaction {
    tables: Arc<Tables>,
    writes: Vec<StagedWrite>,
}

impl MemoryTransaction {
    /// Every staged write must apply, otherwise nothing does.
    fn validate(&self) -> RelayResult<()> {
        for write in &self.writes {
            match write {
                StagedWrite::UpdateWorkOrder {
                    work_order_id,
                    expected_version,
                    ..
                } => {
                    let record = self.tables.work_orders.get(work_order_id).ok_or_else(|| {
                        ErrorCode::NotFound(format!("work order not found: {}", work_order_id))
                    })?;
                    if record.version != *expected_version {
                        return fmt_err!(
                            Conflict,
                            "work order {} was modified concurrently, expected version {} but found {}",
                            work_order_id,
                            expected_version,
                            record.version
                        );
                    }
                }
                StagedWrite::MarkEnded(work_order_id) => {
                    if !self.tables.work_orders.contains_key(work_order_id) {
                        return fmt_err!(NotFound, "work order not found: {}", work_order_id);
                    }
                }
                StagedWrite::CreateHistory(_) => {}
            }
        }
        Ok(())
    }
}

impl StoreTransaction for MemoryTransaction {
    fn update_work_order(
        &mut self,
        work_order_id: i64,
        expected_version: i64,
        update: WorkOrderUpdate,
    ) -> RelayResult<()> {
        self.writes.push(StagedWrite::UpdateWorkOrder {
            work_order_id,
            expected_version,
            update,
        });
        Ok(())
    }

    fn mark_work_order_ended(&mut self, work_order_id: i64) -> RelayResult<()> {
        self.writes.push(StagedWrite::MarkEnded(work_order_id));
        Ok(())
    }

    fn create_circulation_history(&mut self, entry: CirculationHistory) -> RelayResult<()> {
        self.writes.push(StagedWrite::CreateHistory(entry));
        Ok(())
    }

    fn commit(self: Box<Self>) -> RelayResult<()> {
        let tables = self.tables.clone();
        let _guard = tables.commit_lock.lock();
        self.validate()?;

        let MemoryTransaction { writes, .. } = *self;
        let mut touched = HashSet::new();
        for write in writes {
            match write {
                StagedWrite::UpdateWorkOrder {
                    work_order_id,
                    update,
                    ..
                } => {
                    if let Some(mut record) = tables.work_orders.get_mut(&work_order_id) {
                        if let Some(state) = update.state {
                            record.state = state;
                        }
                        if let Some(related_person) = update.related_person {
                            record.related_person = related_person;
                        }
                    }
                    touched.insert(work_order_id);
                }
                StagedWrite::MarkEnded(work_order_id) => {
                    if let Some(mut record) = tables.work_orders.get_mut(&work_order_id) {
                        record.is_end = true;
                    }
                    touched.insert(work_order_id);
                }
                StagedWrite::CreateHistory(entry) => tables.append_history(entry),
            }
        }

        for work_order_id in touched {
            if let Some(mut record) = tables.work_orders.get_mut(&work_order_id) {
                record.version += 1;
            }
        }
        Ok(())
    }

    fn rollback(self: Box<Self>) {
        debug!("discarding {} staged writes", self.writes.len());
    }
}
