use chrono::{DateTime, Utc};
use relay_common::prelude::*;

use crate::model::CirculationHistory;

/// Work order row as stored; `state` and `related_person` are JSON text.
#[derive(Clone, Debug)]
pub struct WorkOrderRecord {
    pub id: i64,
    pub title: InlineStr,
    pub process_id: i64,
    pub creator: i64,
    /// JSON array of user ids.
    pub related_person: String,
    /// JSON array of active state snapshots.
    pub state: String,
    pub is_end: bool,
    /// Bumped by every committed write, used as optimistic guard.
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct ProcessDefinitionRecord {
    pub id: i64,
    pub name: InlineStr,
    /// JSON object with `nodes` and `edges`.
    pub structure: String,
}

#[derive(Clone, Debug)]
pub struct UserRecord {
    pub user_id: i64,
    pub nick_name: InlineStr,
    pub dept_id: i64,
}

#[derive(Clone, Debug)]
pub struct DepartmentRecord {
    pub dept_id: i64,
    pub leader: i64,
}

/// Columns written by a transition, `None` leaves the column unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkOrderUpdate {
    pub state: Option<String>,
    pub related_person: Option<String>,
}

/// Data access layer the transition engine runs against.
pub trait WorkOrderStore: Send + Sync {
    fn find_work_order(&self, work_order_id: i64) -> RelayResult<WorkOrderRecord>;

    fn find_process_definition(&self, process_id: i64) -> RelayResult<ProcessDefinitionRecord>;

    /// Raw form blobs of the work order in submission order, possibly empty.
    fn find_form_data(&self, work_order_id: i64) -> RelayResult<Vec<String>>;

    /// History of the work order, newest first.
    fn find_circulation_history(&self, work_order_id: i64) -> RelayResult<Vec<CirculationHistory>>;

    fn find_user(&self, user_id: i64) -> RelayResult<UserRecord>;

    fn find_department(&self, dept_id: i64) -> RelayResult<DepartmentRecord>;

    fn begin_transaction(&self) -> RelayResult<Box<dyn StoreTransaction>>;
}

/// One atomic write scope. Nothing written through it is visible before `commit`.
pub trait StoreTransaction: Send {
    /// Fails the commit with `Conflict` when the stored version is no longer `expected_version`.
    fn update_work_order(
        &mut self,
        work_order_id: i64,
        expected_version: i64,
        update: WorkOrderUpdate,
    ) -> RelayResult<()>;

    fn mark_work_order_ended(&mut self, work_order_id: i64) -> RelayResult<()>;

    fn create_circulation_history(&mut self, entry: CirculationHistory) -> RelayResult<()>;

    fn commit(self: Box<Self>) -> RelayResult<()>;

    fn rollback(self: Box<Self>);
}
