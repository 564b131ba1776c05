use relay_common::prelude::*;

/// Tasks to run once the transition of `work_order_id` is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDispatchEvent {
    pub work_order_id: i64,
    pub tasks: Vec<InlineStr>,
}

impl TaskDispatchEvent {
    pub fn new(work_order_id: i64, tasks: Vec<InlineStr>) -> Self {
        Self {
            work_order_id,
            tasks,
        }
    }
}
