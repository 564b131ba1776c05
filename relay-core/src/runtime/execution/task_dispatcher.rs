use linked_hash_map::LinkedHashMap;
use relay_common::prelude::*;

use super::channels::TASK_DISPATCH_CHANNEL;
use crate::metrics::Monitors;
use crate::runtime::event::TaskDispatchEvent;

/// Receiving end of post-transition tasks. Implementations must not block.
pub trait TaskQueue: Send + Sync {
    fn dispatch(&self, event: TaskDispatchEvent) -> RelayResult<()>;
}

/// Sends on `TASK_DISPATCH_CHANNEL`, drained by the workers.
#[derive(Default)]
pub struct ChannelTaskQueue;

impl TaskQueue for ChannelTaskQueue {
    fn dispatch(&self, event: TaskDispatchEvent) -> RelayResult<()> {
        TASK_DISPATCH_CHANNEL.0.send(event)?;
        Ok(())
    }
}

pub struct TaskDispatcher;

impl TaskDispatcher {
    /// Caller tasks first, then the tasks of the node left, each name kept once.
    pub fn merge(caller_tasks: &[InlineStr], node_tasks: &[InlineStr]) -> Vec<InlineStr> {
        let mut merged = LinkedHashMap::new();
        for task in caller_tasks.iter().chain(node_tasks) {
            if !task.is_empty() && !merged.contains_key(task) {
                merged.insert(task.clone(), ());
            }
        }
        merged.into_iter().map(|(task, _)| task).collect()
    }

    /// Fire and forget, a queue failure is only logged.
    pub fn dispatch(queue: &dyn TaskQueue, work_order_id: i64, tasks: Vec<InlineStr>) {
        if tasks.is_empty() {
            return;
        }

        let count = tasks.len();
        match queue.dispatch(TaskDispatchEvent::new(work_order_id, tasks)) {
            Ok(_) => {
                debug!("dispatched {} tasks of work order {}", count, work_order_id);
                Monitors::record_tasks_dispatched(count);
            }
            Err(e) => {
                warn!(
                    "failed to dispatch tasks of work order {}: {}",
                    work_order_id,
                    e.message()
                );
                Monitors::record_task_dispatch_error();
            }
        }
    }
}
