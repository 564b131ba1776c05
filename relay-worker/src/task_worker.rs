use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use relay_common::prelude::*;
use relay_core::{TaskDispatchEvent, TASK_DISPATCH_CHANNEL};

use super::TaskHandlerRegistry;

const POLL_TIMEOUT: u64 = 1000;

/// Drains `TASK_DISPATCH_CHANNEL` and runs the registered handlers.
pub struct TaskWorker;

impl TaskWorker {
    pub fn spawn_task_loop() -> JoinHandle<()> {
        thread::spawn(|| loop {
            if let Err(e) = Self::poll_once(Duration::from_millis(POLL_TIMEOUT)) {
                error!("task worker stopped, {}", e);
                break;
            }
        })
    }

    /// Waits up to `timeout` for one event and runs its tasks. Returns how many tasks succeeded.
    pub fn poll_once(timeout: Duration) -> RelayResult<usize> {
        match TASK_DISPATCH_CHANNEL.1.recv_timeout(timeout) {
            Ok(event) => Ok(Self::execute(&event)),
            Err(RecvTimeoutError::Timeout) => Ok(0),
            Err(RecvTimeoutError::Disconnected) => {
                str_err!(UnknownException, "task dispatch channel disconnected")
            }
        }
    }

    /// Tasks run in order; an unknown or failing task does not stop the next ones.
    pub fn execute(event: &TaskDispatchEvent) -> usize {
        let mut succeeded = 0;
        for task_name in &event.tasks {
            let handler = match TaskHandlerRegistry::get(task_name) {
                Ok(handler) => handler,
                Err(_) => {
                    warn!(
                        "no handler for task {} of work order {}, skipped",
                        task_name, event.work_order_id
                    );
                    continue;
                }
            };

            match handler.execute(event.work_order_id) {
                Ok(_) => {
                    debug!("task {} of work order {} done", task_name, event.work_order_id);
                    succeeded += 1;
                }
                Err(e) => error!(
                    "task {} of work order {} failed, {}",
                    task_name, event.work_order_id, e
                ),
            }
        }
        succeeded
    }
}
