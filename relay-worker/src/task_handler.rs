use relay_common::prelude::*;

/// A named task triggered after a work order transition commits.
pub trait TaskHandler: Send + Sync {
    /// Runs the task for `work_order_id`. An error is logged by the worker, the transition that
    /// triggered the task is not affected.
    fn execute(&self, work_order_id: i64) -> RelayResult<()>;
}

impl<F> TaskHandler for F
where
    F: Fn(i64) -> RelayResult<()> + Send + Sync,
{
    fn execute(&self, work_order_id: i64) -> RelayResult<()> {
        self(work_order_id)
    }
}
