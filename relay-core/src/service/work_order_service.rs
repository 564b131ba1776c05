use relay_common::prelude::*;
use relay_common::{CallerIdentity, HandleWorkOrderRequest};

use crate::config::Properties;
use crate::dao::WorkOrderStore;
use crate::model::{CirculationHistory, WorkOrder};
use crate::runtime::{ChannelTaskQueue, CirculationExecutor, TaskQueue, WorkOrderDaoFacade};

pub struct WorkOrderService {
    facade: WorkOrderDaoFacade,
    executor: CirculationExecutor,
}

impl WorkOrderService {
    pub fn new(
        store: Arc<dyn WorkOrderStore>,
        task_queue: Arc<dyn TaskQueue>,
        properties: Properties,
    ) -> Self {
        let facade = WorkOrderDaoFacade::new(store);
        Self {
            executor: CirculationExecutor::new(facade.clone(), task_queue, properties),
            facade,
        }
    }

    /// Service dispatching tasks on `TASK_DISPATCH_CHANNEL`, configured from the environment.
    pub fn from_env(store: Arc<dyn WorkOrderStore>) -> RelayResult<Self> {
        Ok(Self::new(
            store,
            Arc::new(ChannelTaskQueue),
            Properties::from_env()?,
        ))
    }

    /// Moves the work order out of `source_state` towards `target_state` on behalf of `caller`.
    ///
    /// Returns once state and history are committed. A countersign or parallel join that is
    /// still waiting for others also succeeds, with only the history recorded. Nothing is
    /// written when an error is returned.
    pub fn handle_work_order(
        &self,
        caller: &CallerIdentity,
        request: HandleWorkOrderRequest,
    ) -> RelayResult<()> {
        self.executor.handle_work_order(caller, &request)
    }

    /// Same as `handle_work_order`, run on the blocking pool of the tokio runtime.
    pub async fn handle_work_order_async(
        self: Arc<Self>,
        caller: CallerIdentity,
        request: HandleWorkOrderRequest,
    ) -> RelayResult<()> {
        tokio::task::spawn_blocking(move || self.handle_work_order(&caller, request))
            .await
            .map_err(|e| ErrorCode::UnknownException(format!("transition aborted: {}", e)))?
    }

    pub fn get_work_order(&self, work_order_id: i64) -> RelayResult<WorkOrder> {
        self.facade.get_work_order(work_order_id)
    }

    /// Newest first.
    pub fn get_circulation_history(
        &self,
        work_order_id: i64,
    ) -> RelayResult<Vec<CirculationHistory>> {
        self.facade.get_circulation_history(work_order_id)
    }
}
