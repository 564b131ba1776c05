use std::time::Instant;

use chrono::Utc;
use relay_common::prelude::*;
use relay_common::{CallerIdentity, HandleWorkOrderRequest};

use super::resolver::ResolverContext;
use super::{
    CirculationCommitter, DeciderService, DurationTracker, HistoryRecorder, TaskDispatcher,
    TaskQueue, VariableResolver,
};
use crate::config::Properties;
use crate::metrics::Monitors;
use crate::runtime::WorkOrderDaoFacade;
use crate::service::ExecutionLockService;

/// Runs one transition of a work order: load, decide, commit state and history in a single
/// transaction, then hand the tasks of the node left to the task queue.
pub struct CirculationExecutor {
    facade: WorkOrderDaoFacade,
    execution_lock_service: ExecutionLockService,
    task_queue: Arc<dyn TaskQueue>,
    properties: Properties,
}

impl CirculationExecutor {
    pub fn new(
        facade: WorkOrderDaoFacade,
        task_queue: Arc<dyn TaskQueue>,
        properties: Properties,
    ) -> Self {
        Self {
            facade,
            execution_lock_service: ExecutionLockService::new(&properties),
            task_queue,
            properties,
        }
    }

    pub fn handle_work_order(
        &self,
        caller: &CallerIdentity,
        request: &HandleWorkOrderRequest,
    ) -> RelayResult<()> {
        let start = Instant::now();
        let result = self.circulate(caller, request);
        Monitors::record_circulation_time(start.elapsed().as_secs_f64() * 1000.0);

        if let Err(e) = &result {
            warn!(
                "work order {} failed to move from {} to {}: {}",
                request.work_order_id,
                request.source_state,
                request.target_state,
                e.message()
            );
            Monitors::record_circulation_error(e.code());
        }
        result
    }

    fn circulate(
        &self,
        caller: &CallerIdentity,
        request: &HandleWorkOrderRequest,
    ) -> RelayResult<()> {
        let lock_id = InlineStr::from(format!("work_order:{}", request.work_order_id));
        let _lock = self.execution_lock_service.acquire_lock(&lock_id)?;

        let snapshot = self.facade.load_snapshot(request.work_order_id)?;
        let work_order = &snapshot.work_order;
        if work_order.is_end {
            return fmt_err!(Conflict, "work order {} is already ended", work_order.id);
        }
        let source_state = work_order
            .active_state(&request.source_state)
            .ok_or_else(|| {
                ErrorCode::Conflict(format!(
                    "{} is not an active state of work order {}",
                    request.source_state, work_order.id
                ))
            })?;

        let graph = &snapshot.graph;
        let source = graph.get_node(&request.source_state)?;
        let target = graph.get_node(&request.target_state)?;
        let context = ResolverContext {
            caller,
            graph,
            work_order,
            form_data: &snapshot.form_data,
            history: &snapshot.history,
            source,
            source_state,
        };

        let outcome = DeciderService::decide(&context, target, request.flow_outcome)?;
        let mut next_states = CirculationCommitter::next_states(
            &work_order.active_states,
            &source.id,
            &outcome.transition,
        );
        if let Some(states) = next_states.as_mut() {
            VariableResolver::resolve(states, work_order.creator, &self.facade)?;
        }

        let now = Utc::now();
        let ends = outcome.is_completing() && outcome.target.is_end();
        let cost_duration = DurationTracker::cost_duration(
            &snapshot.history,
            &source.id,
            work_order.created_at,
            now,
            self.properties.locale,
        );

        let mut tx = self.facade.begin_transaction()?;
        CirculationCommitter::commit(&mut tx, work_order, next_states.as_deref(), caller.user_id)?;
        if ends {
            tx.mark_work_order_ended(work_order.id)?;
        }
        tx.create_circulation_history(HistoryRecorder::transition_entry(
            work_order,
            source,
            outcome.target,
            caller,
            &request.circulation,
            cost_duration,
            !outcome.is_completing(),
            now,
        ))?;
        if ends {
            tx.create_circulation_history(HistoryRecorder::terminal_entry(
                work_order,
                outcome.target,
                caller,
                self.properties.locale,
                now,
            ))?;
        }
        tx.commit()?;

        if outcome.is_completing() {
            info!(
                "work order {} moved from {} to {} by user {}{}",
                work_order.id,
                source.id,
                outcome.target.id,
                caller.user_id,
                if ends { ", ended" } else { "" }
            );
            Monitors::record_circulation_committed(outcome.target.class());
        } else {
            info!(
                "work order {} action of user {} on {} recorded, waiting for the others",
                work_order.id, caller.user_id, source.id
            );
            Monitors::record_circulation_deferred(outcome.target.class());
        }

        if self.properties.task_dispatch_enabled {
            TaskDispatcher::dispatch(
                self.task_queue.as_ref(),
                work_order.id,
                TaskDispatcher::merge(&request.tasks, &source.tasks),
            );
        }
        Ok(())
    }
}
