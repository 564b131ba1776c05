mod dal;
mod event;
mod execution;
mod sync;

pub use dal::WorkOrderDaoFacade;
pub use event::TaskDispatchEvent;
pub use execution::{
    ChannelTaskQueue, CirculationExecutor, ConditionEvaluator, DurationTracker, TaskDispatcher,
    TaskQueue, TASK_DISPATCH_CHANNEL,
};
pub use sync::Lock;
