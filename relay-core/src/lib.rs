mod config;
mod dao;
mod metrics;
mod model;
mod runtime;
mod service;

pub use config::{Locale, Properties};
pub use dao::{
    DepartmentRecord, MemoryStore, ProcessDefinitionRecord, StoreTransaction, Transaction,
    UserRecord, WorkOrderRecord, WorkOrderStore, WorkOrderUpdate,
};
pub use model::{ActiveState, CirculationHistory, FormData, ProcessMethod, WorkOrder};
pub use runtime::{
    ChannelTaskQueue, ConditionEvaluator, DurationTracker, TaskDispatchEvent, TaskDispatcher,
    TaskQueue, TASK_DISPATCH_CHANNEL,
};
pub use service::{ExecutionLockGuard, ExecutionLockService, WorkOrderService};

/// Installs the `env_logger` backend, `info` unless `RUST_LOG` says otherwise. Safe to call
/// more than once.
pub fn initialize() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
