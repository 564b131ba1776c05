mod execution_lock_service;
mod work_order_service;

pub use execution_lock_service::{ExecutionLockGuard, ExecutionLockService};
pub use work_order_service::WorkOrderService;
