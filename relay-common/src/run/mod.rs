mod caller_identity;
mod handle_work_order_request;

pub use caller_identity::CallerIdentity;
pub use handle_work_order_request::{FlowOutcome, HandleWorkOrderRequest};
