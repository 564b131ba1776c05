use metrics::{histogram, increment_counter};
use relay_common::NodeClass;

pub struct Monitors;

impl Monitors {
    pub fn record_circulation_committed(target_class: NodeClass) {
        increment_counter!(
            "relay_circulation_committed_total",
            "target_class" => target_class.as_ref().to_string()
        );
    }

    pub fn record_circulation_deferred(target_class: NodeClass) {
        increment_counter!(
            "relay_circulation_deferred_total",
            "target_class" => target_class.as_ref().to_string()
        );
    }

    pub fn record_circulation_error(code: u16) {
        increment_counter!("relay_circulation_error_total", "code" => code.to_string());
    }

    pub fn record_circulation_time(duration_ms: f64) {
        histogram!("relay_circulation_time_ms", duration_ms);
    }

    pub fn record_acquire_lock_unsuccessful() {
        increment_counter!("relay_acquire_lock_unsuccessful_total");
    }

    pub fn record_task_dispatch_error() {
        increment_counter!("relay_task_dispatch_error_total");
    }

    pub fn record_tasks_dispatched(count: usize) {
        histogram!("relay_tasks_dispatched", count as f64);
    }
}
