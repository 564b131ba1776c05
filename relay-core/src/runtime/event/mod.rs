mod task_dispatch_event;

pub use task_dispatch_event::TaskDispatchEvent;
