mod task_handler;
mod task_handler_registry;
mod task_worker;

pub use task_handler::TaskHandler;
pub use task_handler_registry::TaskHandlerRegistry;
pub use task_worker::TaskWorker;
