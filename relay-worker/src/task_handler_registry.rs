use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use relay_common::prelude::*;

use super::TaskHandler;

/// Holds a mapping of task names to `TaskHandler` instances.
pub struct TaskHandlerRegistry;

static REGISTRY: Lazy<DashMap<InlineStr, Box<dyn TaskHandler>>> = Lazy::new(DashMap::new);

impl TaskHandlerRegistry {
    pub fn get(task_name: &str) -> RelayResult<Ref<'static, InlineStr, Box<dyn TaskHandler>>> {
        REGISTRY.get(task_name).ok_or_else(|| {
            ErrorCode::NotFound(format!("{} not found in TaskHandlerRegistry", task_name))
        })
    }

    pub fn is_registered(task_name: &str) -> bool {
        REGISTRY.contains_key(task_name)
    }

    pub fn register(task_name: &str, handler: Box<dyn TaskHandler>) {
        REGISTRY.insert(InlineStr::from(task_name), handler);
    }

    pub fn unregister(task_name: &str) {
        REGISTRY.remove(task_name);
    }
}
