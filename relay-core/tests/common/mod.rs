#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use relay_common::prelude::*;
use relay_common::CallerIdentity;
use relay_core::{
    CirculationHistory, DepartmentRecord, MemoryStore, ProcessDefinitionRecord, Properties,
    TaskDispatchEvent, TaskQueue, UserRecord, WorkOrderRecord, WorkOrderService, WorkOrderStore,
};
use serde_json::json;

pub const WORK_ORDER_ID: i64 = 1;
pub const PROCESS_ID: i64 = 100;
pub const CREATOR: i64 = 10;

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

#[derive(Default)]
pub struct RecordingTaskQueue {
    events: Mutex<Vec<TaskDispatchEvent>>,
}

impl RecordingTaskQueue {
    pub fn events(&self) -> Vec<TaskDispatchEvent> {
        self.events.lock().clone()
    }
}

impl TaskQueue for RecordingTaskQueue {
    fn dispatch(&self, event: TaskDispatchEvent) -> RelayResult<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

pub struct Fixture {
    pub store: MemoryStore,
    pub queue: Arc<RecordingTaskQueue>,
    pub service: Arc<WorkOrderService>,
}

impl Fixture {
    pub fn new(structure: serde_json::Value, state: serde_json::Value, form_data: &[&str]) -> Self {
        Self::with_properties(structure, state, form_data, Properties::default())
    }

    pub fn with_properties(
        structure: serde_json::Value,
        state: serde_json::Value,
        form_data: &[&str],
        properties: Properties,
    ) -> Self {
        let store = seed(structure, state, form_data);
        Self::with_store(store.clone(), Arc::new(store), properties)
    }

    /// `backend` is what the service talks to, `store` is inspected by the assertions.
    pub fn with_store(
        store: MemoryStore,
        backend: Arc<dyn WorkOrderStore>,
        properties: Properties,
    ) -> Self {
        let queue = Arc::new(RecordingTaskQueue::default());
        let service = Arc::new(WorkOrderService::new(backend, queue.clone(), properties));
        Self {
            store,
            queue,
            service,
        }
    }

    pub fn active_ids(&self) -> Vec<InlineStr> {
        self.service
            .get_work_order(WORK_ORDER_ID)
            .expect("work order")
            .active_states
            .into_iter()
            .map(|x| x.id)
            .collect()
    }

    pub fn history(&self) -> Vec<CirculationHistory> {
        self.service
            .get_circulation_history(WORK_ORDER_ID)
            .expect("history")
    }
}

pub fn seed(
    structure: serde_json::Value,
    state: serde_json::Value,
    form_data: &[&str],
) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_process_definition(ProcessDefinitionRecord {
        id: PROCESS_ID,
        name: "leave".into(),
        structure: structure.to_string(),
    });
    store.insert_work_order(WorkOrderRecord {
        id: WORK_ORDER_ID,
        title: "annual leave".into(),
        process_id: PROCESS_ID,
        creator: CREATOR,
        related_person: json!([CREATOR]).to_string(),
        state: state.to_string(),
        is_end: false,
        version: 0,
        created_at: Utc::now(),
    });
    store.insert_form_data(
        WORK_ORDER_ID,
        form_data.iter().map(|x| x.to_string()).collect(),
    );
    store.insert_user(UserRecord {
        user_id: CREATOR,
        nick_name: "creator".into(),
        dept_id: 4,
    });
    store.insert_department(DepartmentRecord {
        dept_id: 4,
        leader: 40,
    });
    store
}

pub fn caller(user_id: i64) -> CallerIdentity {
    CallerIdentity::new(user_id, format!("user{}", user_id))
}

pub fn state(id: &str, label: &str, processor: &[i64]) -> serde_json::Value {
    json!({"id": id, "label": label, "processor": processor, "process_method": "person"})
}

pub fn history_entry(source: &str, target: &str, created_at: DateTime<Utc>) -> CirculationHistory {
    CirculationHistory {
        id: 0,
        work_order_id: WORK_ORDER_ID,
        title: "annual leave".into(),
        state: source.into(),
        source: source.into(),
        target: target.into(),
        circulation: InlineStr::default(),
        processor: "creator".into(),
        processor_id: CREATOR,
        cost_duration: InlineStr::default(),
        held: false,
        created_at,
    }
}

pub fn seconds_ago(seconds: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(seconds)
}

/// start -> review -> route -> approved | rejected -> end
pub fn leave_process() -> serde_json::Value {
    json!({
        "nodes": [
            {"id": "start", "label": "Start", "clazz": "start", "task": ["notify"]},
            {"id": "review", "label": "Review", "clazz": "userTask",
             "assignType": "person", "assignValue": [11], "task": ["audit"]},
            {"id": "route", "label": "Route", "clazz": "exclusiveGateway"},
            {"id": "approved", "label": "Approved", "clazz": "userTask",
             "assignType": "person", "assignValue": [12]},
            {"id": "rejected", "label": "Rejected", "clazz": "receiveTask",
             "assignType": "role", "assignValue": [13]},
            {"id": "lead", "label": "Lead", "clazz": "userTask",
             "assignType": "variable", "assignValue": [1, 2]},
            {"id": "any", "label": "Any", "clazz": "inclusiveGateway"},
            {"id": "end", "label": "End", "clazz": "end"}
        ],
        "edges": [
            {"id": "e1", "source": "start", "target": "review"},
            {"id": "e2", "source": "review", "target": "route"},
            {"id": "e3", "source": "route", "target": "approved",
             "conditionExpression": "[{\"key\":\"status\",\"sign\":\"==\",\"value\":\"approved\"}]"},
            {"id": "e4", "source": "route", "target": "rejected",
             "conditionExpression": "[{\"key\":\"status\",\"sign\":\"==\",\"value\":\"rejected\"}]"},
            {"id": "e5", "source": "approved", "target": "end"},
            {"id": "e6", "source": "rejected", "target": "end"},
            {"id": "e7", "source": "review", "target": "lead"},
            {"id": "e8", "source": "lead", "target": "any"},
            {"id": "e9", "source": "any", "target": "end"}
        ]
    })
}

/// start -> fork -> a | b | c -> join -> done -> end
pub fn parallel_process() -> serde_json::Value {
    json!({
        "nodes": [
            {"id": "start", "label": "Start", "clazz": "start"},
            {"id": "fork", "label": "Fork", "clazz": "parallelGateway"},
            {"id": "a", "label": "A", "clazz": "userTask", "assignType": "person", "assignValue": [31]},
            {"id": "b", "label": "B", "clazz": "userTask", "assignType": "person", "assignValue": [32]},
            {"id": "c", "label": "C", "clazz": "userTask", "assignType": "person", "assignValue": [33]},
            {"id": "join", "label": "Join", "clazz": "parallelGateway"},
            {"id": "done", "label": "Done", "clazz": "userTask", "assignType": "person", "assignValue": [34]},
            {"id": "end", "label": "End", "clazz": "end"}
        ],
        "edges": [
            {"id": "e1", "source": "start", "target": "fork"},
            {"id": "e2", "source": "fork", "target": "a"},
            {"id": "e3", "source": "fork", "target": "b"},
            {"id": "e4", "source": "fork", "target": "c"},
            {"id": "e5", "source": "a", "target": "join"},
            {"id": "e6", "source": "b", "target": "join"},
            {"id": "e7", "source": "c", "target": "join"},
            {"id": "e8", "source": "join", "target": "done"},
            {"id": "e9", "source": "done", "target": "end"}
        ]
    })
}

/// start -> sign (countersign by 21, 22, 23) -> end
pub fn countersign_process() -> serde_json::Value {
    json!({
        "nodes": [
            {"id": "start", "label": "Start", "clazz": "start"},
            {"id": "sign", "label": "Sign", "clazz": "userTask", "assignType": "person",
             "assignValue": [21, 22, 23], "isCounterSign": true},
            {"id": "end", "label": "End", "clazz": "end"}
        ],
        "edges": [
            {"id": "e1", "source": "start", "target": "sign"},
            {"id": "e2", "source": "sign", "target": "end"}
        ]
    })
}
