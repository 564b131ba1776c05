mod memory_store;
mod transaction;
mod work_order_store;

pub use memory_store::MemoryStore;
pub use transaction::Transaction;
pub use work_order_store::{
    DepartmentRecord, ProcessDefinitionRecord, StoreTransaction, UserRecord, WorkOrderRecord,
    WorkOrderStore, WorkOrderUpdate,
};
