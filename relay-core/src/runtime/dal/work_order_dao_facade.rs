use relay_common::prelude::*;
use relay_common::ProcessGraph;

use crate::dao::{Transaction, WorkOrderStore};
use crate::model::{CirculationHistory, FormData, WorkOrder};

/// Everything a transition reads before it writes.
pub struct WorkOrderSnapshot {
    pub work_order: WorkOrder,
    pub graph: ProcessGraph,
    pub form_data: FormData,
    /// Newest first.
    pub history: Vec<CirculationHistory>,
}

/// Service that acts as a facade for accessing work order data from the `WorkOrderStore`,
/// decoding the stored JSON columns.
#[derive(Clone)]
pub struct WorkOrderDaoFacade {
    store: Arc<dyn WorkOrderStore>,
}

impl WorkOrderDaoFacade {
    pub fn new(store: Arc<dyn WorkOrderStore>) -> Self {
        Self { store }
    }

    pub fn get_work_order(&self, work_order_id: i64) -> RelayResult<WorkOrder> {
        WorkOrder::try_from(self.store.find_work_order(work_order_id)?)
    }

    pub fn get_process_graph(&self, process_id: i64) -> RelayResult<ProcessGraph> {
        let definition = self.store.find_process_definition(process_id)?;
        definition
            .structure
            .parse::<ProcessGraph>()
            .map_err(|e| e.add_message(format!("process {}", definition.id)))
    }

    pub fn get_form_data(&self, work_order_id: i64) -> RelayResult<FormData> {
        FormData::parse(&self.store.find_form_data(work_order_id)?)
    }

    pub fn get_circulation_history(
        &self,
        work_order_id: i64,
    ) -> RelayResult<Vec<CirculationHistory>> {
        self.store.find_circulation_history(work_order_id)
    }

    pub fn get_department_leader(&self, user_id: i64) -> RelayResult<i64> {
        let user = self.store.find_user(user_id)?;
        Ok(self.store.find_department(user.dept_id)?.leader)
    }

    pub fn load_snapshot(&self, work_order_id: i64) -> RelayResult<WorkOrderSnapshot> {
        let work_order = self.get_work_order(work_order_id)?;
        let graph = self.get_process_graph(work_order.process_id)?;
        let form_data = self.get_form_data(work_order_id)?;
        let history = self.get_circulation_history(work_order_id)?;
        debug!(
            "loaded work order {} at version {} with {} active states and {} history records",
            work_order.id,
            work_order.version,
            work_order.active_states.len(),
            history.len()
        );

        Ok(WorkOrderSnapshot {
            work_order,
            graph,
            form_data,
            history,
        })
    }

    pub fn begin_transaction(&self) -> RelayResult<Transaction> {
        Transaction::begin(self.store.as_ref())
    }
}
