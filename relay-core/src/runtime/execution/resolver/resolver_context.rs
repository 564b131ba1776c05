use relay_common::{CallerIdentity, Node, ProcessGraph};

use crate::model::{ActiveState, CirculationHistory, FormData, WorkOrder};

/// Read-only view of one transition request, shared by the resolvers and gates.
#[derive(Clone, Copy)]
pub struct ResolverContext<'a> {
    pub caller: &'a CallerIdentity,
    pub graph: &'a ProcessGraph,
    pub work_order: &'a WorkOrder,
    pub form_data: &'a FormData,
    /// Newest first.
    pub history: &'a [CirculationHistory],
    pub source: &'a Node,
    pub source_state: &'a ActiveState,
}

impl<'a> ResolverContext<'a> {
    pub fn enter(&self, node: &Node) -> ActiveState {
        ActiveState::enter(node, self.work_order.creator)
    }
}
