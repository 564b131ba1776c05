use relay_common::prelude::*;
use relay_common::{AssignType, Node, NodeKind};
use serde::{Deserialize, Serialize};

pub struct ProcessMethod;

impl ProcessMethod {
    pub const PERSON: &'static str = "person";
    pub const VARIABLE: &'static str = "variable";
    /// Nodes without processor.
    pub const NONE: &'static str = "";
}

/// One outstanding position of a work order, with the processors snapshotted when it became
/// active. Persisted as an element of the work order's `state` JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveState {
    pub id: InlineStr,
    pub label: InlineStr,
    #[serde(default)]
    pub processor: Vec<i64>,
    #[serde(default)]
    pub process_method: InlineStr,
}

impl ActiveState {
    /// Snapshot of `node` as the work order enters it. The start node is handled by the creator.
    pub fn enter(node: &Node, creator: i64) -> Self {
        let (processor, process_method) = match &node.kind {
            NodeKind::Start => (vec![creator], InlineStr::from(ProcessMethod::PERSON)),
            NodeKind::UserTask(assignment) | NodeKind::ReceiveTask(assignment) => (
                assignment.assign_value.clone(),
                InlineStr::from(assignment.assign_type.as_ref()),
            ),
            _ => (Vec::default(), InlineStr::from(ProcessMethod::NONE)),
        };

        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            processor,
            process_method,
        }
    }

    pub fn is_variable(&self) -> bool {
        self.process_method.eq(AssignType::Variable.as_ref())
    }
}
