use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString};

use super::NodeClass;
use crate::prelude::*;

/// How the processors of an assignable node are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum AssignType {
    /// `assignValue` holds user ids
    Person,
    Role,
    Department,
    /// `assignValue` holds placeholders resolved against the work order when the state is entered
    Variable,
}

/// Processor configuration carried by `userTask` and `receiveTask` nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub assign_type: AssignType,
    /// Never empty.
    pub assign_value: Vec<i64>,
    pub counter_sign: bool,
}

impl Assignment {
    /// Countersign only matters when more than one processor has to act.
    pub fn requires_countersign(&self) -> bool {
        self.counter_sign && self.assign_value.len() > 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Start,
    UserTask(Assignment),
    ReceiveTask(Assignment),
    ScriptTask,
    End,
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: InlineStr,
    pub label: InlineStr,
    pub kind: NodeKind,
    /// Task identifiers triggered when a work order leaves this node.
    pub tasks: Vec<InlineStr>,
}

impl Node {
    pub fn class(&self) -> NodeClass {
        match &self.kind {
            NodeKind::Start => NodeClass::Start,
            NodeKind::UserTask(_) => NodeClass::UserTask,
            NodeKind::ReceiveTask(_) => NodeClass::ReceiveTask,
            NodeKind::ScriptTask => NodeClass::ScriptTask,
            NodeKind::End => NodeClass::End,
            NodeKind::ExclusiveGateway => NodeClass::ExclusiveGateway,
            NodeKind::ParallelGateway => NodeClass::ParallelGateway,
            NodeKind::InclusiveGateway => NodeClass::InclusiveGateway,
        }
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match &self.kind {
            NodeKind::UserTask(assignment) | NodeKind::ReceiveTask(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, NodeKind::End)
    }

    fn parse_assignment(id: &str, value: &serde_json::Value) -> RelayResult<Assignment> {
        let assign_type = value
            .get("assignType")
            .and_then(|x| x.as_str())
            .map(|x| x.trim())
            .unwrap_or("");
        if assign_type.is_empty() {
            return fmt_err!(UnassignedProcessor, "node {}: assignType is empty", id);
        }
        let assign_type = AssignType::from_str(assign_type).map_err(|_| {
            ErrorCode::Deserialization(format!("node {}: unknown assignType {}", id, assign_type))
        })?;

        let mut assign_value = Vec::default();
        if let Some(values) = value.get("assignValue").filter(|x| !x.is_null()) {
            for v in values.as_array().ok_or_else(|| {
                ErrorCode::Deserialization(format!("node {}: assignValue not a array", id))
            })? {
                assign_value.push(v.as_i64().ok_or_else(|| {
                    ErrorCode::Deserialization(format!(
                        "node {}: assignValue must hold integers, found {}",
                        id, v
                    ))
                })?);
            }
        }
        if assign_value.is_empty() {
            return fmt_err!(UnassignedProcessor, "node {}: no processor assigned", id);
        }

        let counter_sign = match value.get("isCounterSign") {
            None | Some(serde_json::Value::Null) => false,
            Some(v) => v.as_bool().ok_or_else(|| {
                ErrorCode::Deserialization(format!("node {}: isCounterSign invalid", id))
            })?,
        };

        Ok(Assignment {
            assign_type,
            assign_value,
            counter_sign,
        })
    }
}

impl TryFrom<&serde_json::Value> for Node {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, ErrorCode> {
        let id: InlineStr = value
            .get("id")
            .and_then(|x| x.as_str())
            .ok_or_else(|| ErrorCode::Deserialization("Node: id not found"))?
            .trim()
            .into();
        let class = NodeClass::of(
            value
                .get("clazz")
                .and_then(|x| x.as_str())
                .ok_or_else(|| {
                    ErrorCode::Deserialization(format!("Node {}: clazz not found", id))
                })?,
        )?;

        let kind = match class {
            NodeClass::Start => NodeKind::Start,
            NodeClass::UserTask => NodeKind::UserTask(Self::parse_assignment(&id, value)?),
            NodeClass::ReceiveTask => NodeKind::ReceiveTask(Self::parse_assignment(&id, value)?),
            NodeClass::ScriptTask => NodeKind::ScriptTask,
            NodeClass::End => NodeKind::End,
            NodeClass::ExclusiveGateway => NodeKind::ExclusiveGateway,
            NodeClass::ParallelGateway => NodeKind::ParallelGateway,
            NodeClass::InclusiveGateway => NodeKind::InclusiveGateway,
        };

        // Optional
        let mut tasks = Vec::default();
        if let Some(task_list) = value.get("task").filter(|x| !x.is_null()) {
            for task in task_list.as_array().ok_or_else(|| {
                ErrorCode::Deserialization(format!("Node {}: task not a array", id))
            })? {
                if let Some(task) = task.as_str() {
                    tasks.push(task.trim().into());
                } else {
                    return fmt_err!(
                        Deserialization,
                        "Node {}: task invalid, not a string in array",
                        id
                    );
                }
            }
        }

        Ok(Self {
            label: value
                .get("label")
                .and_then(|x| x.as_str())
                .unwrap_or("")
                .trim()
                .into(),
            id,
            kind,
            tasks,
        })
    }
}
