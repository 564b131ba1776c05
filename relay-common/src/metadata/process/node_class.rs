use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString};

use crate::prelude::*;

/// The `clazz` of a node in a stored process structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum NodeClass {
    Start,
    UserTask,
    ReceiveTask,
    ScriptTask,
    End,
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
}

impl NodeClass {
    pub fn of(clazz: &str) -> RelayResult<NodeClass> {
        NodeClass::from_str(clazz.trim())
            .map_err(|_| ErrorCode::Deserialization(format!("unknown node class: {}", clazz)))
    }

    pub fn is_gateway(&self) -> bool {
        matches!(
            self,
            NodeClass::ExclusiveGateway | NodeClass::ParallelGateway | NodeClass::InclusiveGateway
        )
    }
}
