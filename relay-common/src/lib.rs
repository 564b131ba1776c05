mod common;
mod exception;
mod metadata;
mod run;
mod utils;

pub use metadata::{
    AssignType, Assignment, Condition, ConditionOperator, Edge, EdgeDirection, Node, NodeClass,
    NodeKind, ProcessGraph,
};
pub use run::{CallerIdentity, FlowOutcome, HandleWorkOrderRequest};
pub use utils::{EnvUtils, SystemParameters};

pub mod prelude;

#[macro_use]
pub(crate) mod macros;
