mod process;

pub use process::{
    AssignType, Assignment, Condition, ConditionOperator, Edge, EdgeDirection, Node, NodeClass,
    NodeKind, ProcessGraph,
};
