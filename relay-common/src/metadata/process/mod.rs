mod condition;
mod edge;
mod node;
mod node_class;
mod process_graph;

pub use condition::{Condition, ConditionOperator};
pub use edge::{Edge, EdgeDirection};
pub use node::{AssignType, Assignment, Node, NodeKind};
pub use node_class::NodeClass;
pub use process_graph::ProcessGraph;
