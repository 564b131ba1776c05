use relay_common::prelude::*;
use relay_common::{Node, NodeClass};

use super::ResolverContext;
use crate::model::ActiveState;

/// Change of the active state list decided for one transition.
#[derive(Clone, Debug, PartialEq)]
pub enum StateTransition {
    /// The source state is replaced by these states, sibling branches stay active.
    Advance(Vec<ActiveState>),
    /// All branches collapse into this single state.
    Converge(ActiveState),
    /// Nothing moves yet, the action is only recorded.
    Hold,
}

#[derive(Debug)]
pub struct Resolution<'a> {
    /// The node recorded as target of the transition.
    pub target: &'a Node,
    pub transition: StateTransition,
}

/// Turns the node a transition was submitted to into the states that become active.
pub trait NodeResolver: Send + Sync {
    fn node_class(&self) -> NodeClass;

    fn resolve<'a>(
        &self,
        context: &ResolverContext<'a>,
        target: &'a Node,
    ) -> RelayResult<Resolution<'a>>;
}
