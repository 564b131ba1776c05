use relay_common::prelude::*;
use relay_common::{Node, NodeClass};

use super::{NodeResolver, Resolution, ResolverContext, StateTransition};

/// Moves straight to the target node.
pub struct DirectResolver {
    node_class: NodeClass,
}

impl DirectResolver {
    pub fn new(node_class: NodeClass) -> Self {
        Self { node_class }
    }
}

impl NodeResolver for DirectResolver {
    fn node_class(&self) -> NodeClass {
        self.node_class
    }

    fn resolve<'a>(
        &self,
        context: &ResolverContext<'a>,
        target: &'a Node,
    ) -> RelayResult<Resolution<'a>> {
        Ok(Resolution {
            target,
            transition: StateTransition::Advance(vec![context.enter(target)]),
        })
    }
}
