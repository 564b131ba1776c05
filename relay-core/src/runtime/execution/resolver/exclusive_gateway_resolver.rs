use relay_common::prelude::*;
use relay_common::{EdgeDirection, Node, NodeClass};

use super::{NodeResolver, Resolution, ResolverContext, StateTransition};
use crate::runtime::execution::evaluators::ConditionEvaluator;

/// Takes the first outgoing edge, in definition order, with a true clause. The clauses of one
/// edge are alternatives.
pub struct ExclusiveGatewayResolver;

impl NodeResolver for ExclusiveGatewayResolver {
    fn node_class(&self) -> NodeClass {
        NodeClass::ExclusiveGateway
    }

    fn resolve<'a>(
        &self,
        context: &ResolverContext<'a>,
        target: &'a Node,
    ) -> RelayResult<Resolution<'a>> {
        for edge in context.graph.get_edges(&target.id, EdgeDirection::AsSource)? {
            for condition in &edge.conditions {
                if !ConditionEvaluator::evaluate(condition, context.form_data)? {
                    continue;
                }

                // an assignable node without processor never loads, see `Node::try_from`
                let selected = context.graph.get_node(&edge.target)?;
                debug!(
                    "exclusive gateway {} selected edge {} to {}",
                    target.id, edge.id, selected.id
                );
                return Ok(Resolution {
                    target: selected,
                    transition: StateTransition::Advance(vec![context.enter(selected)]),
                });
            }
        }

        fmt_err!(
            NoMatchingBranch,
            "no outgoing edge of exclusive gateway {} matches the form data",
            target.id
        )
    }
}
