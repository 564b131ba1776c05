use relay_common::prelude::*;
use relay_common::{EdgeDirection, Node, NodeClass};

use super::{NodeResolver, Resolution, ResolverContext, StateTransition};
use crate::runtime::execution::{CountersignAggregator, ParallelJoinBarrier};

/// A gateway with one incoming and several outgoing edges forks, one with several incoming
/// edges and a single outgoing edge joins.
pub struct ParallelGatewayResolver;

impl NodeResolver for ParallelGatewayResolver {
    fn node_class(&self) -> NodeClass {
        NodeClass::ParallelGateway
    }

    fn resolve<'a>(
        &self,
        context: &ResolverContext<'a>,
        target: &'a Node,
    ) -> RelayResult<Resolution<'a>> {
        let outgoing = context.graph.get_edges(&target.id, EdgeDirection::AsSource)?;
        let incoming = context.graph.get_edges(&target.id, EdgeDirection::AsTarget)?;

        if outgoing.len() > 1 && incoming.len() == 1 {
            let branches = outgoing
                .iter()
                .map(|edge| context.graph.get_node(&edge.target))
                .collect::<RelayResult<Vec<_>>>()?;
            debug!("parallel gateway {} forks into {} branches", target.id, branches.len());

            Ok(Resolution {
                target: branches[0],
                transition: StateTransition::Advance(
                    branches.iter().map(|x| context.enter(x)).collect(),
                ),
            })
        } else if outgoing.len() == 1 && incoming.len() > 1 {
            let convergence = context.graph.get_node(&outgoing[0].target)?;
            let transition = if ParallelJoinBarrier::is_passable(
                &context.work_order.active_states,
                context.history,
                &convergence.id,
                &context.source_state.id,
                |state| {
                    context
                        .graph
                        .get_node(&state.id)
                        .map(|node| CountersignAggregator::applies(node, state))
                        .unwrap_or(false)
                },
            ) {
                StateTransition::Converge(context.enter(convergence))
            } else {
                StateTransition::Hold
            };

            Ok(Resolution {
                target: convergence,
                transition,
            })
        } else {
            fmt_err!(
                InvalidGatewayTopology,
                "parallel gateway {} has {} incoming and {} outgoing edges",
                target.id,
                incoming.len(),
                outgoing.len()
            )
        }
    }
}
