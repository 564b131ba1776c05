use relay_common::prelude::*;
use relay_common::{FlowOutcome, Node};

use super::resolver::{ResolverContext, ResolverRegistry, StateTransition};
use super::CountersignAggregator;

#[derive(Debug)]
pub struct DeciderOutcome<'a> {
    pub target: &'a Node,
    pub transition: StateTransition,
}

impl<'a> DeciderOutcome<'a> {
    /// A held transition is pending on other branches or processors.
    pub fn is_completing(&self) -> bool {
        !matches!(self.transition, StateTransition::Hold)
    }
}

/// Decider resolves the node a transition was submitted to into the states to activate, then
/// applies the countersign gate of the node being left. A rejection skips both.
pub struct DeciderService;

impl DeciderService {
    pub fn decide<'a>(
        context: &ResolverContext<'a>,
        target: &'a Node,
        flow_outcome: FlowOutcome,
    ) -> RelayResult<DeciderOutcome<'a>> {
        if flow_outcome == FlowOutcome::Reject {
            debug!(
                "work order {} sent back from {} to {}",
                context.work_order.id, context.source.id, target.id
            );
            return Ok(DeciderOutcome {
                target,
                transition: StateTransition::Advance(vec![context.enter(target)]),
            });
        }

        let resolution = ResolverRegistry::get_resolver(target.class())?.resolve(context, target)?;

        let transition = if CountersignAggregator::applies(context.source, context.source_state)
            && !CountersignAggregator::is_complete(
                &context.work_order.active_states,
                context.history,
                context.source_state,
                context.caller.user_id,
            ) {
            debug!(
                "work order {} waits for the other processors of {}",
                context.work_order.id, context.source.id
            );
            StateTransition::Hold
        } else {
            resolution.transition
        };

        Ok(DeciderOutcome {
            target: resolution.target,
            transition,
        })
    }
}
