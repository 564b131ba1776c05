use relay_common::prelude::*;
use relay_common::Node;

use crate::model::{ActiveState, CirculationHistory};

/// Unanimous action of the processors of a countersign node.
pub struct CountersignAggregator;

impl CountersignAggregator {
    /// Countersign is configured on the node being left and needs several processors in the
    /// snapshot taken when the node became active.
    pub fn applies(source: &Node, state: &ActiveState) -> bool {
        source
            .assignment()
            .map(|x| x.requires_countersign())
            .unwrap_or(false)
            && state.processor.len() > 1
    }

    /// Whether the caller's action is the last one missing on `state`.
    ///
    /// History is scanned newest first and the scan stops at the first record left from a node
    /// that is no longer active, which marks the entry into the current round.
    pub fn is_complete(
        active_states: &[ActiveState],
        history: &[CirculationHistory],
        state: &ActiveState,
        caller: i64,
    ) -> bool {
        let processors = state.processor.iter().copied().collect::<HashSet<_>>();
        if !processors.contains(&caller) {
            debug!(
                "user {} is not a processor of countersign state {}",
                caller, state.id
            );
            return false;
        }

        let mut acted = HashSet::new();
        for entry in history {
            if !active_states.iter().any(|x| x.id == entry.source) {
                break;
            }
            if entry.source == state.id
                && entry.processor_id != caller
                && processors.contains(&entry.processor_id)
            {
                acted.insert(entry.processor_id);
            }
        }

        debug!(
            "countersign of {}: {} of {} other processors acted",
            state.id,
            acted.len(),
            processors.len() - 1
        );
        acted.len() == processors.len() - 1
    }
}
