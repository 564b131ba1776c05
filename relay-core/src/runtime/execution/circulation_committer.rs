use relay_common::prelude::*;

use super::resolver::StateTransition;
use crate::dao::{Transaction, WorkOrderUpdate};
use crate::model::{ActiveState, WorkOrder};

/// Writes the new active states and related persons of a work order.
pub struct CirculationCommitter;

impl CirculationCommitter {
    /// Active states after `transition` leaves `source_id`; `None` when nothing moves.
    pub fn next_states(
        current: &[ActiveState],
        source_id: &str,
        transition: &StateTransition,
    ) -> Option<Vec<ActiveState>> {
        match transition {
            StateTransition::Advance(entries) => {
                let mut next: Vec<ActiveState> = Vec::with_capacity(current.len() + entries.len());
                let mut push = |state: &ActiveState| {
                    if !next.iter().any(|x| x.id == state.id) {
                        next.push(state.clone());
                    }
                };

                let mut replaced = false;
                for state in current {
                    if !replaced && state.id == source_id {
                        entries.iter().for_each(&mut push);
                        replaced = true;
                    } else if state.id != source_id {
                        push(state);
                    }
                }
                if !replaced {
                    entries.iter().for_each(&mut push);
                }
                Some(next)
            }
            StateTransition::Converge(state) => Some(vec![state.clone()]),
            StateTransition::Hold => None,
        }
    }

    /// Every transition writes through the version read at load time, a deferred one only
    /// checks it.
    pub fn commit(
        tx: &mut Transaction,
        work_order: &WorkOrder,
        next_states: Option<&[ActiveState]>,
        caller: i64,
    ) -> RelayResult<()> {
        let update = match next_states {
            Some(states) => WorkOrderUpdate {
                state: Some(serde_json::to_string(states)?),
                related_person: Some(serde_json::to_string(
                    &work_order.related_person_with(caller),
                )?),
            },
            None => WorkOrderUpdate::default(),
        };
        tx.update_work_order(work_order.id, work_order.version, update)
    }
}
