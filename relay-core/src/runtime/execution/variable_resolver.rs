use relay_common::prelude::*;

use crate::model::{ActiveState, ProcessMethod};
use crate::runtime::WorkOrderDaoFacade;

/// Replaces the placeholders of `variable` states with concrete users.
pub struct VariableResolver;

impl VariableResolver {
    pub const CREATOR: i64 = 1;
    pub const CREATOR_DEPARTMENT_LEADER: i64 = 2;

    pub fn resolve(
        states: &mut [ActiveState],
        creator: i64,
        facade: &WorkOrderDaoFacade,
    ) -> RelayResult<()> {
        let mut leader = None;
        for state in states.iter_mut().filter(|x| x.is_variable()) {
            let mut processor = Vec::with_capacity(state.processor.len());
            for value in &state.processor {
                let user_id = match *value {
                    Self::CREATOR => creator,
                    Self::CREATOR_DEPARTMENT_LEADER => match leader {
                        Some(leader) => leader,
                        None => *leader.insert(facade.get_department_leader(creator)?),
                    },
                    other => other,
                };
                processor.push(user_id);
            }

            debug!(
                "state {} variables {:?} resolved to {:?}",
                state.id, state.processor, processor
            );
            state.processor = processor;
            state.process_method = ProcessMethod::PERSON.into();
        }
        Ok(())
    }
}
