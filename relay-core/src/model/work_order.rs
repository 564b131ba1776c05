use chrono::{DateTime, Utc};
use relay_common::prelude::*;

use super::ActiveState;
use crate::dao::WorkOrderRecord;

/// Decoded work order aggregate.
#[derive(Clone, Debug)]
pub struct WorkOrder {
    pub id: i64,
    pub title: InlineStr,
    pub process_id: i64,
    pub creator: i64,
    pub related_person: Vec<i64>,
    pub active_states: Vec<ActiveState>,
    pub is_end: bool,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl WorkOrder {
    pub fn active_state(&self, state_id: &str) -> Option<&ActiveState> {
        self.active_states.iter().find(|x| x.id.eq(state_id))
    }

    pub fn is_active(&self, state_id: &str) -> bool {
        self.active_state(state_id).is_some()
    }

    /// Related persons with `user_id` appended once.
    pub fn related_person_with(&self, user_id: i64) -> Vec<i64> {
        let mut related_person = self.related_person.clone();
        if !related_person.contains(&user_id) {
            related_person.push(user_id);
        }
        related_person
    }

    fn decode_list<T: serde::de::DeserializeOwned>(
        work_order_id: i64,
        column: &str,
        text: &str,
    ) -> RelayResult<Vec<T>> {
        if text.trim().is_empty() {
            return Ok(Vec::default());
        }
        serde_json::from_str::<Option<Vec<T>>>(text)
            .map(|x| x.unwrap_or_default())
            .map_err(|e| {
                ErrorCode::Deserialization(format!(
                    "work order {}: {} invalid, {}",
                    work_order_id, column, e
                ))
            })
    }
}

impl TryFrom<WorkOrderRecord> for WorkOrder {
    type Error = ErrorCode;
    fn try_from(record: WorkOrderRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            related_person: Self::decode_list(record.id, "related_person", &record.related_person)?,
            active_states: Self::decode_list(record.id, "state", &record.state)?,
            id: record.id,
            title: record.title,
            process_id: record.process_id,
            creator: record.creator,
            is_end: record.is_end,
            version: record.version,
            created_at: record.created_at,
        })
    }
}
