use chrono::{DateTime, Utc};
use relay_common::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only audit record of one transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CirculationHistory {
    /// Assigned by the store on insert.
    pub id: i64,
    pub work_order_id: i64,
    pub title: InlineStr,
    /// Label of the node that was left.
    pub state: InlineStr,
    pub source: InlineStr,
    /// Empty for the terminal record.
    pub target: InlineStr,
    /// Comment of the processor.
    pub circulation: InlineStr,
    pub processor: InlineStr,
    pub processor_id: i64,
    pub cost_duration: InlineStr,
    /// Recorded while the work order waited for other processors or branches, the active states
    /// did not move.
    #[serde(default)]
    pub held: bool,
    pub created_at: DateTime<Utc>,
}
