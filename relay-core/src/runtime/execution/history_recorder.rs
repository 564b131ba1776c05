use chrono::{DateTime, Utc};
use relay_common::prelude::*;
use relay_common::{CallerIdentity, Node};

use crate::config::Locale;
use crate::model::{CirculationHistory, WorkOrder};

/// Builds the audit records of a transition.
pub struct HistoryRecorder;

impl HistoryRecorder {
    pub fn transition_entry(
        work_order: &WorkOrder,
        source: &Node,
        target: &Node,
        caller: &CallerIdentity,
        comment: &InlineStr,
        cost_duration: InlineStr,
        held: bool,
        now: DateTime<Utc>,
    ) -> CirculationHistory {
        CirculationHistory {
            id: 0,
            work_order_id: work_order.id,
            title: work_order.title.clone(),
            state: source.label.clone(),
            source: source.id.clone(),
            target: target.id.clone(),
            circulation: comment.clone(),
            processor: caller.nick_name.clone(),
            processor_id: caller.user_id,
            cost_duration,
            held,
            created_at: now,
        }
    }

    /// Closing record written when the end node is reached, it has no target.
    pub fn terminal_entry(
        work_order: &WorkOrder,
        end: &Node,
        caller: &CallerIdentity,
        locale: Locale,
        now: DateTime<Utc>,
    ) -> CirculationHistory {
        CirculationHistory {
            id: 0,
            work_order_id: work_order.id,
            title: work_order.title.clone(),
            state: end.label.clone(),
            source: end.id.clone(),
            target: InlineStr::default(),
            circulation: Self::terminal_comment(locale).into(),
            processor: caller.nick_name.clone(),
            processor_id: caller.user_id,
            cost_duration: InlineStr::default(),
            held: false,
            created_at: now,
        }
    }

    pub fn terminal_comment(locale: Locale) -> &'static str {
        match locale {
            Locale::En => "ended",
            Locale::Zh => "结束",
        }
    }
}
