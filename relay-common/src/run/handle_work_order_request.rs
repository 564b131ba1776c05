use crate::prelude::*;

/// The path a transition was submitted on, stored as `flowProperties` on the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Sent back: the caller-supplied target is committed as is.
    Reject,
    Approve,
    Other,
}

impl TryFrom<i64> for FlowOutcome {
    type Error = ErrorCode;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FlowOutcome::Reject),
            1 => Ok(FlowOutcome::Approve),
            2 => Ok(FlowOutcome::Other),
            _ => fmt_err!(IllegalArgument, "flow_properties invalid: {}", value),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HandleWorkOrderRequest {
    pub work_order_id: i64,
    /// Tasks to trigger after the transition, on top of the ones the source node declares.
    pub tasks: Vec<InlineStr>,
    /// Node the caller wants to move to, possibly a gateway.
    pub target_state: InlineStr,
    /// Active node the caller is acting on.
    pub source_state: InlineStr,
    /// Comment recorded in the circulation history.
    pub circulation: InlineStr,
    pub flow_outcome: FlowOutcome,
}

impl HandleWorkOrderRequest {
    pub fn new(
        work_order_id: i64,
        source_state: impl Into<InlineStr>,
        target_state: impl Into<InlineStr>,
        flow_outcome: FlowOutcome,
    ) -> Self {
        Self {
            work_order_id,
            tasks: Vec::default(),
            target_state: target_state.into(),
            source_state: source_state.into(),
            circulation: InlineStr::default(),
            flow_outcome,
        }
    }

    pub fn with_circulation(mut self, circulation: impl Into<InlineStr>) -> Self {
        self.circulation = circulation.into();
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<InlineStr>) -> Self {
        self.tasks = tasks;
        self
    }
}

impl TryFrom<serde_json::Value> for HandleWorkOrderRequest {
    type Error = ErrorCode;
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let tasks = if let Some(json) = value.get("tasks").filter(|x| !x.is_null()) {
            let mut tasks = Vec::default();
            for task in json
                .as_array()
                .ok_or_else(|| ErrorCode::IllegalArgument("tasks invalid, not a array"))?
            {
                if let Some(task) = task.as_str() {
                    tasks.push(task.trim().into());
                } else {
                    return str_err!(IllegalArgument, "tasks invalid, not a string in array");
                }
            }
            tasks
        } else {
            Vec::default()
        };

        let state = |name: &str| -> RelayResult<InlineStr> {
            let state = value
                .get(name)
                .and_then(|x| x.as_str())
                .map(|x| x.trim())
                .unwrap_or("");
            if state.is_empty() {
                fmt_err!(IllegalArgument, "{} not found", name)
            } else {
                Ok(state.into())
            }
        };

        Ok(Self {
            work_order_id: value
                .get("work_order_id")
                .and_then(|x| x.as_i64())
                .ok_or_else(|| ErrorCode::IllegalArgument("work_order_id not found"))?,
            tasks,
            target_state: state("target_state")?,
            source_state: state("source_state")?,
            circulation: value
                .get("circulation")
                .and_then(|x| x.as_str())
                .unwrap_or("")
                .into(),
            flow_outcome: FlowOutcome::try_from(
                value
                    .get("flow_properties")
                    .and_then(|x| x.as_i64())
                    .ok_or_else(|| ErrorCode::IllegalArgument("flow_properties not found"))?,
            )?,
        })
    }
}
