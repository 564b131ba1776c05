use crate::prelude::*;

/// The authenticated user acting on a work order, valid for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: i64,
    pub nick_name: InlineStr,
}

impl CallerIdentity {
    pub fn new(user_id: i64, nick_name: impl Into<InlineStr>) -> Self {
        Self {
            user_id,
            nick_name: nick_name.into(),
        }
    }
}
