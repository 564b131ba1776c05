use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
pub enum ConditionOperator {
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Le,
}

impl ConditionOperator {
    pub fn of(sign: &str) -> RelayResult<ConditionOperator> {
        ConditionOperator::from_str(sign.trim()).map_err(|_| {
            ErrorCode::UnsupportedOperator(format!(
                "unsupported operator {}, only ==, !=, >, >=, <, <= are supported",
                sign
            ))
        })
    }

    /// Applies the operator to an already computed ordering of `form value` against `literal`.
    /// `None` (incomparable floats, i.e. NaN) only satisfies `!=`.
    pub fn accepts(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (ConditionOperator::Ne, None) => true,
            (_, None) => false,
            (ConditionOperator::Eq, Some(o)) => o == Ordering::Equal,
            (ConditionOperator::Ne, Some(o)) => o != Ordering::Equal,
            (ConditionOperator::Gt, Some(o)) => o == Ordering::Greater,
            (ConditionOperator::Ge, Some(o)) => o != Ordering::Less,
            (ConditionOperator::Lt, Some(o)) => o == Ordering::Less,
            (ConditionOperator::Le, Some(o)) => o != Ordering::Greater,
        }
    }
}

/// One comparison clause of an edge: `<form field> <operator> <literal>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub key: InlineStr,
    pub operator: ConditionOperator,
    pub value: Object,
}

impl Condition {
    pub fn new(key: impl Into<InlineStr>, operator: ConditionOperator, value: Object) -> Self {
        Self {
            key: key.into(),
            operator,
            value,
        }
    }

    /// Parses an edge's `conditionExpression`, stored either as a JSON array or as a string
    /// holding one. Absent, null and empty values yield no clause.
    pub fn try_from_expression(expression: Option<&serde_json::Value>) -> RelayResult<Vec<Self>> {
        let parsed;
        let clauses = match expression {
            None | Some(serde_json::Value::Null) => return Ok(Vec::default()),
            Some(serde_json::Value::String(s)) if s.trim().is_empty() => {
                return Ok(Vec::default())
            }
            Some(serde_json::Value::String(s)) => {
                parsed = serde_json::from_str::<serde_json::Value>(s)?;
                &parsed
            }
            Some(v) => v,
        };

        clauses
            .as_array()
            .ok_or_else(|| ErrorCode::Deserialization("conditionExpression not a array"))?
            .iter()
            .map(Condition::try_from)
            .collect()
    }
}

impl TryFrom<&serde_json::Value> for Condition {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, ErrorCode> {
        Ok(Self {
            key: value
                .get("key")
                .and_then(|x| x.as_str())
                .ok_or_else(|| ErrorCode::Deserialization("Condition: key not found"))?
                .trim()
                .into(),
            operator: ConditionOperator::of(
                value
                    .get("sign")
                    .and_then(|x| x.as_str())
                    .ok_or_else(|| ErrorCode::Deserialization("Condition: sign not found"))?,
            )?,
            value: Object::from_json(value.get("value").unwrap_or(&serde_json::Value::Null)),
        })
    }
}
