use super::Condition;
use crate::prelude::*;

/// Which end of an edge a node is looked up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Edges leaving the node.
    AsSource,
    /// Edges entering the node.
    AsTarget,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: InlineStr,
    pub source: InlineStr,
    pub target: InlineStr,
    /// Clauses are OR-ed; an edge without clause never matches an exclusive gateway.
    pub conditions: Vec<Condition>,
}

impl TryFrom<&serde_json::Value> for Edge {
    type Error = ErrorCode;
    fn try_from(value: &serde_json::Value) -> Result<Self, ErrorCode> {
        let endpoint = |name: &str| -> RelayResult<InlineStr> {
            Ok(value
                .get(name)
                .and_then(|x| x.as_str())
                .ok_or_else(|| ErrorCode::Deserialization(format!("Edge: {} not found", name)))?
                .trim()
                .into())
        };

        Ok(Self {
            id: value
                .get("id")
                .and_then(|x| x.as_str())
                .unwrap_or("")
                .trim()
                .into(),
            source: endpoint("source")?,
            target: endpoint("target")?,
            conditions: Condition::try_from_expression(value.get("conditionExpression"))?,
        })
    }
}
