use relay_common::prelude::*;
use relay_common::Condition;

use crate::model::FormData;

/// Evaluates one edge clause against the submitted form data.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    pub fn evaluate(condition: &Condition, form_data: &FormData) -> RelayResult<bool> {
        let value = form_data
            .lookup(&condition.key)
            .filter(|x| !x.is_null())
            .ok_or_else(|| {
                ErrorCode::MissingField(format!("form data has no field {}", condition.key))
            })?;

        let ordering = match (value, &condition.value) {
            (Object::String(left), Object::String(right)) => {
                Some(left.as_str().cmp(right.as_str()))
            }
            (left, right) if left.is_numeric() && right.is_numeric() => {
                // exact floating point comparison, no epsilon
                left.as_f64()?.partial_cmp(&right.as_f64()?)
            }
            (left, right) if left.is_numeric() || matches!(left, Object::String(_)) => {
                return fmt_err!(
                    UnsupportedType,
                    "field {} is a {} and cannot be compared with a {}",
                    condition.key,
                    left.type_name(),
                    right.type_name()
                );
            }
            (left, _) => {
                return fmt_err!(
                    UnsupportedType,
                    "field {} is a {}, only string and number are comparable",
                    condition.key,
                    left.type_name()
                );
            }
        };

        let result = condition.operator.accepts(ordering);
        debug!(
            "condition {} {} {:?} against {:?}: {}",
            condition.key,
            condition.operator.as_ref(),
            condition.value,
            value,
            result
        );
        Ok(result)
    }
}
