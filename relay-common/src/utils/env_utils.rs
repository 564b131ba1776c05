use std::env;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::prelude::*;

pub struct EnvUtils;

impl EnvUtils {
    pub fn is_environment_variable(test: &str) -> bool {
        for c in SystemParameters::iter() {
            if c.as_ref().eq(test) {
                return true;
            }
        }

        env::vars().any(|(k, _)| k.eq(test))
    }

    pub fn get_system_parameters_value(sys_param: SystemParameters) -> Option<InlineStr> {
        env::var(sys_param.as_ref())
            .ok()
            .map(|v| v.trim().into())
            .filter(|v: &InlineStr| !v.is_empty())
    }

    /// Reads and parses a parameter; unset means `None`, an unparsable value is an error.
    pub fn parse_system_parameter<T: FromStr>(
        sys_param: SystemParameters,
    ) -> RelayResult<Option<T>> {
        match Self::get_system_parameters_value(sys_param) {
            None => Ok(None),
            Some(v) => v.parse::<T>().map(Some).map_err(|_| {
                ErrorCode::IllegalArgument(format!("{} invalid: {}", sys_param.as_ref(), v))
            }),
        }
    }
}

/// Environment variables read by the engine configuration.
#[derive(Clone, Copy, Debug, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemParameters {
    RelayExecutionLockEnabled,
    RelayLockTimeToTryMs,
    RelayLockLeaseTimeMs,
    RelayLocale,
    RelayTaskDispatchEnabled,
}
