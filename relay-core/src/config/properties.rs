use relay_common::prelude::*;
use relay_common::{EnvUtils, SystemParameters};
use strum_macros::{AsRefStr, EnumString};

/// Language of the texts written into the circulation history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}

#[derive(Clone, Debug)]
pub struct Properties {
    /// Serializes transitions of one work order inside this process.
    pub execution_lock_enabled: bool,
    /// How long a transition waits for the work order lock before giving up.
    /// MILLISECONDS
    pub lock_time_to_try_ms: i64,
    /// A lock not released within its lease can be taken by another transition.
    /// MILLISECONDS
    pub lock_lease_time_ms: i64,
    pub locale: Locale,
    /// Used to enable/disable triggering node tasks after a transition commits.
    pub task_dispatch_enabled: bool,
}

impl Properties {
    /// Defaults overridden by the `RELAY_*` environment variables.
    pub fn from_env() -> RelayResult<Self> {
        let mut properties = Properties::default();
        if let Some(v) =
            EnvUtils::parse_system_parameter(SystemParameters::RelayExecutionLockEnabled)?
        {
            properties.execution_lock_enabled = v;
        }
        if let Some(v) = EnvUtils::parse_system_parameter(SystemParameters::RelayLockTimeToTryMs)? {
            properties.lock_time_to_try_ms = v;
        }
        if let Some(v) = EnvUtils::parse_system_parameter(SystemParameters::RelayLockLeaseTimeMs)? {
            properties.lock_lease_time_ms = v;
        }
        if let Some(v) = EnvUtils::parse_system_parameter(SystemParameters::RelayLocale)? {
            properties.locale = v;
        }
        if let Some(v) =
            EnvUtils::parse_system_parameter(SystemParameters::RelayTaskDispatchEnabled)?
        {
            properties.task_dispatch_enabled = v;
        }
        debug!("properties loaded: {:?}", properties);
        Ok(properties)
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            execution_lock_enabled: true,
            lock_time_to_try_ms: 500,
            lock_lease_time_ms: 60 * 1000, // 60s
            locale: Locale::En,
            task_dispatch_enabled: true,
        }
    }
}
