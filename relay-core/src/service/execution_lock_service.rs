use relay_common::prelude::*;

use crate::config::Properties;
use crate::metrics::Monitors;
use crate::runtime::Lock;

pub struct ExecutionLockService {
    lock: Lock,
    enabled: bool,
    time_to_try_ms: i64,
    lease_time_ms: i64,
}

/// Releases the lock when dropped.
pub struct ExecutionLockGuard<'a> {
    lock: &'a Lock,
    lock_id: InlineStr,
    token: Option<u64>,
}

impl ExecutionLockService {
    pub fn new(properties: &Properties) -> Self {
        Self {
            lock: Lock::new(),
            enabled: properties.execution_lock_enabled,
            time_to_try_ms: properties.lock_time_to_try_ms,
            lease_time_ms: properties.lock_lease_time_ms,
        }
    }

    /// Tries to acquire lock with the configured time to try and lease time. A transition that
    /// cannot get the lock of its work order in time fails with `Conflict` instead of waiting
    /// any longer.
    pub fn acquire_lock(&self, lock_id: &InlineStr) -> RelayResult<ExecutionLockGuard<'_>> {
        self.acquire_lock_try_and_lease_time(lock_id, self.time_to_try_ms, self.lease_time_ms)
    }

    pub fn acquire_lock_try_and_lease_time(
        &self,
        lock_id: &InlineStr,
        time_to_try_ms: i64,
        lease_time_ms: i64,
    ) -> RelayResult<ExecutionLockGuard<'_>> {
        let mut guard = ExecutionLockGuard {
            lock: &self.lock,
            lock_id: lock_id.clone(),
            token: None,
        };
        if !self.enabled {
            return Ok(guard);
        }

        match self
            .lock
            .acquire_lock_try_and_lease_time(lock_id, time_to_try_ms, lease_time_ms)
        {
            Some(token) => {
                debug!(
                    "Thread {:?} acquired lock to lockId {}.",
                    std::thread::current().id(),
                    lock_id
                );
                guard.token = Some(token);
                Ok(guard)
            }
            None => {
                debug!(
                    "Thread {:?} failed to acquire lock to lockId {}.",
                    std::thread::current().id(),
                    lock_id
                );
                Monitors::record_acquire_lock_unsuccessful();
                fmt_err!(
                    Conflict,
                    "{} is being processed by another transition",
                    lock_id
                )
            }
        }
    }
}

impl<'a> Drop for ExecutionLockGuard<'a> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.lock.release_lock(&self.lock_id, token);
            debug!(
                "Thread {:?} released lock to lockId {}.",
                std::thread::current().id(),
                self.lock_id
            );
        }
    }
}
