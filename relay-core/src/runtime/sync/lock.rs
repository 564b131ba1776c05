use std::time::Duration;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use relay_common::prelude::*;

struct Lease {
    token: u64,
    expires_at_ms: i64,
}

/// In-process lease lock. A lease not released in time can be taken over.
#[derive(Default)]
pub struct Lock {
    leases: DashMap<InlineStr, Lease>,
    next_token: AtomicUsize,
}

impl Lock {
    const RETRY_INTERVAL_MS: u64 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the token identifying the holder, `None` when the lock is still held by someone
    /// else after `time_to_try_ms`.
    pub fn acquire_lock_try_and_lease_time(
        &self,
        lock_id: &InlineStr,
        time_to_try_ms: i64,
        lease_time_ms: i64,
    ) -> Option<u64> {
        let token = self.next_token.fetch_add(1, AtomicOrdering::Relaxed) as u64;
        let deadline = Utc::now().timestamp_millis() + time_to_try_ms.max(0);

        loop {
            let now = Utc::now().timestamp_millis();
            let lease = Lease {
                token,
                expires_at_ms: now + lease_time_ms,
            };
            let acquired = match self.leases.entry(lock_id.clone()) {
                Entry::Occupied(mut entry) => {
                    if entry.get().expires_at_ms <= now {
                        debug!("lease of lock {} expired, taking it over", lock_id);
                        entry.insert(lease);
                        true
                    } else {
                        false
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(lease);
                    true
                }
            };

            if acquired {
                return Some(token);
            }
            if now >= deadline {
                return None;
            }
            std::thread::sleep(Duration::from_millis(Self::RETRY_INTERVAL_MS));
        }
    }

    /// Only the holder identified by `token` releases, a lease taken over stays.
    pub fn release_lock(&self, lock_id: &InlineStr, token: u64) {
        self.leases.remove_if(lock_id, |_, lease| lease.token == token);
    }

    pub fn is_locked(&self, lock_id: &InlineStr) -> bool {
        self.leases
            .get(lock_id)
            .map(|x| x.expires_at_ms > Utc::now().timestamp_millis())
            .unwrap_or(false)
    }
}
