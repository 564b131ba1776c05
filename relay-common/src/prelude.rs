#[rustfmt::skip]
pub use crate::exception::{ErrorCode, RelayResult};
pub use crate::{fmt_err, str_err};

#[rustfmt::skip]
// std
pub use std::cmp::Ordering;
pub use std::collections::{BTreeMap, HashMap, HashSet};
pub use std::ops::ControlFlow;
pub use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering as AtomicOrdering};
pub use std::sync::Arc;

#[rustfmt::skip]
pub type InlineStr = smartstring::SmartString<smartstring::Compact>;
pub use once_cell::sync::{Lazy, OnceCell};
pub use parking_lot::{Mutex, RwLock};

#[rustfmt::skip]
pub use log::{debug, error, info, log_enabled, trace, warn, LevelFilter};

#[rustfmt::skip]
pub use crate::common::Object;
