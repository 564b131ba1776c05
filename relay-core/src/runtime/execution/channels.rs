use crossbeam_channel::{Receiver, Sender};
use relay_common::prelude::*;

use crate::runtime::event::TaskDispatchEvent;

/// Process wide queue between committed transitions and the task workers.
pub static TASK_DISPATCH_CHANNEL: Lazy<(Sender<TaskDispatchEvent>, Receiver<TaskDispatchEvent>)> =
    Lazy::new(crossbeam_channel::unbounded);
