mod channels;
mod evaluators;
mod resolver;

mod circulation_committer;
mod circulation_executor;
mod countersign_aggregator;
mod decider_service;
mod duration_tracker;
mod history_recorder;
mod parallel_join_barrier;
mod task_dispatcher;
mod variable_resolver;

pub use channels::TASK_DISPATCH_CHANNEL;
pub use circulation_committer::CirculationCommitter;
pub use circulation_executor::CirculationExecutor;
pub use countersign_aggregator::CountersignAggregator;
pub use decider_service::DeciderService;
pub use duration_tracker::DurationTracker;
pub use evaluators::ConditionEvaluator;
pub use history_recorder::HistoryRecorder;
pub use parallel_join_barrier::ParallelJoinBarrier;
pub use task_dispatcher::{ChannelTaskQueue, TaskDispatcher, TaskQueue};
pub use variable_resolver::VariableResolver;
