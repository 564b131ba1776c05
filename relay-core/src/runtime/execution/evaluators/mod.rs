mod condition_evaluator;

pub use condition_evaluator::ConditionEvaluator;
