//! Solution cost and shift feasibility.

mod evaluator;

pub use evaluator::CostEvaluator;
