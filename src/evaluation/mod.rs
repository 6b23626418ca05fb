pub mod evaluator;
pub mod metrics;

pub use evaluator::FitnessEvaluator;
pub use metrics::{ClusteringMetrics, SENTINEL};
