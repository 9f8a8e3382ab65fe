pub mod compute;
pub mod errors;
pub mod network;

// Re-export commonly used items for convenience
pub use compute::comparator::parallel_faster;
pub use compute::executor::{run_batch, BatchOutcome};
pub use compute::task::{calculate_square, CalculationResult};
pub use errors::{AppError, AppResult};
