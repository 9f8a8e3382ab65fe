use std::time::Instant;

use serde::Serialize;

use crate::compute::comparator::parallel_faster;
use crate::compute::task::{calculate_square, round_to_hundredths, CalculationResult};
use crate::errors::{validation, AppError, AppResult};

/// Everything a batch produces: per-item results in input order, the total
/// wall-clock time, and the verdict against the sequential estimate.
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub results: Vec<CalculationResult>,
    pub total_time: f64,
    pub parallel_faster_than_sequential: bool,
}

/// Fans one task out per (number, delay) pair and gathers the results.
///
/// Validation happens before anything is spawned: mismatched lengths or a
/// negative delay abort the batch without awaiting a single delay. All tasks
/// are spawned before any is awaited, so their delays overlap and the batch
/// finishes in roughly max(delays) rather than sum(delays). Join handles are
/// awaited in spawn order, which keeps the output positionally aligned with
/// the input no matter which task finished first.
///
/// On the first unit error the whole batch fails with no partial results;
/// sibling tasks are detached and run to completion on the runtime.
pub async fn run_batch(numbers: &[i64], delays: &[f64]) -> AppResult<BatchOutcome> {
    validation::validate_batch(numbers, delays)?;

    let start_total = Instant::now();

    let mut handles = Vec::with_capacity(numbers.len());
    for (&number, &delay) in numbers.iter().zip(delays.iter()) {
        handles.push(tokio::spawn(calculate_square(number, delay)));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(Ok(result)) => results.push(result),
            Ok(Err(err)) => return Err(err),
            Err(join_error) => {
                return Err(AppError::TaskPanicked {
                    reason: join_error.to_string(),
                })
            }
        }
    }

    let total_time = round_to_hundredths(start_total.elapsed().as_secs_f64());
    let parallel_faster_than_sequential = parallel_faster(total_time, delays);

    Ok(BatchOutcome {
        results,
        total_time,
        parallel_faster_than_sequential,
    })
}
