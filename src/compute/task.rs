use std::time::Instant;

use serde::Serialize;
use tokio::time::{sleep, Duration};

use crate::errors::{AppError, AppResult};

/// Outcome of one unit of work: the input number, its square, the delay
/// that was simulated, and the measured elapsed time for this unit alone.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub number: i64,
    pub square: i64,
    pub delay: f64,
    pub time: f64,
}

pub fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Sleeps for `delay` seconds to simulate a latency-bound call, then squares
/// `number`. Elapsed time covers the sleep plus the multiply and is reported
/// rounded to two decimals.
pub async fn calculate_square(number: i64, delay: f64) -> AppResult<CalculationResult> {
    if delay < 0.0 {
        return Err(AppError::NegativeDelay { delay });
    }

    let start = Instant::now();
    sleep(Duration::from_secs_f64(delay)).await;
    let square = number
        .checked_mul(number)
        .ok_or(AppError::SquareOverflow { number })?;
    let elapsed = start.elapsed().as_secs_f64();

    Ok(CalculationResult {
        number,
        square,
        delay,
        time: round_to_hundredths(elapsed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_delay_completes_immediately() {
        let result = calculate_square(4, 0.0).await.unwrap();
        assert_eq!(result.number, 4);
        assert_eq!(result.square, 16);
        assert_eq!(result.delay, 0.0);
        assert!(result.time < 0.05, "zero delay should finish in ~0s");
    }

    #[tokio::test]
    async fn test_negative_number_squares_positive() {
        let result = calculate_square(-7, 0.0).await.unwrap();
        assert_eq!(result.square, 49);
    }

    #[tokio::test]
    async fn test_negative_delay_fails_fast() {
        let err = calculate_square(1, -1.0).await.unwrap_err();
        assert!(matches!(err, AppError::NegativeDelay { .. }));
    }

    #[tokio::test]
    async fn test_overflowing_square_is_an_error() {
        let err = calculate_square(i64::MAX, 0.0).await.unwrap_err();
        assert!(matches!(err, AppError::SquareOverflow { number: i64::MAX }));
    }

    #[tokio::test]
    async fn test_elapsed_time_tracks_delay() {
        let result = calculate_square(2, 0.1).await.unwrap();
        assert!(result.time >= 0.1, "elapsed {} below delay", result.time);
        assert!(result.time < 0.3, "elapsed {} way above delay", result.time);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(1.004), 1.0);
        assert_eq!(round_to_hundredths(1.006), 1.01);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }
}
