use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize)]
pub enum AppError {
    // Validation errors
    #[error("Input lengths differ: {numbers_len} numbers vs {delays_len} delays")]
    LengthMismatch {
        numbers_len: usize,
        delays_len: usize,
    },

    #[error("Delay cannot be negative: {delay}")]
    NegativeDelay { delay: f64 },

    // Batch errors
    #[error("Squaring {number} overflows a 64-bit integer")]
    SquareOverflow { number: i64 },

    #[error("Worker task panicked: {reason}")]
    TaskPanicked { reason: String },

    // Serialization errors
    #[error("Failed to serialize response: {message}")]
    SerializationError { message: String },

    #[error("WebSocket error: {message}")]
    WebSocketError { message: String },

    #[error("Unknown message: {message}")]
    UnknownMessage { message: String },
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy)]
pub enum ErrorCategory {
    ClientError,
    ServerError,
    ValidationError,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::LengthMismatch { .. } | AppError::NegativeDelay { .. } => {
                ErrorCategory::ValidationError
            }

            AppError::SquareOverflow { .. } | AppError::UnknownMessage { .. } => {
                ErrorCategory::ClientError
            }

            AppError::TaskPanicked { .. }
            | AppError::SerializationError { .. }
            | AppError::WebSocketError { .. } => ErrorCategory::ServerError,
        }
    }

    pub fn should_log(&self) -> bool {
        matches!(self.category(), ErrorCategory::ServerError)
    }

    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::ClientError => 400,
            ErrorCategory::ValidationError => 422,
            ErrorCategory::ServerError => 500,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            AppError::LengthMismatch { .. } => "LengthMismatch",
            AppError::NegativeDelay { .. } => "NegativeDelay",
            AppError::SquareOverflow { .. } => "SquareOverflow",
            AppError::TaskPanicked { .. } => "TaskPanicked",
            AppError::SerializationError { .. } => "SerializationError",
            AppError::WebSocketError { .. } => "WebSocketError",
            AppError::UnknownMessage { .. } => "UnknownMessage",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::LengthMismatch {
                numbers_len,
                delays_len,
            } => format!(
                "Every number needs a delay: got {} numbers and {} delays",
                numbers_len, delays_len
            ),
            AppError::SerializationError { .. } => "Invalid message format".to_string(),
            AppError::TaskPanicked { .. } => "Internal server error".to_string(),
            _ => self.to_string(), // Use the error's display message
        }
    }
}

pub mod validation {
    use super::AppError;

    pub fn validate_batch(numbers: &[i64], delays: &[f64]) -> Result<(), AppError> {
        if numbers.len() != delays.len() {
            return Err(AppError::LengthMismatch {
                numbers_len: numbers.len(),
                delays_len: delays.len(),
            });
        }
        if let Some(&delay) = delays.iter().find(|&&d| d < 0.0) {
            return Err(AppError::NegativeDelay { delay });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::validate_batch;
    use super::*;

    #[test]
    fn test_validate_batch_accepts_matching_lengths() {
        assert!(validate_batch(&[1, 2, 3], &[0.1, 0.0, 2.5]).is_ok());
        assert!(validate_batch(&[], &[]).is_ok());
    }

    #[test]
    fn test_validate_batch_rejects_mismatched_lengths() {
        let err = validate_batch(&[1, 2], &[0.1]).unwrap_err();
        assert!(matches!(
            err,
            AppError::LengthMismatch {
                numbers_len: 2,
                delays_len: 1
            }
        ));
    }

    #[test]
    fn test_validate_batch_rejects_negative_delay() {
        let err = validate_batch(&[1, 2], &[0.1, -0.5]).unwrap_err();
        assert!(matches!(err, AppError::NegativeDelay { .. }));
    }

    #[test]
    fn test_error_categories_and_status_codes() {
        let mismatch = AppError::LengthMismatch {
            numbers_len: 1,
            delays_len: 2,
        };
        assert_eq!(mismatch.status_code(), 422);
        assert!(!mismatch.should_log());

        let panic = AppError::TaskPanicked {
            reason: "boom".to_string(),
        };
        assert_eq!(panic.status_code(), 500);
        assert!(panic.should_log());
        assert_eq!(panic.variant_name(), "TaskPanicked");
    }
}
