use serde::{Deserialize, Serialize};

use crate::compute::executor::run_batch;
use crate::compute::task::CalculationResult;
use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum ClientMessage {
    Ping,
    Calculate {
        numbers: Vec<i64>,
        delays: Vec<f64>,
    },
}

#[derive(Debug, Serialize)]
pub enum ServerResponse {
    Pong,
    CalculateResult {
        results: Vec<CalculationResult>,
        total_time: f64,
        parallel_faster_than_sequential: bool,
    },
    Error {
        message: AppError,
    },
}

pub async fn handle_message(msg: ClientMessage) -> ServerResponse {
    match msg {
        ClientMessage::Ping => ServerResponse::Pong,

        ClientMessage::Calculate { numbers, delays } => {
            match run_batch(&numbers, &delays).await {
                Ok(outcome) => ServerResponse::CalculateResult {
                    results: outcome.results,
                    total_time: outcome.total_time,
                    parallel_faster_than_sequential: outcome.parallel_faster_than_sequential,
                },
                Err(err) => ServerResponse::Error { message: err },
            }
        }
    }
}

pub fn deserialize_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn serialize_response(response: &ServerResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string(response)
}
