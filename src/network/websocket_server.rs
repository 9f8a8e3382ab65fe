use futures_util::{SinkExt, StreamExt};
use std::error::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use uuid::Uuid;

use crate::errors::AppError;
use crate::network::messages::{
    deserialize_message, handle_message, serialize_response, ServerResponse,
};

pub struct WebsocketServer {
    address: String,
}

impl WebsocketServer {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error>> {
        let listener = TcpListener::bind(&self.address).await?;
        println!("🌐 Async Squares server listening on {}", self.address);

        while let Ok((stream, addr)) = listener.accept().await {
            let connection_id = Uuid::new_v4().to_string();
            println!("🔗 New connection {} from {}", connection_id, addr);

            // Each connection gets its own task; requests share no state.
            tokio::spawn(async move {
                if let Err(e) = Self::handle_connection(stream, connection_id).await {
                    eprintln!("❌ Error handling connection: {}", e);
                }
            });
        }

        Ok(())
    }

    async fn handle_connection(
        stream: TcpStream,
        connection_id: String,
    ) -> Result<(), Box<dyn Error>> {
        let ws_stream = accept_async(stream).await?;
        println!("✅ WebSocket connection {} established", connection_id);

        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        while let Some(msg) = ws_receiver.next().await {
            match msg? {
                Message::Text(text) => {
                    let response = match deserialize_message(&text) {
                        Ok(client_message) => handle_message(client_message).await,
                        Err(parse_error) => {
                            eprintln!(
                                "❌ Failed to parse message on {}: {}",
                                connection_id, parse_error
                            );
                            ServerResponse::Error {
                                message: AppError::UnknownMessage {
                                    message: parse_error.to_string(),
                                },
                            }
                        }
                    };

                    match serialize_response(&response) {
                        Ok(json) => {
                            ws_sender.send(Message::Text(json)).await?;
                        }
                        Err(err) => {
                            eprintln!("❌ Failed to serialize response: {}", err);
                            // Fallback error if even error serialization fails
                            let fallback = format!(
                                "{{\"Error\":{{\"message\":\"Failed to serialize response: {}\"}}}}",
                                err
                            );
                            ws_sender.send(Message::Text(fallback)).await?;
                        }
                    }
                }
                Message::Ping(data) => {
                    ws_sender.send(Message::Pong(data)).await?;
                }
                Message::Close(_) => {
                    println!("👋 Connection {} requested close", connection_id);
                    break;
                }
                _ => {
                    // Binary, pong, and raw frames are ignored
                }
            }
        }

        println!("📴 Connection {} closed", connection_id);
        Ok(())
    }
}
