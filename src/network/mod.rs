pub mod messages;
pub mod websocket_server;

pub use websocket_server::WebsocketServer;
