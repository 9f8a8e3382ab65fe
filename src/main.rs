use async_squares::network::WebsocketServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Starting Async Squares Server...");
    let server = WebsocketServer::new("127.0.0.1:8080");
    server.run().await?;
    Ok(())
}
