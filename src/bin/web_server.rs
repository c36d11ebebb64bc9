use sap_graph::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [static-dir]
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        static_dir: args.get(2).cloned(),
        ..Default::default()
    };

    println!("Starting SAP Web Server...");
    println!("  Port: {}", config.port);
    println!("  Static files: {}", config.static_dir.as_deref().unwrap_or("(none)"));
    println!("  CORS enabled: {}", config.enable_cors);
    println!("  Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
