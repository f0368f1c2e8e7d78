//! Chat room relay server.
//!
//! Connections join named rooms with a `join` event; `send_message` events are
//! broadcast to every connection in the room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-server
//! cargo run --bin roomchat-server -- --host 0.0.0.0 --port 3000
//! ```

use clap::Parser;

use roomchat_server::ui::Server;
use roomchat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "roomchat-server")]
#[command(about = "Chat room relay server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let server = Server::in_memory();
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
