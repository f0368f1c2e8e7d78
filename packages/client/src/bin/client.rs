//! Chat room client.
//!
//! Connects to a roomchat server, joins a room and sends lines typed at the
//! prompt. Messages broadcast to the room are printed as `<username>: <msg>`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomchat-client -- --username alice --room lobby
//! cargo run --bin roomchat-client -- -u ws://127.0.0.1:5000/ws
//! ```

use clap::Parser;

use roomchat_client::{ClientConfig, run_client};
use roomchat_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "roomchat-client")]
#[command(about = "Chat room client: join a room and exchange messages", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:5000/ws")]
    url: String,

    /// Username to pre-fill in the join form
    #[arg(short = 'n', long)]
    username: Option<String>,

    /// Room to pre-fill in the join form (joins immediately together with --username)
    #[arg(short = 'r', long)]
    room: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let config = ClientConfig {
        url: args.url,
        username: args.username,
        room: args.room,
    };

    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
