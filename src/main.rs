use anyhow::Result;
use dotenv::dotenv;
use habsync::commands::Cli;
use habsync::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may come from a .env file next to the scheduler entry
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    Cli::menu().await
}
