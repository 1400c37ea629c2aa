use pricebook::commands::Cli;
use pricebook::libs::messages::macros::is_debug_mode;
use pricebook::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pricebook=debug")))
            .init();
    }

    if let Err(e) = Cli::menu().await {
        msg_error!(e);
        std::process::exit(1);
    }
}
