use anyhow::Result;
use tudu::commands::Cli;

fn main() -> Result<()> {
    // Route messages through tracing only when the user asked for it;
    // normal runs print plain console output.
    if std::env::var("TUDU_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
