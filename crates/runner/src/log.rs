use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Initializes the `tracing` logger at `level`.
pub fn init_logger(level: Level) {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Log level: {level}");
}
