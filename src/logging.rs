use tracing::{info, Level};

/// Installs the stderr subscriber. Each `-v` raises the level one step from `warn`.
pub fn setup_logging(verbosity: u8) {
  let level = match verbosity {
    0 => Level::WARN,
    1 => Level::INFO,
    2 => Level::DEBUG,
    _ => Level::TRACE,
  };
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(level)
    .init();
  info!("logging initialized at {}", level);
}
