//! logging.rs
use log::LevelFilter;

/// Install the stderr logger once. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();

    // Level and message only; user-facing output goes through stdout/stderr directly.
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });

    let _ = builder.try_init();
}
