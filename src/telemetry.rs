//! Tracing setup for the terminal binary.
//!
//! - `LOG_LEVEL` holds EnvFilter directives (e.g. "warn" or
//!   "info,session=debug"). Defaults to quiet output so logs don't drown
//!   the game.
//! - `LOG_FORMAT=json` switches to structured JSON lines.
//!
//! Logs go to stderr; stdout is reserved for the game itself.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("warn,config=info,dataset=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
