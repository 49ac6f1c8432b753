//! `tracing` output to the browser devtools console.
//!
//! No `tracing` subscriber is installed. With tracing's `log` feature every
//! event falls through to the `log` facade, and `console_log` maps each
//! record to the matching `console.*` method.

use log::Level;

/// Install the console logger. Debug builds log at `Debug`, release
/// builds at `Info`. Calling it twice is harmless.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };

    // a second call only fails with "logger already set"
    let _ = console_log::init_with_level(level);
}
