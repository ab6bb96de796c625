//! Log capture for the terminal UI.
//!
//! The TUI owns the terminal, so records emitted through the `log` facade are
//! buffered by `tui-logger` and surfaced in the in-app log pane.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the in-memory logger. Safe to call more than once.
pub fn initialize() {
    INIT.call_once(|| {
        if tui_logger::init_logger(LevelFilter::Trace).is_ok() {
            tui_logger::set_default_level(LevelFilter::Debug);
        }
    });
}

/// Move buffered records into the widget's display buffer.
///
/// Since tui-logger 0.14 the crate no longer exports a free `move_events`;
/// `init_logger` spawns a background thread that moves events every 10ms,
/// so there is nothing left to do here.
pub fn pump() {}
