//! Event sinks receive the debounced key events produced by the scan loop.
//!
//! A sink is called from inside the scan loop, so it must return quickly. What happens when the
//! sink cannot deliver an event is up to the sink: the scan loop never retries or buffers.
mod channel_sink;
mod hid_sink;

pub use channel_sink::ChannelSink;
pub use hid_sink::{HidReportSink, ascii_to_hid};

/// Receiver of debounced press/release events.
pub trait EventSink<S> {
    /// Called once per debounced press (`pressed == true`) or release of the key mapped to `symbol`.
    fn emit(&mut self, symbol: S, pressed: bool);
}

impl<S, F: FnMut(S, bool)> EventSink<S> for F {
    fn emit(&mut self, symbol: S, pressed: bool) {
        self(symbol, pressed)
    }
}

/// Diagnostic sink which only logs the events, as `<symbol> down` and `<symbol> up`.
///
/// Useful for checking the wiring of a keypad without generating any keystrokes on the host.
#[derive(Default)]
pub struct LogSink {
    events: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: 0 }
    }

    /// Number of events logged so far
    pub fn events(&self) -> usize {
        self.events
    }
}

impl EventSink<u8> for LogSink {
    fn emit(&mut self, symbol: u8, pressed: bool) {
        self.events += 1;
        if pressed {
            info!("{} down", symbol);
        } else {
            info!("{} up", symbol);
        }
    }
}
