//! Exposed channels which can be used to hand events from the scan loop to other tasks

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};
use usbd_hid::descriptor::KeyboardReport;

use crate::RawMutex;
use crate::event::KeyEvent;

pub const KEY_EVENT_CHANNEL_SIZE: usize = 16;
pub const REPORT_CHANNEL_SIZE: usize = 16;

/// Channel for debounced key events of ASCII keypads
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent<u8>, KEY_EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for keyboard reports to be sent to the host
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, KeyboardReport, REPORT_CHANNEL_SIZE> = Channel::new();
