use embassy_sync::channel::Channel;
use heapless::Vec;
use usbd_hid::descriptor::KeyboardReport;

use super::EventSink;
use crate::RawMutex;

/// Left shift bit of the HID modifier byte
const MODIFIER_LEFT_SHIFT: u8 = 1 << 1;

/// Map an ASCII character to its HID usage id on a US layout, and whether shift is needed.
///
/// Returns `None` for characters which have no key on a US keyboard.
pub fn ascii_to_hid(c: u8) -> Option<(u8, bool)> {
    let usage = match c {
        b'a'..=b'z' => (0x04 + c - b'a', false),
        b'A'..=b'Z' => (0x04 + c - b'A', true),
        b'1'..=b'9' => (0x1E + c - b'1', false),
        b'0' => (0x27, false),
        b'!' => (0x1E, true),
        b'@' => (0x1F, true),
        b'#' => (0x20, true),
        b'$' => (0x21, true),
        b'%' => (0x22, true),
        b'^' => (0x23, true),
        b'&' => (0x24, true),
        b'*' => (0x25, true),
        b'(' => (0x26, true),
        b')' => (0x27, true),
        b'\n' => (0x28, false),
        0x1B => (0x29, false),
        0x08 => (0x2A, false),
        b'\t' => (0x2B, false),
        b' ' => (0x2C, false),
        b'-' => (0x2D, false),
        b'_' => (0x2D, true),
        b'=' => (0x2E, false),
        b'+' => (0x2E, true),
        b'[' => (0x2F, false),
        b'{' => (0x2F, true),
        b']' => (0x30, false),
        b'}' => (0x30, true),
        b'\\' => (0x31, false),
        b'|' => (0x31, true),
        b';' => (0x33, false),
        b':' => (0x33, true),
        b'\'' => (0x34, false),
        b'"' => (0x34, true),
        b'`' => (0x35, false),
        b'~' => (0x35, true),
        b',' => (0x36, false),
        b'<' => (0x36, true),
        b'.' => (0x37, false),
        b'>' => (0x37, true),
        b'/' => (0x38, false),
        b'?' => (0x38, true),
        _ => return None,
    };
    Some(usage)
}

/// Turns ASCII key events into USB HID boot keyboard reports.
///
/// Up to 6 symbols can be held at once. Every event that changes the set of held symbols produces
/// a new report, which is pushed into the report channel without waiting.
pub struct HidReportSink<'a, const N: usize> {
    channel: &'a Channel<RawMutex, KeyboardReport, N>,
    held: Vec<u8, 6>,
    dropped: usize,
}

impl<'a, const N: usize> HidReportSink<'a, N> {
    pub fn new(channel: &'a Channel<RawMutex, KeyboardReport, N>) -> Self {
        Self {
            channel,
            held: Vec::new(),
            dropped: 0,
        }
    }

    /// Symbols currently held, in press order
    pub fn held(&self) -> &[u8] {
        &self.held
    }

    /// Number of reports lost because the channel was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Build the report for the currently held symbols.
    pub fn report(&self) -> KeyboardReport {
        let mut modifier = 0;
        let mut keycodes = [0u8; 6];
        let mut keycode_index = 0;

        for (usage, shift) in self.held.iter().filter_map(|&c| ascii_to_hid(c)) {
            if shift {
                modifier |= MODIFIER_LEFT_SHIFT;
            }
            if !keycodes[..keycode_index].contains(&usage) {
                keycodes[keycode_index] = usage;
                keycode_index += 1;
            }
        }

        KeyboardReport {
            modifier,
            reserved: 0,
            leds: 0,
            keycodes,
        }
    }

    fn send_report(&mut self) {
        if self.channel.try_send(self.report()).is_err() {
            self.dropped += 1;
            warn!("Keyboard report channel is full, dropping report");
        }
    }
}

impl<const N: usize> EventSink<u8> for HidReportSink<'_, N> {
    fn emit(&mut self, symbol: u8, pressed: bool) {
        if ascii_to_hid(symbol).is_none() {
            warn!("No HID usage for symbol {}, ignored", symbol);
            return;
        }

        if pressed {
            if self.held.contains(&symbol) {
                return;
            }
            if self.held.push(symbol).is_err() {
                warn!("Too many keys held, symbol {} is not reported", symbol);
                return;
            }
        } else {
            let before = self.held.len();
            self.held.retain(|&c| c != symbol);
            if self.held.len() == before {
                return;
            }
        }
        debug!("Held symbols changed, pressed: {}, symbol: {}", pressed, symbol);
        self.send_report();
    }
}
