use core::num::NonZeroU16;

use embassy_time::Duration;

/// Default lockout length, in scan cycles.
pub const DEFAULT_LOCKOUT_SCANS: NonZeroU16 = match NonZeroU16::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default column settle time before the rows are sampled, in microseconds.
pub const DEFAULT_SETTLE_TIME_US: u32 = 1;

/// Tunable configurations for the keypad.
///
/// The grid dimensions are const generics on [`crate::matrix::Matrix`], the symbol table lives in
/// [`crate::keymap::Keymap`]. Everything here is fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Number of scan cycles a key ignores its raw readings after emitting an event.
    ///
    /// Tuned per hardware, there is no automatic calibration.
    pub lockout_scans: NonZeroU16,
    /// Optional pause between two scan cycles.
    ///
    /// Debouncing counts scan cycles, not wall-clock time, so this only affects power draw and EMI.
    pub scan_interval: Option<Duration>,
    /// Time to wait after activating a column before its rows are read.
    ///
    /// Applied by [`crate::matrix::pin_grid::PinGrid::with_config`].
    pub settle_time_us: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            lockout_scans: DEFAULT_LOCKOUT_SCANS,
            scan_interval: None,
            settle_time_us: DEFAULT_SETTLE_TIME_US,
        }
    }
}

impl KeypadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lockout_scans(mut self, lockout_scans: NonZeroU16) -> Self {
        self.lockout_scans = lockout_scans;
        self
    }

    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = Some(interval);
        self
    }

    pub fn with_settle_time_us(mut self, settle_time_us: u32) -> Self {
        self.settle_time_us = settle_time_us;
        self
    }
}
