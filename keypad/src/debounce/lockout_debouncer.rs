use core::num::NonZeroU16;

use super::{DebouncerTrait, KeyTransition};

/// Debounce state of a single key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Released and armed, the next pressed reading is reported.
    #[default]
    WaitingForPress,
    /// A press was just reported, raw readings are ignored until the lockout expires.
    PressLockout,
    /// Pressed and armed, the next released reading is reported.
    WaitingForRelease,
    /// A release was just reported, raw readings are ignored until the lockout expires.
    ReleaseLockout,
}

impl KeyState {
    pub fn is_lockout(self) -> bool {
        matches!(self, KeyState::PressLockout | KeyState::ReleaseLockout)
    }
}

/// One key of the matrix: its debounce state and the remaining lockout, in scan cycles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCell {
    state: KeyState,
    lockout_remaining: u16,
}

impl KeyCell {
    pub const fn new() -> Self {
        Self {
            state: KeyState::WaitingForPress,
            lockout_remaining: 0,
        }
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    pub fn lockout_remaining(&self) -> u16 {
        self.lockout_remaining
    }

    /// Advance this key by one scan cycle.
    ///
    /// The lockout armed by an emission is not counted down in the cycle that armed it: with a
    /// lockout of `n`, the `n - 1` following readings are ignored, the `n`-th cycle ends the
    /// lockout, and the opposite transition can be reported from the cycle after.
    pub fn tick(&mut self, pressed_now: bool, lockout_scans: NonZeroU16) -> Option<KeyTransition> {
        let timed_out = self.lockout_remaining == 1;

        let transition = match self.state {
            KeyState::WaitingForPress if pressed_now => {
                self.state = KeyState::PressLockout;
                Some(KeyTransition::Pressed)
            }
            KeyState::WaitingForRelease if !pressed_now => {
                self.state = KeyState::ReleaseLockout;
                Some(KeyTransition::Released)
            }
            // Still held or still released, nothing to report
            KeyState::WaitingForPress | KeyState::WaitingForRelease => None,
            KeyState::PressLockout => {
                if timed_out {
                    self.state = KeyState::WaitingForRelease;
                }
                None
            }
            KeyState::ReleaseLockout => {
                if timed_out {
                    self.state = KeyState::WaitingForPress;
                }
                None
            }
        };

        if transition.is_some() {
            self.lockout_remaining = lockout_scans.get();
        } else if self.lockout_remaining > 0 {
            self.lockout_remaining -= 1;
        }

        transition
    }
}

/// Per-key lockout debouncer.
///
/// A key reports its first raw change immediately, then freezes for `lockout_scans` scan cycles,
/// ignoring everything it reads, before it watches for the opposite change. Every key has its own
/// timer, so a bouncing key never delays another key.
pub struct LockoutDebouncer<const ROW: usize, const COL: usize> {
    cells: [[KeyCell; COL]; ROW],
    lockout_scans: NonZeroU16,
}

impl<const ROW: usize, const COL: usize> LockoutDebouncer<ROW, COL> {
    pub fn new(lockout_scans: NonZeroU16) -> Self {
        LockoutDebouncer {
            cells: [[KeyCell::new(); COL]; ROW],
            lockout_scans,
        }
    }

    pub fn lockout_scans(&self) -> NonZeroU16 {
        self.lockout_scans
    }

    pub fn cell(&self, row_idx: usize, col_idx: usize) -> &KeyCell {
        &self.cells[row_idx][col_idx]
    }
}

impl<const ROW: usize, const COL: usize> Default for LockoutDebouncer<ROW, COL> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOCKOUT_SCANS)
    }
}

impl<const ROW: usize, const COL: usize> DebouncerTrait<ROW, COL> for LockoutDebouncer<ROW, COL> {
    fn debounce(&mut self, row_idx: usize, col_idx: usize, pressed_now: bool) -> Option<KeyTransition> {
        self.cells[row_idx][col_idx].tick(pressed_now, self.lockout_scans)
    }

    fn reset(&mut self) {
        self.cells = [[KeyCell::new(); COL]; ROW];
    }
}
