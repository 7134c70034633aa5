pub mod lockout_debouncer;

pub use lockout_debouncer::{KeyCell, KeyState, LockoutDebouncer};

pub trait DebouncerTrait<const ROW: usize, const COL: usize> {
    /// Feed one raw reading of the key at (row, col) for the current scan cycle.
    ///
    /// Must be called exactly once per key per scan cycle.
    fn debounce(&mut self, row_idx: usize, col_idx: usize, pressed_now: bool) -> Option<KeyTransition>;

    /// Forget every key, as if the debouncer was just created.
    fn reset(&mut self);
}

/// A debounced change of a key
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyTransition {
    Pressed,
    Released,
}

impl KeyTransition {
    pub fn is_pressed(self) -> bool {
        matches!(self, KeyTransition::Pressed)
    }
}
