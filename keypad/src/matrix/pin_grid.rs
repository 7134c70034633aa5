use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::GridReader;
use crate::config::KeypadConfig;

/// Electrical level of an active column, and of a row whose key is pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Columns are driven low, rows have pull-ups and read low when pressed
    Low,
    /// Columns are driven high, rows have pull-downs and read high when pressed
    High,
}

/// A [`GridReader`] over GPIO pins: one output pin per column, one input pin per row.
pub struct PinGrid<In: InputPin, Out: OutputPin, D: DelayNs, const ROW: usize, const COL: usize> {
    /// Input pins, one per row
    row_pins: [In; ROW],
    /// Output pins, one per column
    column_pins: [Out; COL],
    /// Delay used to let a freshly activated column settle
    delay: D,
    active_level: ActiveLevel,
    settle_time_us: u32,
    /// The column currently driven active
    active_column: Option<usize>,
}

impl<In: InputPin, Out: OutputPin, D: DelayNs, const ROW: usize, const COL: usize> PinGrid<In, Out, D, ROW, COL> {
    /// Create a pin grid, all columns are driven inactive.
    pub fn new(
        row_pins: [In; ROW],
        column_pins: [Out; COL],
        delay: D,
        active_level: ActiveLevel,
        settle_time_us: u32,
    ) -> Self {
        let mut grid = PinGrid {
            row_pins,
            column_pins,
            delay,
            active_level,
            settle_time_us,
            active_column: None,
        };
        for col_idx in 0..COL {
            grid.drive(col_idx, false);
        }
        grid
    }

    /// Create a pin grid which waits `config.settle_time_us` after activating each column.
    pub fn with_config(
        row_pins: [In; ROW],
        column_pins: [Out; COL],
        delay: D,
        active_level: ActiveLevel,
        config: &KeypadConfig,
    ) -> Self {
        Self::new(row_pins, column_pins, delay, active_level, config.settle_time_us)
    }

    pub fn settle_time_us(&self) -> u32 {
        self.settle_time_us
    }

    pub fn active_column(&self) -> Option<usize> {
        self.active_column
    }

    /// Give the pins back.
    pub fn release(self) -> ([In; ROW], [Out; COL], D) {
        (self.row_pins, self.column_pins, self.delay)
    }

    fn drive(&mut self, col_idx: usize, active: bool) {
        let pin = &mut self.column_pins[col_idx];
        let high = active == (self.active_level == ActiveLevel::High);
        if high {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}

impl<In: InputPin, Out: OutputPin, D: DelayNs, const ROW: usize, const COL: usize> GridReader
    for PinGrid<In, Out, D, ROW, COL>
{
    fn activate_column(&mut self, col_idx: usize) {
        if let Some(prev) = self.active_column {
            if prev != col_idx {
                self.drive(prev, false);
            }
        }
        self.drive(col_idx, true);
        self.active_column = Some(col_idx);
        if self.settle_time_us > 0 {
            self.delay.delay_us(self.settle_time_us);
        }
    }

    fn read_row(&mut self, row_idx: usize) -> bool {
        match self.row_pins[row_idx].is_high() {
            Ok(high) => high == (self.active_level == ActiveLevel::High),
            Err(_) => {
                warn!("Failed to read row {}, treated as released", row_idx);
                false
            }
        }
    }

    fn deactivate_all(&mut self) {
        if let Some(col_idx) = self.active_column.take() {
            self.drive(col_idx, false);
        }
    }
}
