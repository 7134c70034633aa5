use embassy_futures::yield_now;
use embassy_time::{Duration, Timer};

use crate::config::KeypadConfig;
use crate::debounce::{DebouncerTrait, LockoutDebouncer};
use crate::keymap::Keymap;
use crate::sink::EventSink;

pub mod pin_grid;

/// The physical side of the matrix: drive one column at a time and sample the rows.
///
/// Implementors resolve the electrical polarity, `read_row` always returns `true` for a pressed key.
pub trait GridReader {
    /// Make `col_idx` the only active column.
    fn activate_column(&mut self, col_idx: usize);

    /// Whether the key at `row_idx` of the active column is pressed.
    fn read_row(&mut self, row_idx: usize) -> bool;

    /// Leave every column inactive, called at the end of each scan cycle.
    fn deactivate_all(&mut self) {}
}

/// Matrix scanner: reads every key of the grid once per scan cycle, debounces the readings and
/// reports the resulting events to an [`EventSink`].
///
/// Keys are visited column by column, and row by row inside a column. Events of one scan cycle are
/// emitted in that order.
pub struct Matrix<G: GridReader, D: DebouncerTrait<ROW, COL>, S: Copy, const ROW: usize, const COL: usize> {
    /// Pins, or anything else which can read the grid
    grid: G,
    /// Debouncer
    debouncer: D,
    /// Symbol of each key
    keymap: Keymap<S, ROW, COL>,
    /// Pause between two scan cycles
    scan_interval: Option<Duration>,
    /// Number of completed scan cycles, wrapping
    scan_count: u32,
}

impl<G: GridReader, D: DebouncerTrait<ROW, COL>, S: Copy, const ROW: usize, const COL: usize>
    Matrix<G, D, S, ROW, COL>
{
    /// Create a matrix from a grid reader, a debouncer and a keymap.
    pub fn new(grid: G, debouncer: D, keymap: Keymap<S, ROW, COL>) -> Self {
        Matrix {
            grid,
            debouncer,
            keymap,
            scan_interval: None,
            scan_count: 0,
        }
    }

    pub fn debouncer(&self) -> &D {
        &self.debouncer
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn scan_count(&self) -> u32 {
        self.scan_count
    }

    /// Forget every key state. Keys still held down are reported as pressed again on the next scans.
    pub fn reset(&mut self) {
        info!("Reset matrix debouncer");
        self.debouncer.reset();
    }

    /// Run one full scan cycle, returns the number of events sent to the sink.
    pub fn scan<E: EventSink<S>>(&mut self, sink: &mut E) -> usize {
        let mut emitted = 0;

        for col_idx in 0..COL {
            self.grid.activate_column(col_idx);
            for row_idx in 0..ROW {
                let pressed_now = self.grid.read_row(row_idx);
                if let Some(transition) = self.debouncer.debounce(row_idx, col_idx, pressed_now) {
                    let pressed = transition.is_pressed();
                    debug!(
                        "Key ({}, {}) debounced, pressed: {}, scan: {}",
                        row_idx, col_idx, pressed, self.scan_count
                    );
                    sink.emit(self.keymap.symbol(row_idx, col_idx), pressed);
                    emitted += 1;
                }
            }
        }
        self.grid.deactivate_all();

        self.scan_count = self.scan_count.wrapping_add(1);
        emitted
    }

    /// Scan the matrix forever.
    pub async fn run<E: EventSink<S>>(&mut self, sink: &mut E) {
        info!("Start scanning matrix, {} rows, {} cols", ROW, COL);
        loop {
            self.scan(sink);
            match self.scan_interval {
                Some(interval) => Timer::after(interval).await,
                None => yield_now().await,
            }
        }
    }
}

impl<G: GridReader, S: Copy, const ROW: usize, const COL: usize> Matrix<G, LockoutDebouncer<ROW, COL>, S, ROW, COL> {
    /// Create a matrix with the lockout debouncer, configured from `config`.
    pub fn with_config(grid: G, keymap: Keymap<S, ROW, COL>, config: &KeypadConfig) -> Self {
        Matrix {
            grid,
            debouncer: LockoutDebouncer::new(config.lockout_scans),
            keymap,
            scan_interval: config.scan_interval,
            scan_count: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use core::num::NonZeroU16;

    use super::*;
    use crate::debounce::KeyState;

    /// Grid which records the order of the calls it gets
    struct RecordingGrid {
        pressed: [[bool; 2]; 3],
        active: Option<usize>,
        reads: Vec<(usize, usize)>,
        deactivations: usize,
    }

    impl GridReader for RecordingGrid {
        fn activate_column(&mut self, col_idx: usize) {
            self.active = Some(col_idx);
        }

        fn read_row(&mut self, row_idx: usize) -> bool {
            let col_idx = self.active.unwrap();
            self.reads.push((row_idx, col_idx));
            self.pressed[row_idx][col_idx]
        }

        fn deactivate_all(&mut self) {
            self.active = None;
            self.deactivations += 1;
        }
    }

    #[test]
    fn test_scan_order_is_column_major() {
        let grid = RecordingGrid {
            pressed: [[true; 2]; 3],
            active: None,
            reads: Vec::new(),
            deactivations: 0,
        };
        let keymap = Keymap::new([[b'a', b'b'], [b'c', b'd'], [b'e', b'f']]);
        let config = KeypadConfig::default().with_lockout_scans(NonZeroU16::new(2).unwrap());
        let mut matrix = Matrix::with_config(grid, keymap, &config);

        let mut events = Vec::new();
        let emitted = matrix.scan(&mut |symbol: u8, pressed: bool| events.push((symbol, pressed)));

        assert_eq!(emitted, 6);
        assert_eq!(
            matrix.grid().reads,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(
            events,
            vec![
                (b'a', true),
                (b'c', true),
                (b'e', true),
                (b'b', true),
                (b'd', true),
                (b'f', true)
            ]
        );
        assert_eq!(matrix.grid().deactivations, 1);
        assert_eq!(matrix.grid().active, None);
        assert_eq!(matrix.scan_count(), 1);
        assert_eq!(matrix.debouncer().cell(2, 1).state(), KeyState::PressLockout);
    }

    #[test]
    fn test_scan_count_wraps() {
        let grid = RecordingGrid {
            pressed: [[false; 2]; 3],
            active: None,
            reads: Vec::new(),
            deactivations: 0,
        };
        let mut matrix = Matrix::new(grid, LockoutDebouncer::default(), Keymap::new([[0u8; 2]; 3]));
        matrix.scan_count = u32::MAX;
        assert_eq!(matrix.scan(&mut |_: u8, _: bool| {}), 0);
        assert_eq!(matrix.scan_count(), 0);
    }
}
