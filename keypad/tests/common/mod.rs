#![allow(dead_code)]

use std::num::NonZeroU16;

use keypad::GridReader;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn lockout(n: u16) -> NonZeroU16 {
    NonZeroU16::new(n).unwrap()
}

/// Grid which plays back one frame of raw readings per scan cycle.
///
/// A new scan cycle starts when column 0 is activated. After the last frame, the last frame is
/// repeated forever.
pub struct ScriptedGrid<const ROW: usize, const COL: usize> {
    frames: Vec<[[bool; COL]; ROW]>,
    frame: Option<usize>,
    active: Option<usize>,
}

impl<const ROW: usize, const COL: usize> ScriptedGrid<ROW, COL> {
    pub fn new(frames: Vec<[[bool; COL]; ROW]>) -> Self {
        assert!(!frames.is_empty());
        Self {
            frames,
            frame: None,
            active: None,
        }
    }

    /// One frame per reading, where only the key at (row, col) follows `readings`
    pub fn single_key(row: usize, col: usize, readings: &[bool]) -> Self {
        let frames = readings
            .iter()
            .map(|&pressed| {
                let mut frame = [[false; COL]; ROW];
                frame[row][col] = pressed;
                frame
            })
            .collect();
        Self::new(frames)
    }
}

impl<const ROW: usize, const COL: usize> GridReader for ScriptedGrid<ROW, COL> {
    fn activate_column(&mut self, col_idx: usize) {
        assert!(col_idx < COL);
        if col_idx == 0 {
            let next = self.frame.map_or(0, |f| f + 1);
            self.frame = Some(next.min(self.frames.len() - 1));
        }
        self.active = Some(col_idx);
    }

    fn read_row(&mut self, row_idx: usize) -> bool {
        let col_idx = self.active.expect("row read without an active column");
        self.frames[self.frame.unwrap()][row_idx][col_idx]
    }

    fn deactivate_all(&mut self) {
        self.active = None;
    }
}

/// Collects `(symbol, pressed, scan)` for every emitted event
pub struct Recorder<S> {
    pub events: Vec<(S, bool, usize)>,
    pub scan: usize,
}

impl<S> Recorder<S> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            scan: 0,
        }
    }

    pub fn symbols(&self) -> Vec<(S, bool)>
    where
        S: Copy,
    {
        self.events.iter().map(|&(s, p, _)| (s, p)).collect()
    }
}

impl<S> keypad::EventSink<S> for Recorder<S> {
    fn emit(&mut self, symbol: S, pressed: bool) {
        self.events.push((symbol, pressed, self.scan));
    }
}

/// Small deterministic xorshift generator, for bounce patterns
pub struct XorShift(pub u32);

impl XorShift {
    pub fn next_bool(&mut self) -> bool {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x & 1 == 1
    }
}
