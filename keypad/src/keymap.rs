/// Layout of the common 4x4 membrane keypad, as ASCII symbols.
#[rustfmt::skip]
pub const KEYPAD_4X4: [[u8; 4]; 4] = [
    [b'1', b'2', b'3', b'A'],
    [b'4', b'5', b'6', b'B'],
    [b'7', b'8', b'9', b'C'],
    [b'*', b'0', b'#', b'D'],
];

/// Layout of the 4x3 telephone keypad.
#[rustfmt::skip]
pub const KEYPAD_4X3: [[u8; 3]; 4] = [
    [b'1', b'2', b'3'],
    [b'4', b'5', b'6'],
    [b'7', b'8', b'9'],
    [b'*', b'0', b'#'],
];

/// The symbol emitted by each key of the matrix, indexed by `[row][col]`.
///
/// Set once at startup and never modified.
pub struct Keymap<S: Copy, const ROW: usize, const COL: usize> {
    symbols: [[S; COL]; ROW],
}

impl<S: Copy, const ROW: usize, const COL: usize> Keymap<S, ROW, COL> {
    pub const fn new(symbols: [[S; COL]; ROW]) -> Self {
        Self { symbols }
    }

    pub fn symbol(&self, row: usize, col: usize) -> S {
        self.symbols[row][col]
    }

    /// Find the first key, in scan order, that emits `symbol`.
    pub fn position(&self, symbol: S) -> Option<(usize, usize)>
    where
        S: PartialEq,
    {
        (0..COL)
            .flat_map(|col| (0..ROW).map(move |row| (row, col)))
            .find(|&(row, col)| self.symbols[row][col] == symbol)
    }
}

impl<S: Copy, const ROW: usize, const COL: usize> From<[[S; COL]; ROW]> for Keymap<S, ROW, COL> {
    fn from(symbols: [[S; COL]; ROW]) -> Self {
        Self::new(symbols)
    }
}

impl Default for Keymap<u8, 4, 4> {
    fn default() -> Self {
        Self::new(KEYPAD_4X4)
    }
}
