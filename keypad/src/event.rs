/// A debounced key event, as pushed into a channel by [`crate::sink::ChannelSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent<S> {
    pub symbol: S,
    pub pressed: bool,
}

impl<S> KeyEvent<S> {
    pub fn press(symbol: S) -> Self {
        Self { symbol, pressed: true }
    }

    pub fn release(symbol: S) -> Self {
        Self { symbol, pressed: false }
    }
}
