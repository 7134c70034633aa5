use embassy_sync::channel::Channel;

use super::EventSink;
use crate::RawMutex;
use crate::event::KeyEvent;

/// Forwards every event into a channel, for another task to consume.
///
/// The channel is never waited on: when it is full the event is dropped and counted.
pub struct ChannelSink<'a, S, const N: usize> {
    channel: &'a Channel<RawMutex, KeyEvent<S>, N>,
    dropped: usize,
}

impl<'a, S, const N: usize> ChannelSink<'a, S, N> {
    pub fn new(channel: &'a Channel<RawMutex, KeyEvent<S>, N>) -> Self {
        Self { channel, dropped: 0 }
    }

    /// Number of events lost because the channel was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<S, const N: usize> EventSink<S> for ChannelSink<'_, S, N> {
    fn emit(&mut self, symbol: S, pressed: bool) {
        if self.channel.try_send(KeyEvent { symbol, pressed }).is_err() {
            self.dropped += 1;
            warn!("Key event channel is full, dropping event, pressed: {}", pressed);
        }
    }
}
