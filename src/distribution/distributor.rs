use std::collections::HashMap;

use crossbeam_channel::Receiver;
use log::debug;

use super::{ChannelParams, DistributionError, SafeRandom, SharedSource};
use crate::rng::BitSource;

/// Registry of channels, one per bit width, over a single generator.
///
/// The first request for a width opens its channel; later requests hand
/// out further receivers of the same channel. All channels draw from the
/// same [`SharedSource`], one value at a time.
pub struct Distributor<S: BitSource + Send + 'static> {
    source: SharedSource<S>,
    capacity: usize,
    channels: HashMap<usize, SafeRandom<S>>,
}

impl<S: BitSource + Send + 'static> Distributor<S> {
    /// Takes ownership of `source` and shares it between future channels.
    pub fn new(source: S) -> Self {
        Self::from_shared(SharedSource::new(source))
    }

    /// Uses a generator that may already be shared elsewhere.
    pub fn from_shared(source: SharedSource<S>) -> Self {
        Self {
            source,
            capacity: 0,
            channels: HashMap::new(),
        }
    }

    /// Sets the buffer capacity of channels opened from now on.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns a receiver of `bits`-bit values, opening the channel if needed.
    ///
    /// # Errors
    /// Propagates [`SafeRandom::open_with`] failures.
    pub fn channel(&mut self, bits: usize) -> Result<Receiver<Vec<u8>>, DistributionError> {
        if let Some(channel) = self.channels.get(&bits) {
            return Ok(channel.channel());
        }

        let params = ChannelParams::new(bits).with_capacity(self.capacity);
        let channel = SafeRandom::open_with(self.source.clone(), params)?;
        let receiver = channel.channel();

        self.channels.insert(bits, channel);
        debug!("registered {}-bit channel", bits);

        Ok(receiver)
    }

    /// Closes the channel of the given width. Returns `false` if none was open.
    pub fn close(&mut self, bits: usize) -> bool {
        match self.channels.remove(&bits) {
            Some(mut channel) => {
                channel.close();
                true
            }
            None => false,
        }
    }

    /// Closes every open channel.
    pub fn close_all(&mut self) {
        for (_, mut channel) in self.channels.drain() {
            channel.close();
        }
    }

    /// Widths with an open channel, in ascending order.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.channels.keys().copied().collect();
        widths.sort_unstable();

        widths
    }

    /// The generator behind every channel.
    pub fn source(&self) -> &SharedSource<S> {
        &self.source
    }
}
