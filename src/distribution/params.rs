//! Parameter definitions and validation for distribution channels.

use super::DistributionError;

/// Configuration of a single distribution channel.
///
/// The defaults favor backpressure: with a capacity of 0 every value is
/// handed directly from the production loop to a waiting receiver, so at
/// most one value is drawn ahead of demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParams {
    /// Number of bits in every delivered value (minimum 1).
    pub bits: usize,
    /// Values buffered ahead of receivers (0 = rendezvous).
    pub capacity: usize,
    /// Optional name of the production thread.
    pub thread_name: Option<String>,
}

impl ChannelParams {
    /// Rendezvous channel delivering `bits`-bit values.
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            capacity: 0,
            thread_name: None,
        }
    }

    /// Sets how many values may be buffered ahead of receivers.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Names the production thread.
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), DistributionError> {
        if self.bits == 0 {
            return Err(DistributionError::ZeroWidth);
        }

        Ok(())
    }

    pub(crate) fn thread_name(&self) -> String {
        self.thread_name
            .clone()
            .unwrap_or_else(|| format!("sharng-{}bit", self.bits))
    }
}
