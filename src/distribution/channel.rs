//! One production loop feeding one channel.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded, select};
use log::{debug, warn};

use super::{ChannelParams, DistributionError, SharedSource};
use crate::rng::BitSource;

/// Lifecycle of a [`SafeRandom`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelState {
    /// Constructed, nothing is produced yet.
    Idle,
    /// The production loop is running.
    Running,
    /// Terminal: the loop has exited and the channel is disconnected.
    Closed,
}

/// A channel of random values fed by a background production loop.
///
/// The loop draws `bits`-bit values from a [`SharedSource`] and sends each
/// one exactly once. Any number of consumers may receive from clones of
/// [`channel`](Self::channel); values are split between them, never
/// duplicated.
///
/// Closing stops the loop and disconnects the channel. Receivers then see
/// the usual disconnection error (after draining any buffered values).
pub struct SafeRandom<S: BitSource + Send + 'static> {
    source: SharedSource<S>,
    params: ChannelParams,

    receiver: Receiver<Vec<u8>>,

    /// Held until the loop takes it over.
    sender: Option<Sender<Vec<u8>>>,

    /// Dropping this tells the loop to stop.
    stop: Option<Sender<()>>,

    worker: Option<JoinHandle<()>>,
    state: ChannelState,
}

impl<S: BitSource + Send + 'static> SafeRandom<S> {
    /// Creates an idle channel over `source`.
    ///
    /// # Errors
    /// Returns [`DistributionError::ZeroWidth`] if `params.bits` is 0.
    pub fn new(source: SharedSource<S>, params: ChannelParams) -> Result<Self, DistributionError> {
        params.validate()?;

        let (sender, receiver) = bounded(params.capacity);

        Ok(Self {
            source,
            params,
            receiver,
            sender: Some(sender),
            stop: None,
            worker: None,
            state: ChannelState::Idle,
        })
    }

    /// Creates a rendezvous channel of `bits`-bit values and starts it.
    pub fn open(source: SharedSource<S>, bits: usize) -> Result<Self, DistributionError> {
        Self::open_with(source, ChannelParams::new(bits))
    }

    /// Creates a channel with explicit parameters and starts it.
    pub fn open_with(
        source: SharedSource<S>,
        params: ChannelParams,
    ) -> Result<Self, DistributionError> {
        let mut channel = Self::new(source, params)?;
        channel.start()?;

        Ok(channel)
    }

    /// Starts the production loop. Starting a running channel is a no-op.
    ///
    /// # Errors
    /// - [`DistributionError::Closed`] if the channel was closed
    /// - [`DistributionError::Spawn`] if the thread could not be created,
    ///   in which case the channel ends up closed
    pub fn start(&mut self) -> Result<(), DistributionError> {
        let sender = match self.state {
            ChannelState::Running => return Ok(()),
            ChannelState::Closed => return Err(DistributionError::Closed { bits: self.params.bits }),
            ChannelState::Idle => match self.sender.take() {
                Some(sender) => sender,
                None => return Err(DistributionError::Closed { bits: self.params.bits }),
            },
        };

        let (stop, stopped) = bounded::<()>(0);
        let source = self.source.clone();
        let bits = self.params.bits;

        let spawned = thread::Builder::new()
            .name(self.params.thread_name())
            .spawn(move || produce(source, bits, sender, stopped));

        match spawned {
            Ok(worker) => {
                self.stop = Some(stop);
                self.worker = Some(worker);
                self.state = ChannelState::Running;
                Ok(())
            }
            Err(err) => {
                self.state = ChannelState::Closed;
                Err(err.into())
            }
        }
    }

    /// Returns a receiver for the values of this channel.
    ///
    /// Receivers may be cloned and moved to other threads freely.
    pub fn channel(&self) -> Receiver<Vec<u8>> {
        self.receiver.clone()
    }

    /// Width in bits of every delivered value.
    pub fn bits(&self) -> usize {
        self.params.bits
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Stops the production loop and disconnects the channel.
    ///
    /// Waits for the loop to exit; it never blocks on a pending send for
    /// longer than it takes to notice the stop signal. Closing an already
    /// closed channel does nothing.
    pub fn close(&mut self) {
        if self.state == ChannelState::Closed {
            return;
        }

        self.sender = None;
        self.stop = None;

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("production loop for {}-bit values panicked", self.params.bits);
            }
        }

        self.state = ChannelState::Closed;
        debug!("{}-bit channel closed", self.params.bits);
    }
}

impl<S: BitSource + Send + 'static> Drop for SafeRandom<S> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Draws and sends values until told to stop.
///
/// The loop ends when the stop sender is dropped or when every receiver
/// is gone. A value drawn but not yet sent when the stop arrives is
/// discarded.
fn produce<S: BitSource>(
    source: SharedSource<S>,
    bits: usize,
    sender: Sender<Vec<u8>>,
    stopped: Receiver<()>,
) {
    debug!("production loop for {}-bit values started", bits);

    loop {
        // Nothing more is drawn once a stop is pending.
        if !matches!(stopped.try_recv(), Err(TryRecvError::Empty)) {
            break;
        }

        let value = source.next_bits(bits);

        let delivered = select! {
            send(sender, value) -> sent => sent.is_ok(),
            recv(stopped) -> _ => false,
        };

        if !delivered {
            break;
        }
    }

    debug!("production loop for {}-bit values stopped", bits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ShaRing;

    #[test]
    fn lifecycle_moves_forward_only() {
        let source = SharedSource::new(ShaRing::from_seed(3));
        let mut channel = SafeRandom::new(source, ChannelParams::new(16)).unwrap();
        assert_eq!(channel.state(), ChannelState::Idle);

        channel.start().unwrap();
        assert_eq!(channel.state(), ChannelState::Running);
        channel.start().unwrap();

        channel.close();
        assert_eq!(channel.state(), ChannelState::Closed);
        channel.close();

        assert!(matches!(
            channel.start(),
            Err(DistributionError::Closed { bits: 16 })
        ));
    }

    #[test]
    fn closing_idle_channel_disconnects_receivers() {
        let source = SharedSource::new(ShaRing::from_seed(3));
        let mut channel = SafeRandom::new(source, ChannelParams::new(8)).unwrap();
        let receiver = channel.channel();

        channel.close();
        drop(channel);

        assert!(receiver.recv().is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        let source = SharedSource::new(ShaRing::from_seed(3));

        assert!(matches!(
            SafeRandom::open(source, 0),
            Err(DistributionError::ZeroWidth)
        ));
    }
}
