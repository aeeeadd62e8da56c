//! Concurrent distribution of random values
//!
//! This module lets many threads draw values from one generator without
//! each owning a generator or taking a lock themselves.
//!
//! A [`SafeRandom`] runs one background production loop per channel. The
//! loop draws fixed-width values from a [`SharedSource`] and sends each of
//! them to exactly one receiver. Channels are bounded (rendezvous by
//! default), so the loop never runs far ahead of its consumers.
//!
//! A [`Distributor`] keeps one channel per requested bit width over the same
//! generator.
//!
//! Generators themselves are not synchronized. Sharing one between
//! several channels goes through [`SharedSource`], which serializes every
//! draw.

mod channel;
mod distributor;
mod error;
mod params;
mod shared;

pub use channel::{ChannelState, SafeRandom};
pub use distributor::Distributor;
pub use error::DistributionError;
pub use params::ChannelParams;
pub use shared::SharedSource;
