// src/random.rs
//! Reproducible random streams for noise injection
//!
//! Noise draws must be sequenced per logical stream: one Gaussian per time
//! slice, in order. [`RandomStreams`] hands out an independent engine for each
//! (event, channel) pair so channels can be digitized on any thread, in any
//! order, and still reproduce bit-for-bit from the base seed.
//!
//! The ChaCha key is built from the base seed and the event number; the
//! channel selects the ChaCha stream under that key.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::electronics::ChannelId;

/// Engine type handed out per channel
pub type StreamRng = ChaCha8Rng;

/// Seeded factory for per-channel random engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStreams {
    base_seed: u64,
}

impl RandomStreams {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Engine for one channel of one event
    pub fn engine(&self, event: u64, channel: ChannelId) -> StreamRng {
        let mut rng = ChaCha8Rng::from_seed(self.event_key(event));
        rng.set_stream(channel.raw() as u64);
        rng
    }

    /// ChaCha key shared by every channel of `event`
    pub fn event_key(&self, event: u64) -> [u8; 32] {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.base_seed.to_le_bytes());
        key[8..16].copy_from_slice(&event.to_le_bytes());
        key
    }
}
