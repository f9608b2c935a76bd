//! Item identifier generation.

use std::sync::atomic::{AtomicU32, Ordering};

/// Prefix carried by every generated item identifier.
pub const ID_PREFIX: &str = "gmr-";

// Seed carried over from the historical wire format; any value works.
const DEFAULT_SEED: u32 = 42;

/// Hands out a fresh item identifier on every call.
///
/// Some control points cache item content by identifier and then never
/// refresh their display when the metadata behind it changes. Giving each
/// document a new id discourages that caching. Tokens are a constant
/// prefix plus an 8-hex-digit zero-padded counter, e.g. `gmr-0000002a`;
/// the counter increments atomically so concurrent conversions never
/// observe a duplicate.
#[derive(Debug)]
pub struct ItemIdGenerator {
    counter: AtomicU32,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Starts the counter at `seed`; the first token renders `seed` itself.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            counter: AtomicU32::new(seed),
        }
    }

    /// Returns the next token and advances the counter.
    pub fn next_id(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{ID_PREFIX}{value:08x}")
    }
}

impl Default for ItemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
