//! Unique bind key generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);
static KEY_SEED: OnceLock<u32> = OnceLock::new();

/// Produce a placeholder key that no other call in this process returns.
///
/// Keys look like `:_3fa9c2d1000001_`: a random per-process seed followed by
/// a monotonic counter. They are valid named placeholders for drivers that
/// accept `:name` syntax.
pub fn bind_key() -> String {
    let seed = *KEY_SEED.get_or_init(rand::random::<u32>);
    let count = NEXT_KEY.fetch_add(1, Ordering::Relaxed);

    format!(":_{:08x}{:06x}_", seed, count)
}
