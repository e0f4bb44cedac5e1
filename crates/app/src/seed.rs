use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Milliseconds since the Unix epoch, bumped by a per-process counter so two
/// boards generated within the same millisecond still differ.
pub fn generate_runtime_seed() -> u64 {
    let now_millis =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_millis());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    (now_millis as u64).wrapping_add(counter)
}

pub fn resolve_seed(cli_seed: Option<u64>, generated_seed: u64) -> SeedChoice {
    match cli_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    }
}
