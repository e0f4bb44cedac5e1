//! Seed handling and the reproducible pseudo-random stream used for board shuffles.

/// 32-bit generation seed.
///
/// Callers commonly hand in millisecond timestamps; those are reduced modulo
/// 2^32, which keeps boards generated from the same timestamp identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(pub u32);

impl Seed {
    pub fn from_u64(value: u64) -> Self {
        Self(value as u32)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Mulberry32 stream. Every call advances the state by a fixed increment and
/// scrambles it, so the sequence depends on nothing but the seed.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed.0 }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Index in `0..bound`, drawn the way the shuffle consumes the stream.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_f64() * bound as f64) as usize
    }
}
