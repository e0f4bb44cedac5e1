//! In-place Fisher–Yates shuffle driven by the board stream.

use super::seed::Mulberry32;

pub fn shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
