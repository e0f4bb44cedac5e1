//! Terrain bag construction.

use std::iter;

use crate::types::{PlayerCount, Terrain};

use super::topology::topology;

/// Every terrain tile for the board, grouped by terrain in [`Terrain::ALL`] order.
pub fn build_bag(player_count: PlayerCount) -> Vec<Terrain> {
    let counts = &topology(player_count).terrain;
    Terrain::ALL
        .into_iter()
        .flat_map(|terrain| iter::repeat_n(terrain, counts.count(terrain)))
        .collect()
}
