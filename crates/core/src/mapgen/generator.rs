//! Board generation: shuffle the terrain bag, lay it into lanes, number it.

use log::debug;

use crate::board::Board;
use crate::types::{PlayerCount, Tile};

use super::bag::build_bag;
use super::numbering::assign_numbers;
use super::seed::{Mulberry32, Seed};
use super::shuffle::shuffle;
use super::topology::{Topology, topology};

pub struct BoardGenerator {
    seed: Seed,
    topology: &'static Topology,
}

impl BoardGenerator {
    pub fn new(player_count: PlayerCount, seed: impl Into<Seed>) -> Self {
        Self { seed: seed.into(), topology: topology(player_count) }
    }

    pub fn generate(&self) -> Board {
        let mut bag = build_bag(self.topology.player_count);
        shuffle(&mut bag, &mut Mulberry32::new(self.seed));

        let mut terrain = bag.into_iter();
        let mut lanes: Vec<Vec<Tile>> = self
            .topology
            .lane_lengths
            .iter()
            .map(|&length| terrain.by_ref().take(length).map(Tile::unnumbered).collect())
            .collect();
        debug_assert!(terrain.next().is_none(), "bag size equals lane total");

        assign_numbers(&mut lanes, self.topology);
        debug!("generated {}-player board from seed {}", self.topology.player_count, self.seed.0);
        Board::from_parts(self.topology.player_count, lanes)
    }
}
