//! Deterministic board generation split into its stages: seeded stream,
//! shuffle, terrain bag, topology tables, numbering.

mod bag;
mod generator;
mod numbering;
mod seed;
mod shuffle;
mod topology;

pub use bag::build_bag;
pub use generator::BoardGenerator;
pub use numbering::reassign_numbers;
pub use seed::{Mulberry32, Seed};
pub use shuffle::shuffle;
pub use topology::{LaneAxis, TerrainCounts, Topology, topology};

use crate::board::Board;
use crate::types::PlayerCount;

pub fn generate_board(player_count: PlayerCount, seed: impl Into<Seed>) -> Board {
    BoardGenerator::new(player_count, seed).generate()
}
