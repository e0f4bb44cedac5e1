pub mod board;
pub mod mapgen;
pub mod projector;
pub mod types;

pub use board::{Board, BoardRecord, BoardShapeError};
pub use mapgen::{BoardGenerator, Seed, generate_board, reassign_numbers, topology};
pub use projector::{BoardLayout, PlacedTile, Projection, TileMetrics, layout_board, project};
pub use types::*;
