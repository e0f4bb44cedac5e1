//! Screen-space placement of board tiles.
//!
//! Flat-top hexes sit in vertical columns; neighbouring columns overlap by a
//! quarter of the tile width, and shorter columns are pushed down by half a
//! tile per missing tile so every column is vertically centred.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::mapgen::Topology;
use crate::types::{Cell, Terrain, Token};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self { width: 82.0, height: 72.0 }
    }
}

impl TileMetrics {
    pub fn column_pitch(&self) -> f32 {
        self.width * 0.75
    }

    pub fn row_pitch(&self) -> f32 {
        self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub column: usize,
    pub row: usize,
    /// Vertical centring offset in half-tile steps.
    pub half_steps: usize,
    pub left: f32,
    pub top: f32,
}

/// Projects stored tile `index` of `lane`; `None` if the topology has no such tile.
pub fn project(
    lane: usize,
    index: usize,
    topology: &Topology,
    metrics: &TileMetrics,
) -> Option<Projection> {
    let cell = topology.cell_of(lane, index)?;
    Some(project_cell(cell, topology, metrics))
}

fn project_cell(cell: Cell, topology: &Topology, metrics: &TileMetrics) -> Projection {
    let half_steps = topology.max_column_height() - topology.column_heights[cell.column];
    let centring = half_steps as f32 * (metrics.row_pitch() / 2.0);
    Projection {
        column: cell.column,
        row: cell.row,
        half_steps,
        left: cell.column as f32 * metrics.column_pitch(),
        top: centring + cell.row as f32 * metrics.row_pitch(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedTile {
    pub lane: usize,
    pub index: usize,
    pub terrain: Terrain,
    pub number: Option<Token>,
    #[serde(flatten)]
    pub projection: Projection,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardLayout {
    pub width: f32,
    pub height: f32,
    /// Column by column, top to bottom: the order tiles are drawn in.
    pub tiles: Vec<PlacedTile>,
}

pub fn layout_board(board: &Board, metrics: &TileMetrics) -> BoardLayout {
    let topology = board.topology();
    let columns = topology.column_count();
    let max_height = topology.max_column_height();

    let tiles = topology
        .column_slots()
        .into_iter()
        .enumerate()
        .flat_map(|(column, slots)| {
            slots.into_iter().enumerate().map(move |(row, slot)| (Cell { column, row }, slot))
        })
        .map(|(cell, (lane, index))| {
            let tile = board.lanes()[lane][index];
            PlacedTile {
                lane,
                index,
                terrain: tile.terrain,
                number: tile.number,
                projection: project_cell(cell, topology, metrics),
            }
        })
        .collect();

    BoardLayout {
        width: metrics.width + metrics.column_pitch() * columns.saturating_sub(1) as f32,
        height: metrics.height + metrics.row_pitch() * max_height.saturating_sub(1) as f32,
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::{generate_board, topology};
    use crate::types::PlayerCount;

    #[test]
    fn legacy_rows_project_onto_their_offset_columns() {
        let topology = topology(PlayerCount::Four);
        let metrics = TileMetrics::default();

        let first_of_second_row = project(1, 0, topology, &metrics).expect("tile exists");
        assert_eq!((first_of_second_row.column, first_of_second_row.row), (1, 1));
        assert_eq!(first_of_second_row.half_steps, 1);
        assert_eq!(first_of_second_row.left, 61.5);
        assert_eq!(first_of_second_row.top, 36.0 + 72.0);

        let bottom_centre = project(4, 0, topology, &metrics).expect("tile exists");
        assert_eq!((bottom_centre.column, bottom_centre.row, bottom_centre.half_steps), (2, 4, 0));
        assert_eq!(bottom_centre.top, 288.0);

        assert_eq!(project(4, 3, topology, &metrics), None);
        assert_eq!(project(5, 0, topology, &metrics), None);
    }

    #[test]
    fn columns_are_vertically_centred() {
        let topology = topology(PlayerCount::Six);
        let metrics = TileMetrics { width: 100.0, height: 80.0 };
        for column in 0..topology.column_count() {
            let height = topology.column_heights[column];
            let top = project(column, 0, topology, &metrics).expect("top tile").top;
            let bottom = project(column, height - 1, topology, &metrics).expect("bottom tile").top;
            let centre = (top + bottom + metrics.height) / 2.0;
            assert_eq!(centre, 3.0 * 80.0, "column {column} should share the board centre line");
        }
    }

    #[test]
    fn layout_places_every_tile_once_inside_the_board_extent() {
        for player_count in PlayerCount::ALL {
            let board = generate_board(player_count, 77_u64);
            let metrics = TileMetrics::default();
            let layout = layout_board(&board, &metrics);

            assert_eq!(layout.tiles.len(), board.tiles().count());
            for placed in &layout.tiles {
                assert!(placed.projection.left + metrics.width <= layout.width);
                assert!(placed.projection.top + metrics.height <= layout.height);
                assert_eq!(board.lanes()[placed.lane][placed.index].number, placed.number);
            }
        }
    }

    #[test]
    fn four_player_board_extent_matches_five_columns_of_five() {
        let board = generate_board(PlayerCount::Four, 1_u64);
        let layout = layout_board(&board, &TileMetrics::default());
        assert_eq!(layout.width, 82.0 + 61.5 * 4.0);
        assert_eq!(layout.height, 72.0 * 5.0);
    }
}
