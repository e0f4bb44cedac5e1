//! Static per-player-count board topologies.
//!
//! A stored board is a list of lanes. The four-player board keeps the legacy
//! row lanes, each starting at a fixed absolute column; the larger boards store
//! columns directly. Everything that needs tile identity (numbering, the
//! projector) goes through [`Topology::lane_cells`] and [`Topology::spiral`],
//! both derived from the tables below.

use crate::types::{Cell, PlayerCount, Terrain, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainCounts {
    pub forest: usize,
    pub pasture: usize,
    pub fields: usize,
    pub hills: usize,
    pub mountains: usize,
    pub desert: usize,
}

impl TerrainCounts {
    pub const fn total(&self) -> usize {
        self.forest + self.pasture + self.fields + self.hills + self.mountains + self.desert
    }

    /// Tiles that take a number token.
    pub const fn producing(&self) -> usize {
        self.total() - self.desert
    }

    pub fn count(&self, terrain: Terrain) -> usize {
        match terrain {
            Terrain::Forest => self.forest,
            Terrain::Pasture => self.pasture,
            Terrain::Fields => self.fields,
            Terrain::Hills => self.hills,
            Terrain::Mountains => self.mountains,
            Terrain::Desert => self.desert,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneAxis {
    /// Lane `r` tile `j` sits in absolute column `starts[r] + j`.
    Rows { starts: &'static [usize] },
    /// Lane `c` is column `c`.
    Columns,
}

#[derive(Debug)]
pub struct Topology {
    pub player_count: PlayerCount,
    pub axis: LaneAxis,
    pub lane_lengths: &'static [usize],
    pub column_heights: &'static [usize],
    pub terrain: TerrainCounts,
    pub tokens: &'static [Token],
}

const FOUR_PLAYER: Topology = Topology {
    player_count: PlayerCount::Four,
    axis: LaneAxis::Rows { starts: &[0, 1, 0, 0, 2] },
    lane_lengths: &[3, 4, 5, 4, 3],
    column_heights: &[3, 4, 5, 4, 3],
    terrain: TerrainCounts {
        forest: 4,
        pasture: 4,
        fields: 4,
        hills: 3,
        mountains: 3,
        desert: 1,
    },
    tokens: &[5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11],
};

const FIVE_PLAYER: Topology = Topology {
    player_count: PlayerCount::Five,
    axis: LaneAxis::Columns,
    lane_lengths: &[4, 5, 6, 5, 4],
    column_heights: &[4, 5, 6, 5, 4],
    terrain: TerrainCounts {
        forest: 5,
        pasture: 5,
        fields: 5,
        hills: 4,
        mountains: 4,
        desert: 1,
    },
    tokens: &[5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11, 3, 6, 8, 11, 10],
};

const SIX_PLAYER: Topology = Topology {
    player_count: PlayerCount::Six,
    axis: LaneAxis::Columns,
    lane_lengths: &[3, 4, 5, 6, 5, 4, 3],
    column_heights: &[3, 4, 5, 6, 5, 4, 3],
    terrain: TerrainCounts {
        forest: 6,
        pasture: 6,
        fields: 6,
        hills: 5,
        mountains: 5,
        desert: 2,
    },
    tokens: &[
        2, 5, 4, 6, 3, 9, 8, 11, 11, 10, 6, 3, 8, 4, 8, 10, 11, 12, 10, 5, 4, 9, 5, 9, 12, 3, 2, 6,
    ],
};

const _: () = assert!(FOUR_PLAYER.is_consistent(), "four-player topology tables disagree");
const _: () = assert!(FIVE_PLAYER.is_consistent(), "five-player topology tables disagree");
const _: () = assert!(SIX_PLAYER.is_consistent(), "six-player topology tables disagree");

static TOPOLOGIES: [Topology; 3] = [FOUR_PLAYER, FIVE_PLAYER, SIX_PLAYER];

pub fn topology(player_count: PlayerCount) -> &'static Topology {
    match player_count {
        PlayerCount::Four => &TOPOLOGIES[0],
        PlayerCount::Five => &TOPOLOGIES[1],
        PlayerCount::Six => &TOPOLOGIES[2],
    }
}

impl Topology {
    pub fn tile_count(&self) -> usize {
        self.terrain.total()
    }

    pub fn column_count(&self) -> usize {
        self.column_heights.len()
    }

    pub fn max_column_height(&self) -> usize {
        self.column_heights.iter().copied().max().unwrap_or(0)
    }

    /// Absolute cell for every stored tile, indexed like the stored lanes.
    pub fn lane_cells(&self) -> Vec<Vec<Cell>> {
        match self.axis {
            LaneAxis::Rows { starts } => {
                let mut filled = vec![0_usize; self.column_count()];
                self.lane_lengths
                    .iter()
                    .zip(starts)
                    .map(|(&length, &start)| {
                        (start..start + length)
                            .map(|column| {
                                let row = filled[column];
                                filled[column] += 1;
                                Cell { column, row }
                            })
                            .collect()
                    })
                    .collect()
            }
            LaneAxis::Columns => self
                .lane_lengths
                .iter()
                .enumerate()
                .map(|(column, &length)| (0..length).map(|row| Cell { column, row }).collect())
                .collect(),
        }
    }

    /// Inverse of [`Topology::lane_cells`]: `(lane, index)` for each column, top to bottom.
    pub fn column_slots(&self) -> Vec<Vec<(usize, usize)>> {
        let mut columns: Vec<Vec<(usize, usize)>> =
            self.column_heights.iter().map(|&height| Vec::with_capacity(height)).collect();
        let mut cells: Vec<(Cell, (usize, usize))> = self
            .lane_cells()
            .into_iter()
            .enumerate()
            .flat_map(|(lane, lane_cells)| {
                lane_cells.into_iter().enumerate().map(move |(index, cell)| (cell, (lane, index)))
            })
            .collect();
        cells.sort_unstable_by_key(|(cell, _)| *cell);
        for (cell, slot) in cells {
            columns[cell.column].push(slot);
        }
        columns
    }

    pub fn cell_of(&self, lane: usize, index: usize) -> Option<Cell> {
        self.lane_cells().get(lane)?.get(index).copied()
    }

    /// Number-placement order: outer ring clockwise from the top-left tile, then
    /// each inner ring the same way, ending at the centre.
    pub fn spiral(&self) -> Vec<Cell> {
        let mut ring: Vec<RingColumn> = self
            .column_heights
            .iter()
            .enumerate()
            .map(|(column, &height)| RingColumn { column, top: 0, end: height })
            .collect();
        let mut order = Vec::with_capacity(self.tile_count());

        while let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
            if ring.len() == 1 {
                order.extend((first.top..first.end).map(|row| first.cell(row)));
                break;
            }

            order.extend(ring.iter().map(|column| column.cell(column.top)));
            order.extend((last.top + 1..last.end).map(|row| last.cell(row)));
            order.extend(
                ring[..ring.len() - 1]
                    .iter()
                    .rev()
                    .filter(|column| column.end - column.top > 1)
                    .map(|column| column.cell(column.end - 1)),
            );
            order.extend((first.top + 1..first.end - 1).rev().map(|row| first.cell(row)));

            ring = ring[1..ring.len() - 1]
                .iter()
                .filter(|column| column.end - column.top > 2)
                .map(|column| RingColumn {
                    column: column.column,
                    top: column.top + 1,
                    end: column.end - 1,
                })
                .collect();
        }

        order
    }

    const fn is_consistent(&self) -> bool {
        let tiles = self.terrain.total();
        if sum(self.lane_lengths) != tiles || sum(self.column_heights) != tiles {
            return false;
        }
        if self.tokens.len() != self.terrain.producing() {
            return false;
        }
        let mut i = 0;
        while i < self.tokens.len() {
            let token = self.tokens[i];
            if token < 2 || token > 12 || token == 7 {
                return false;
            }
            i += 1;
        }
        match self.axis {
            LaneAxis::Rows { starts } => {
                if starts.len() != self.lane_lengths.len() {
                    return false;
                }
                let mut lane = 0;
                while lane < starts.len() {
                    if starts[lane] + self.lane_lengths[lane] > self.column_heights.len() {
                        return false;
                    }
                    lane += 1;
                }
                true
            }
            LaneAxis::Columns => same_lengths(self.lane_lengths, self.column_heights),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct RingColumn {
    column: usize,
    top: usize,
    end: usize,
}

impl RingColumn {
    fn cell(self, row: usize) -> Cell {
        Cell { column: self.column, row }
    }
}

const fn sum(values: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < values.len() {
        total += values[i];
        i += 1;
    }
    total
}

const fn same_lengths(left: &[usize], right: &[usize]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut i = 0;
    while i < left.len() {
        if left[i] != right[i] {
            return false;
        }
        i += 1;
    }
    true
}
