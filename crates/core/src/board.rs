//! Board values and their persisted shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

use crate::mapgen::{Topology, topology};
use crate::types::{Cell, PlayerCount, Terrain, Tile};

/// A complete board: tiles stored lane by lane as laid out by the player count's topology.
///
/// Boards are replaced wholesale; nothing mutates a tile after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    player_count: PlayerCount,
    lanes: Vec<Vec<Tile>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardShapeError {
    #[error("a {player_count}-player board has {expected} lanes, found {found}")]
    LaneCount { player_count: PlayerCount, expected: usize, found: usize },
    #[error("lane {lane} of a {player_count}-player board holds {expected} tiles, found {found}")]
    LaneLength { player_count: PlayerCount, lane: usize, expected: usize, found: usize },
}

impl Board {
    /// Accepts lanes whose shape matches the topology for `player_count`.
    ///
    /// Terrain counts are not checked, so a board stored under different tables
    /// can still be renumbered.
    pub fn from_lanes(
        player_count: PlayerCount,
        lanes: Vec<Vec<Tile>>,
    ) -> Result<Self, BoardShapeError> {
        let topology = topology(player_count);
        if lanes.len() != topology.lane_lengths.len() {
            return Err(BoardShapeError::LaneCount {
                player_count,
                expected: topology.lane_lengths.len(),
                found: lanes.len(),
            });
        }
        for (lane, (tiles, &expected)) in lanes.iter().zip(topology.lane_lengths).enumerate() {
            if tiles.len() != expected {
                return Err(BoardShapeError::LaneLength {
                    player_count,
                    lane,
                    expected,
                    found: tiles.len(),
                });
            }
        }
        Ok(Self { player_count, lanes })
    }

    pub(crate) fn from_parts(player_count: PlayerCount, lanes: Vec<Vec<Tile>>) -> Self {
        debug_assert!(Self::from_lanes(player_count, lanes.clone()).is_ok());
        Self { player_count, lanes }
    }

    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    pub fn topology(&self) -> &'static Topology {
        topology(self.player_count)
    }

    pub fn lanes(&self) -> &[Vec<Tile>] {
        &self.lanes
    }

    pub fn into_lanes(self) -> Vec<Vec<Tile>> {
        self.lanes
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.lanes.iter().flatten()
    }

    pub fn terrain_count(&self, terrain: Terrain) -> usize {
        self.tiles().filter(|tile| tile.terrain == terrain).count()
    }

    pub fn numbered_count(&self) -> usize {
        self.tiles().filter(|tile| tile.number.is_some()).count()
    }

    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        let slots = self.topology().column_slots();
        let &(lane, index) = slots.get(cell.column)?.get(cell.row)?;
        self.lanes.get(lane)?.get(index)
    }

    /// Tiles regrouped into absolute columns, each top to bottom.
    pub fn columns(&self) -> Vec<Vec<Tile>> {
        self.topology()
            .column_slots()
            .into_iter()
            .map(|slots| slots.into_iter().map(|(lane, index)| self.lanes[lane][index]).collect())
            .collect()
    }

    pub fn column_heights(&self) -> Vec<usize> {
        self.columns().iter().map(Vec::len).collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![self.player_count.get()];
        bytes.extend((self.lanes.len() as u32).to_le_bytes());
        for lane in &self.lanes {
            bytes.extend((lane.len() as u32).to_le_bytes());
            for tile in lane {
                bytes.push(match tile.terrain {
                    Terrain::Forest => 0,
                    Terrain::Pasture => 1,
                    Terrain::Fields => 2,
                    Terrain::Hills => 3,
                    Terrain::Mountains => 4,
                    Terrain::Desert => 5,
                });
                bytes.push(tile.number.unwrap_or(0));
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn to_record(&self, seed: u64) -> BoardRecord {
        BoardRecord { seed, board: self.lanes.clone() }
    }
}

/// Persisted form of a board: the seed it came from and its raw lanes.
///
/// One record is kept per player count; the player count is the slot key and
/// is not part of the record itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    pub seed: u64,
    pub board: Vec<Vec<Tile>>,
}

impl BoardRecord {
    pub fn into_board(self, player_count: PlayerCount) -> Result<Board, BoardShapeError> {
        Board::from_lanes(player_count, self.board)
    }
}
