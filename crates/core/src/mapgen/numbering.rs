//! Number-token placement along the spiral.
//!
//! Generation and re-assignment share [`assign_numbers`], so a stored board
//! renumbered today gets exactly what a fresh board with the same terrain gets.

use log::debug;

use crate::board::Board;
use crate::types::Tile;

use super::topology::Topology;

/// Clears every number, then hands out tokens in spiral order, skipping desert.
///
/// Stops when the token supply runs out; the tables guarantee supply equals the
/// producing tile count, so that only happens for boards with unusual terrain.
pub(super) fn assign_numbers(lanes: &mut [Vec<Tile>], topology: &Topology) {
    for tile in lanes.iter_mut().flatten() {
        tile.number = None;
    }

    let slots = topology.column_slots();
    let mut tokens = topology.tokens.iter().copied();
    for cell in topology.spiral() {
        let Some(&(lane, index)) = slots.get(cell.column).and_then(|column| column.get(cell.row))
        else {
            continue;
        };
        let Some(tile) = lanes.get_mut(lane).and_then(|tiles| tiles.get_mut(index)) else {
            continue;
        };
        if tile.terrain.is_desert() {
            continue;
        }
        let Some(token) = tokens.next() else {
            break;
        };
        tile.number = Some(token);
    }

    let leftover = tokens.count();
    if leftover > 0 {
        debug!("{leftover} tokens left unplaced for {} players", topology.player_count);
    }
}

/// Recomputes number placement for a board whose terrain is trusted but whose
/// numbers may follow an older spiral. Terrain is left untouched.
pub fn reassign_numbers(board: &Board) -> Board {
    let player_count = board.player_count();
    let mut lanes = board.lanes().to_vec();
    assign_numbers(&mut lanes, board.topology());
    debug!("reassigned numbers on {player_count}-player board");
    Board::from_parts(player_count, lanes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::topology::topology;
    use crate::types::{PlayerCount, Terrain};

    fn terrain_lanes(rows: &[&str]) -> Vec<Vec<Tile>> {
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|code| {
                        Tile::unnumbered(match code {
                            'F' => Terrain::Forest,
                            'P' => Terrain::Pasture,
                            'W' => Terrain::Fields,
                            'H' => Terrain::Hills,
                            'M' => Terrain::Mountains,
                            _ => Terrain::Desert,
                        })
                    })
                    .collect()
            })
            .collect()
    }

    fn numbers(lanes: &[Vec<Tile>]) -> Vec<Vec<Option<u8>>> {
        lanes.iter().map(|lane| lane.iter().map(|tile| tile.number).collect()).collect()
    }

    #[test]
    fn four_player_tokens_follow_the_spiral() {
        let mut lanes = terrain_lanes(&["FWF", "HFMP", "HMMWW", "FPPH", "WPD"]);
        assign_numbers(&mut lanes, topology(PlayerCount::Four));

        assert_eq!(
            numbers(&lanes),
            vec![
                vec![Some(5), Some(2), Some(6)],
                vec![Some(10), Some(9), Some(3), Some(8)],
                vec![Some(8), Some(3), Some(11), Some(4), Some(10)],
                vec![Some(4), Some(11), Some(6), Some(5)],
                vec![Some(12), Some(9), None],
            ]
        );
    }

    #[test]
    fn desert_on_the_spiral_start_shifts_tokens_along() {
        let mut lanes = terrain_lanes(&["DWF", "HFMP", "HMMWW", "FPPH", "WPF"]);
        assign_numbers(&mut lanes, topology(PlayerCount::Four));

        assert_eq!(lanes[0][0].number, None);
        assert_eq!(lanes[0][1].number, Some(5), "second spiral cell takes the first token");
    }

    #[test]
    fn surplus_producing_tiles_stay_unnumbered_instead_of_panicking() {
        let mut lanes = terrain_lanes(&["FWF", "HFMP", "HMMWW", "FPPH", "WPF"]);
        assign_numbers(&mut lanes, topology(PlayerCount::Four));

        let numbered = lanes.iter().flatten().filter(|tile| tile.number.is_some()).count();
        assert_eq!(numbered, 18);
        assert_eq!(lanes[2][2].number, None, "centre is last on the spiral and runs dry");
    }

    #[test]
    fn stale_numbers_are_cleared_first() {
        let mut lanes = terrain_lanes(&["FWF", "HFMP", "HMMWW", "FPPH", "WPD"]);
        lanes[4][2].number = Some(7);
        assign_numbers(&mut lanes, topology(PlayerCount::Four));
        assert_eq!(lanes[4][2].number, None);
    }
}
