pub mod board_file;
pub mod board_store;
pub mod config;
pub mod seed;
pub mod session;

use hexmap::Board;

pub const APP_NAME: &str = "HexBoardCompanion";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a board fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}

/// One line per screen column, top to bottom: terrain and token (`--` for none).
pub fn render_board_text(board: &Board) -> String {
    board
        .columns()
        .iter()
        .enumerate()
        .map(|(column, tiles)| {
            let cells: Vec<String> = tiles
                .iter()
                .map(|tile| match tile.number {
                    Some(number) => format!("{:<9} {number:>2}", tile.terrain.as_str()),
                    None => format!("{:<9} --", tile.terrain.as_str()),
                })
                .collect();
            format!("{column}: {}", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
