use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hexmap::{BoardRecord, PlayerCount, reassign_numbers};

/// Renumber a stored board file against the current spiral order.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the stored board JSON (`{"seed": .., "board": [[..]]}`)
    #[arg(short, long)]
    input: PathBuf,
    /// Player count the board was stored under
    #[arg(short, long)]
    players: u8,
    /// Where to write the renumbered board; rewrites the input when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let player_count = PlayerCount::try_from(args.players)?;

    let record_data = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read board file: {}", args.input.display()))?;
    let record: BoardRecord =
        serde_json::from_str(&record_data).with_context(|| "Failed to deserialize board JSON")?;
    let seed = record.seed;

    let stored = record
        .into_board(player_count)
        .with_context(|| format!("Board does not fit the {player_count}-player layout"))?;
    let renumbered = reassign_numbers(&stored);
    let changed = stored
        .tiles()
        .zip(renumbered.tiles())
        .filter(|(before, after)| before.number != after.number)
        .count();

    let output = args.output.unwrap_or(args.input);
    let json = serde_json::to_string_pretty(&renumbered.to_record(seed))?;
    fs::write(&output, json)
        .with_context(|| format!("Failed to write board file: {}", output.display()))?;

    println!("Renumber complete.");
    println!("Players: {player_count}");
    println!("Tiles changed: {changed}");
    println!("Fingerprint: 0x{:016x}", renumbered.fingerprint());

    Ok(())
}
