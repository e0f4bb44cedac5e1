use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use app::board_file::FileBoardStore;
use app::config::{AppConfig, DATA_DIR_ENV};
use app::seed::{SeedChoice, generate_runtime_seed, resolve_seed};
use app::session::{BoardSession, SessionBoard};
use app::{format_fingerprint, format_seed, render_board_text};
use clap::{Parser, Subcommand};
use hexmap::{PlayerCount, layout_board};

#[derive(Parser)]
#[command(author, version, about = "Board generator for settlers-style tabletop games", long_about = None)]
struct Cli {
    /// Path to a companion.toml; defaults to the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh board and store it in the player-count slot
    Generate {
        #[arg(short, long)]
        players: Option<u8>,
        /// Seed to generate from; the current time in milliseconds when absent
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Show the stored board, renumbering it against the current spiral
    Show {
        #[arg(short, long)]
        players: Option<u8>,
    },
    /// Print the pixel layout of the stored board as JSON
    Layout {
        #[arg(short, long)]
        players: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::discover(cli.config.as_deref())?;

    let env_override = env::var(DATA_DIR_ENV).ok();
    let data_dir = config
        .resolve_data_dir(env_override.as_deref(), FileBoardStore::get_default_dir())
        .ok_or_else(|| anyhow!("no data directory available; set {DATA_DIR_ENV}"))?;
    let mut session = BoardSession::new(FileBoardStore::new(data_dir));

    match cli.command {
        Commands::Generate { players, seed } => {
            let player_count = player_count(players, &config)?;
            let choice = resolve_seed(seed, generate_runtime_seed());
            let generated = session
                .regenerate(player_count, choice.value())
                .with_context(|| format!("Failed to store {player_count}-player board"))?;
            if let SeedChoice::Generated(_) = choice {
                println!("Generated seed: {}", format_seed(choice.value()));
            }
            print_board(player_count, &generated);
        }
        Commands::Show { players } => {
            let player_count = player_count(players, &config)?;
            match load(&mut session, player_count)? {
                Some(stored) => print_board(player_count, &stored),
                None => println!("No {player_count}-player board stored. Run `generate` first."),
            }
        }
        Commands::Layout { players } => {
            let player_count = player_count(players, &config)?;
            let stored = load(&mut session, player_count)?
                .ok_or_else(|| anyhow!("no {player_count}-player board stored"))?;
            let layout = layout_board(&stored.board, &config.tile);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }

    Ok(())
}

fn player_count(players: Option<u8>, config: &AppConfig) -> Result<PlayerCount> {
    let player_count = match players {
        Some(players) => PlayerCount::try_from(players)?,
        None => config.default_player_count()?,
    };
    Ok(player_count)
}

fn load(
    session: &mut BoardSession<FileBoardStore>,
    player_count: PlayerCount,
) -> Result<Option<SessionBoard>> {
    session
        .load(player_count)
        .with_context(|| format!("Failed to load {player_count}-player board"))
}

fn print_board(player_count: PlayerCount, stored: &SessionBoard) {
    println!("Players: {player_count}");
    println!("Seed: {}", format_seed(stored.seed));
    println!("Fingerprint: {}", format_fingerprint(stored.board.fingerprint()));
    println!("{}", render_board_text(&stored.board));
}
