use anyhow::{Result, bail};
use clap::Parser;
use hexmap::{PlayerCount, generate_board, reassign_numbers, topology};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    iterations: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting board fuzz on seed {} for {} boards...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for iteration in 0..args.iterations {
        let player_count = choose(&mut rng, &PlayerCount::ALL);
        let board_seed = rng.next_u64();
        let topology = topology(player_count);
        let board = generate_board(player_count, board_seed);

        if board != generate_board(player_count, board_seed) {
            bail!("iteration {iteration}: seed {board_seed} is not deterministic");
        }
        if board.column_heights() != topology.column_heights {
            bail!("iteration {iteration}: column profile drifted for seed {board_seed}");
        }
        for tile in board.tiles() {
            if tile.terrain.is_desert() != tile.number.is_none() {
                bail!("iteration {iteration}: {tile:?} breaks desert/number pairing");
            }
        }
        if board.numbered_count() > topology.tokens.len() {
            bail!("iteration {iteration}: more numbers than tokens for seed {board_seed}");
        }
        if reassign_numbers(&board) != board {
            bail!("iteration {iteration}: renumbering moved tokens for seed {board_seed}");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
