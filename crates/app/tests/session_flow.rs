use std::fs;

use app::board_file::FileBoardStore;
use app::board_store::BoardStore;
use app::session::BoardSession;
use hexmap::{BoardRecord, PlayerCount, Tile, generate_board};
use tempfile::tempdir;

#[test]
fn generate_then_reload_from_disk() {
    let dir = tempdir().expect("tempdir");
    let mut session = BoardSession::new(FileBoardStore::new(dir.path()));

    let generated = session.regenerate(PlayerCount::Four, 1_700_000_000_000).expect("generate");
    let mut reopened = BoardSession::new(FileBoardStore::new(dir.path()));
    let loaded = reopened.load(PlayerCount::Four).expect("load").expect("slot filled");

    assert_eq!(loaded, generated);
    assert_eq!(loaded.seed, 1_700_000_000_000, "the full timestamp seed is kept on disk");
}

#[test]
fn stale_slot_on_disk_is_normalized_once() {
    let dir = tempdir().expect("tempdir");
    let mut store = FileBoardStore::new(dir.path());
    let fresh = generate_board(PlayerCount::Six, 77_u64);

    let mut numbers: Vec<Option<u8>> = fresh.tiles().map(|tile| tile.number).collect();
    numbers.rotate_left(1);
    let mut numbers = numbers.into_iter();
    let stale: Vec<Vec<_>> = fresh
        .lanes()
        .iter()
        .map(|lane| {
            lane.iter()
                .map(|tile| Tile { terrain: tile.terrain, number: numbers.next().flatten() })
                .collect()
        })
        .collect();
    store.save(PlayerCount::Six, &BoardRecord { seed: 77, board: stale }).expect("save stale");

    let mut session = BoardSession::new(store);
    let loaded = session.load(PlayerCount::Six).expect("load").expect("slot filled");
    let rewritten = session.store().load(PlayerCount::Six).expect("reload").expect("slot filled");

    assert_eq!(loaded.board, fresh);
    assert_eq!(rewritten, fresh.to_record(77));
}

#[test]
fn corrupt_slot_prompts_regeneration() {
    let dir = tempdir().expect("tempdir");
    let store = FileBoardStore::new(dir.path());
    fs::write(store.slot_path(PlayerCount::Five), "not json at all").expect("write");

    let mut session = BoardSession::new(store);
    assert_eq!(session.load(PlayerCount::Five).expect("corrupt slot is not an error"), None);

    let generated = session.regenerate(PlayerCount::Five, 5).expect("regenerate");
    let loaded = session.load(PlayerCount::Five).expect("load").expect("slot filled");
    assert_eq!(loaded, generated);
}
