//! Storage port for persisted boards, one slot per player count.

use std::collections::BTreeMap;
use std::io;

use hexmap::{BoardRecord, PlayerCount};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("board store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("stored board for {player_count} players is unreadable: {message}")]
    Corrupt { player_count: PlayerCount, message: String },
}

pub trait BoardStore {
    fn load(&self, player_count: PlayerCount) -> Result<Option<BoardRecord>, StoreError>;
    fn save(&mut self, player_count: PlayerCount, record: &BoardRecord) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBoardStore {
    slots: BTreeMap<PlayerCount, BoardRecord>,
    writes: usize,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, player_count: PlayerCount, record: BoardRecord) -> Self {
        self.slots.insert(player_count, record);
        self
    }

    /// Number of `save` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BoardStore for MemoryBoardStore {
    fn load(&self, player_count: PlayerCount) -> Result<Option<BoardRecord>, StoreError> {
        Ok(self.slots.get(&player_count).cloned())
    }

    fn save(&mut self, player_count: PlayerCount, record: &BoardRecord) -> Result<(), StoreError> {
        self.slots.insert(player_count, record.clone());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_keeps_one_slot_per_player_count() {
        let mut store = MemoryBoardStore::new();
        let four = BoardRecord { seed: 4, board: Vec::new() };
        let six = BoardRecord { seed: 6, board: Vec::new() };

        store.save(PlayerCount::Four, &four).expect("save");
        store.save(PlayerCount::Six, &six).expect("save");

        assert_eq!(store.load(PlayerCount::Four).expect("load"), Some(four));
        assert_eq!(store.load(PlayerCount::Five).expect("load"), None);
        assert_eq!(store.load(PlayerCount::Six).expect("load"), Some(six));
        assert_eq!(store.writes(), 2);
    }
}
