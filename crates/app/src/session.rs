//! Load/regenerate flow around a [`BoardStore`].
//!
//! Every load renumbers the stored terrain against the current spiral and
//! writes the result back when it changed. A slot that cannot be read or does
//! not fit the topology is treated as "no board" so the caller regenerates.

use hexmap::{Board, PlayerCount, generate_board, reassign_numbers};
use log::{debug, warn};

use crate::board_store::{BoardStore, StoreError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionBoard {
    pub seed: u64,
    pub board: Board,
}

pub struct BoardSession<S> {
    store: S,
}

impl<S: BoardStore> BoardSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn load(&mut self, player_count: PlayerCount) -> Result<Option<SessionBoard>, StoreError> {
        let record = match self.store.load(player_count) {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(None),
            Err(err @ StoreError::Corrupt { .. }) => {
                warn!("discarding stored board: {err}");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let seed = record.seed;
        let stored = match record.into_board(player_count) {
            Ok(board) => board,
            Err(err) => {
                warn!("discarding stored board: {err}");
                return Ok(None);
            }
        };

        let board = reassign_numbers(&stored);
        if board != stored {
            debug!("stored {player_count}-player board used an older numbering, rewriting");
            self.store.save(player_count, &board.to_record(seed))?;
        }
        Ok(Some(SessionBoard { seed, board }))
    }

    pub fn regenerate(
        &mut self,
        player_count: PlayerCount,
        seed: u64,
    ) -> Result<SessionBoard, StoreError> {
        let board = generate_board(player_count, seed);
        self.store.save(player_count, &board.to_record(seed))?;
        Ok(SessionBoard { seed, board })
    }
}
