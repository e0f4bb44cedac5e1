//! File-backed board slots: one pretty-printed JSON file per player count.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hexmap::{BoardRecord, PlayerCount};

use crate::APP_NAME;
use crate::board_store::{BoardStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileBoardStore {
    dir: PathBuf,
}

impl FileBoardStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn get_default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| proj_dirs.data_dir().to_path_buf())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, player_count: PlayerCount) -> PathBuf {
        self.dir.join(format!("last_map_{player_count}.json"))
    }
}

fn write_atomic(path: &Path, json: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl BoardStore for FileBoardStore {
    fn load(&self, player_count: PlayerCount) -> Result<Option<BoardRecord>, StoreError> {
        let content = match fs::read_to_string(self.slot_path(player_count)) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt { player_count, message: e.to_string() })?;
        Ok(Some(record))
    }

    fn save(&mut self, player_count: PlayerCount, record: &BoardRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
        write_atomic(&self.slot_path(player_count), &json)?;
        Ok(())
    }
}
