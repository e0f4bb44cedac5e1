use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number-token value printed on a producing tile (2..=12, never 7).
pub type Token = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Forest,
    Pasture,
    Fields,
    Hills,
    Mountains,
    Desert,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Forest,
        Terrain::Pasture,
        Terrain::Fields,
        Terrain::Hills,
        Terrain::Mountains,
        Terrain::Desert,
    ];

    pub fn is_desert(self) -> bool {
        self == Terrain::Desert
    }

    /// Resource card produced by this terrain, `None` for desert.
    pub fn resource(self) -> Option<&'static str> {
        match self {
            Terrain::Forest => Some("lumber"),
            Terrain::Pasture => Some("wool"),
            Terrain::Fields => Some("grain"),
            Terrain::Hills => Some("brick"),
            Terrain::Mountains => Some("ore"),
            Terrain::Desert => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Forest => "forest",
            Terrain::Pasture => "pasture",
            Terrain::Fields => "fields",
            Terrain::Hills => "hills",
            Terrain::Mountains => "mountains",
            Terrain::Desert => "desert",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    pub number: Option<Token>,
}

impl Tile {
    pub fn unnumbered(terrain: Terrain) -> Self {
        Self { terrain, number: None }
    }
}

/// Absolute board coordinate: screen column and top-to-bottom slot inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    Four,
    Five,
    Six,
}

impl PlayerCount {
    pub const ALL: [PlayerCount; 3] = [PlayerCount::Four, PlayerCount::Five, PlayerCount::Six];

    pub fn get(self) -> u8 {
        match self {
            PlayerCount::Four => 4,
            PlayerCount::Five => 5,
            PlayerCount::Six => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unsupported player count {0}: boards exist for 4, 5 or 6 players")]
pub struct UnsupportedPlayerCount(pub u8);

impl TryFrom<u8> for PlayerCount {
    type Error = UnsupportedPlayerCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(PlayerCount::Four),
            5 => Ok(PlayerCount::Five),
            6 => Ok(PlayerCount::Six),
            other => Err(UnsupportedPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(value: PlayerCount) -> Self {
        value.get()
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_serializes_as_lowercase_names() {
        let json = serde_json::to_string(&Tile { terrain: Terrain::Mountains, number: Some(8) })
            .expect("serialize");
        assert_eq!(json, r#"{"terrain":"mountains","number":8}"#);

        let desert: Tile =
            serde_json::from_str(r#"{"terrain":"desert","number":null}"#).expect("deserialize");
        assert_eq!(desert, Tile::unnumbered(Terrain::Desert));
    }

    #[test]
    fn player_count_rejects_unsupported_values() {
        assert_eq!(PlayerCount::try_from(5), Ok(PlayerCount::Five));
        assert_eq!(PlayerCount::try_from(3), Err(UnsupportedPlayerCount(3)));
        assert_eq!(PlayerCount::try_from(7), Err(UnsupportedPlayerCount(7)));
        assert!(serde_json::from_str::<PlayerCount>("8").is_err());
    }

    #[test]
    fn only_desert_lacks_a_resource() {
        for terrain in Terrain::ALL {
            assert_eq!(terrain.resource().is_none(), terrain.is_desert(), "{terrain}");
        }
    }
}
