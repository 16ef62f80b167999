//! Core types for the word-matching puzzle.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of tiles on a freshly dealt board.
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Maximum number of tiles that may be face up at the same time.
pub const MAX_FLIPPED: usize = 2;

/// How long the host should leave the second flipped tile visible before
/// resolving the attempt. A scheduling hint for the presentation layer,
/// not a hard real-time bound.
pub const RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// One bilingual word pair: two display terms plus optional pronunciation
/// audio references for each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub term_a: String,
    pub term_b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_b: Option<String>,
}

impl WordPair {
    /// Pair without audio references.
    pub fn new(term_a: impl Into<String>, term_b: impl Into<String>) -> Self {
        Self {
            term_a: term_a.into(),
            term_b: term_b.into(),
            audio_a: None,
            audio_b: None,
        }
    }
}

/// Which half of a word pair a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Pronunciation playback setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    None,
    All,
    #[serde(rename = "left")]
    LeftOnly,
    #[serde(rename = "right")]
    RightOnly,
}

impl Default for AudioMode {
    fn default() -> Self {
        Self::None
    }
}

impl AudioMode {
    /// Whether playback applies to a tile on the given side.
    pub fn permits(self, side: Side) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::LeftOnly => side == Side::Left,
            Self::RightOnly => side == Side::Right,
        }
    }

    /// Get the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::LeftOnly => "left",
            Self::RightOnly => "right",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "all" => Some(Self::All),
            "left" => Some(Self::LeftOnly),
            "right" => Some(Self::RightOnly),
            _ => None,
        }
    }
}

/// Visual state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    Hidden,
    Flipped,
    Solved,
}

impl Default for TileState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One flippable card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Shared by the two tiles dealt from the same word pair.
    pub pair_key: usize,
    /// Face text shown while the tile is flipped or solved.
    pub text: String,
    pub state: TileState,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl Tile {
    pub(crate) fn new(pair_key: usize, side: Side, text: String, audio: Option<String>) -> Self {
        Self {
            pair_key,
            text,
            state: TileState::Hidden,
            side,
            audio,
        }
    }
}
