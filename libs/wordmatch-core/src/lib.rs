//! Core library for the word-matching puzzle.
//!
//! Provides:
//! - Word-pair catalog keyed by (language, category)
//! - Line-oriented parser for word-pair list files
//! - The flip/match board state machine
//! - A host-facing session tying catalog and board together
//! - Shared types (WordPair, Tile, AudioMode, ...)

pub mod catalog;
pub mod error;
pub mod game;
pub mod parser;
pub mod session;
pub mod types;

mod rng;

pub use catalog::{CatalogKey, WordPairCatalog};
pub use error::{GameError, ParseError, Result};
pub use game::{FlipOutcome, MatchGame, Resolution, TileReveal};
pub use parser::parse;
pub use session::MatchSession;
pub use types::{
    AudioMode, Side, Tile, TileState, WordPair, DEFAULT_BOARD_SIZE, MAX_FLIPPED, RESOLVE_DELAY,
};
