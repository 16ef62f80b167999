//! Host-facing session: the catalog plus the currently dealt board.

use crate::catalog::WordPairCatalog;
use crate::error::GameError;
use crate::game::{FlipOutcome, MatchGame, Resolution};
use crate::types::{AudioMode, DEFAULT_BOARD_SIZE};

/// Everything a host talks to: the word-pair catalog, the current board
/// (if one has been dealt) and the audio setting.
///
/// Deal failures are recoverable: when the requested key is missing or its
/// list is too short, the previous board stays valid and untouched.
#[derive(Debug, Clone)]
pub struct MatchSession {
    catalog: WordPairCatalog,
    game: Option<MatchGame>,
    audio_mode: AudioMode,
    board_size: usize,
}

impl MatchSession {
    pub fn new(catalog: WordPairCatalog) -> Self {
        Self::with_board_size(catalog, DEFAULT_BOARD_SIZE)
    }

    /// Session with a non-default (even) board size.
    pub fn with_board_size(catalog: WordPairCatalog, board_size: usize) -> Self {
        Self {
            catalog,
            game: None,
            audio_mode: AudioMode::default(),
            board_size,
        }
    }

    /// Deal a new board for the (language, category) key, replacing the
    /// current one. On failure the previous board remains in play.
    pub fn deal_new_board(&mut self, language: &str, category: &str) -> Result<(), GameError> {
        let pairs = self.catalog.lookup(language, category)?;
        let game = MatchGame::deal(pairs, self.board_size, self.audio_mode)?;
        self.game = Some(game);
        Ok(())
    }

    /// Deliver a flip; a no-op until a board has been dealt.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        match self.game.as_mut() {
            Some(game) => game.flip(position),
            None => FlipOutcome::Ignored,
        }
    }

    /// Resolve the pending two-tile attempt, if any.
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        self.game.as_mut().and_then(MatchGame::resolve_pending)
    }

    pub fn is_complete(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.is_complete())
    }

    /// The current board, for rendering.
    pub fn game(&self) -> Option<&MatchGame> {
        self.game.as_ref()
    }

    pub fn audio_mode(&self) -> AudioMode {
        self.audio_mode
    }

    /// Applies to the current board immediately and to subsequent deals.
    pub fn set_audio_mode(&mut self, mode: AudioMode) {
        self.audio_mode = mode;
        if let Some(game) = self.game.as_mut() {
            game.set_audio_mode(mode);
        }
    }

    pub fn list_languages(&self) -> Vec<&str> {
        self.catalog.list_languages()
    }

    pub fn list_categories(&self, language: &str) -> Vec<&str> {
        self.catalog.list_categories(language)
    }

    pub fn pick_random_category(&self, language: &str) -> Option<&str> {
        self.catalog.pick_random_category(language)
    }

    pub fn catalog(&self) -> &WordPairCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TileState, WordPair};
    use pretty_assertions::assert_eq;

    fn animals_catalog() -> WordPairCatalog {
        let mut catalog = WordPairCatalog::new();
        let pairs: Vec<WordPair> = (0..10)
            .map(|i| WordPair::new(format!("animal{i}"), format!("animal-fr{i}")))
            .collect();
        catalog.add_entries("English", "Animals", pairs);
        catalog.add_entries(
            "English",
            "Colors",
            vec![WordPair::new("red", "rouge"), WordPair::new("blue", "bleu")],
        );
        catalog
    }

    #[test]
    fn deal_new_board_builds_a_full_board() {
        let mut session = MatchSession::new(animals_catalog());
        session.deal_new_board("English", "Animals").unwrap();

        let game = session.game().unwrap();
        assert_eq!(game.board_size(), 20);
        assert!(game.tiles().all(|t| t.state == TileState::Hidden));
    }

    #[test]
    fn deal_unknown_language_keeps_previous_board() {
        let mut session = MatchSession::new(animals_catalog());
        session.deal_new_board("English", "Animals").unwrap();
        assert!(matches!(session.flip(0), FlipOutcome::First(_)));

        let result = session.deal_new_board("German", "Animals");
        assert_eq!(
            result,
            Err(GameError::ListNotFound {
                language: "German".to_string(),
                category: "Animals".to_string(),
            })
        );

        // Previous board untouched, mid-attempt state included.
        let game = session.game().unwrap();
        assert_eq!(game.flipped_count(), 1);
        assert_eq!(game.tile(0).unwrap().state, TileState::Flipped);
    }

    #[test]
    fn deal_short_list_keeps_previous_board() {
        let mut session = MatchSession::new(animals_catalog());
        session.deal_new_board("English", "Animals").unwrap();

        let result = session.deal_new_board("English", "Colors");
        assert_eq!(
            result,
            Err(GameError::InsufficientPairs { have: 2, need: 10 })
        );
        assert!(session.game().is_some());
        assert_eq!(session.game().unwrap().board_size(), 20);
    }

    #[test]
    fn flip_before_any_deal_is_ignored() {
        let mut session = MatchSession::new(animals_catalog());
        assert_eq!(session.flip(0), FlipOutcome::Ignored);
        assert_eq!(session.resolve_pending(), None);
        assert!(!session.is_complete());
    }

    #[test]
    fn small_board_plays_to_completion() {
        let mut session = MatchSession::with_board_size(animals_catalog(), 4);
        session.deal_new_board("English", "Colors").unwrap();

        for pair_key in 0..2 {
            let game = session.game().unwrap();
            let positions: Vec<usize> = (0..game.board_size())
                .filter(|&pos| game.tile(pos).map(|t| t.pair_key) == Some(pair_key))
                .collect();
            session.flip(positions[0]);
            session.flip(positions[1]);
            assert!(matches!(
                session.resolve_pending(),
                Some(Resolution::Matched { .. })
            ));
        }
        assert!(session.is_complete());
    }

    #[test]
    fn audio_mode_propagates_to_current_board() {
        let mut session = MatchSession::new(animals_catalog());
        session.deal_new_board("English", "Animals").unwrap();
        assert_eq!(session.game().unwrap().audio_mode(), AudioMode::None);

        session.set_audio_mode(AudioMode::All);
        assert_eq!(session.audio_mode(), AudioMode::All);
        assert_eq!(session.game().unwrap().audio_mode(), AudioMode::All);
    }

    #[test]
    fn listing_delegates_to_catalog() {
        let session = MatchSession::new(animals_catalog());
        assert_eq!(session.list_languages(), vec!["English"]);
        assert_eq!(
            session.list_categories("English"),
            vec!["Animals", "Colors"]
        );
    }
}
