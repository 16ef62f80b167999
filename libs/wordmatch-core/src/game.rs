//! Flip/match state machine for one dealt board.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rng;
use crate::types::{AudioMode, Side, Tile, TileState, WordPair};

/// Result of delivering a flip event to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipOutcome {
    /// Nothing changed: the position was out of range, the tile was not
    /// hidden, or two tiles are already face up awaiting resolution.
    Ignored,
    /// First tile of an attempt turned face up. The machine idles here
    /// until a second flip arrives; there is no timeout.
    First(TileReveal),
    /// Second tile turned face up. The host should schedule
    /// [`MatchGame::resolve_pending`] after [`crate::RESOLVE_DELAY`] so the
    /// player sees both faces; until then every flip is ignored.
    Second(TileReveal),
}

/// Presentation update for a tile that just turned face up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileReveal {
    pub position: usize,
    pub text: String,
    /// Audio reference to play, present only when the audio mode permits
    /// this tile's side and the source data carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Outcome of resolving a two-tile attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Both tiles are solved and no longer accept flips.
    Matched {
        positions: [usize; 2],
        solved_count: usize,
        complete: bool,
    },
    /// Both tiles are hidden again; the host clears their faces.
    Mismatched { positions: [usize; 2] },
}

/// Progress of the current two-tile attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// No tile face up.
    Idle,
    /// One tile face up, waiting indefinitely for a second flip.
    OneUp { first: usize },
    /// Two tiles face up, waiting for the deferred resolution.
    Resolving { first: usize, second: usize },
}

/// One dealt board plus its flip/match state.
///
/// Logical tiles sit in `slots` in deal order; `layout` maps each fixed
/// board position to a slot. Shuffling rearranges the mapping rather than
/// the tile records, so a host can bind positions to its own UI elements
/// once and only request redraws per position.
#[derive(Debug, Clone)]
pub struct MatchGame {
    slots: Vec<Tile>,
    layout: Vec<usize>,
    attempt: Attempt,
    solved_count: usize,
    audio_mode: AudioMode,
    complete: bool,
}

impl MatchGame {
    /// Deal a fresh board from a pair list.
    ///
    /// `board_size` must be even; `board_size / 2` pairs are drawn from a
    /// shuffled copy of the list and split into a left and a right tile
    /// each. Fails with [`GameError::InsufficientPairs`] when the list is
    /// too short, in which case the caller keeps its previous board.
    pub fn deal(
        pairs: &[WordPair],
        board_size: usize,
        audio_mode: AudioMode,
    ) -> Result<Self, GameError> {
        Self::deal_with_rng(pairs, board_size, audio_mode, &mut rng::time_seeded())
    }

    /// Deal with a caller-supplied generator (deterministic in tests).
    pub fn deal_with_rng<R: Rng + ?Sized>(
        pairs: &[WordPair],
        board_size: usize,
        audio_mode: AudioMode,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let pair_count = board_size / 2;
        if pairs.len() < pair_count {
            return Err(GameError::InsufficientPairs {
                have: pairs.len(),
                need: pair_count,
            });
        }

        // Shuffle pair order by index so the source records stay put.
        let mut order: Vec<usize> = (0..pairs.len()).collect();
        order.shuffle(rng);

        let mut slots = Vec::with_capacity(pair_count * 2);
        for (pair_key, &pick) in order.iter().take(pair_count).enumerate() {
            let pair = &pairs[pick];
            slots.push(Tile::new(
                pair_key,
                Side::Left,
                pair.term_a.clone(),
                pair.audio_a.clone(),
            ));
            slots.push(Tile::new(
                pair_key,
                Side::Right,
                pair.term_b.clone(),
                pair.audio_b.clone(),
            ));
        }

        // Second, independent permutation: board positions over slots.
        let mut layout: Vec<usize> = (0..slots.len()).collect();
        layout.shuffle(rng);

        Ok(Self {
            slots,
            layout,
            attempt: Attempt::Idle,
            solved_count: 0,
            audio_mode,
            complete: false,
        })
    }

    /// Deliver a flip at a board position.
    ///
    /// Only hidden tiles accept a flip, and only while fewer than
    /// [`crate::MAX_FLIPPED`] tiles are face up. Everything else (a
    /// position out of range, a solved or already-flipped tile, a third
    /// flip inside the resolution window) is a silent no-op.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        if matches!(self.attempt, Attempt::Resolving { .. }) {
            return FlipOutcome::Ignored;
        }
        let Some(&slot) = self.layout.get(position) else {
            return FlipOutcome::Ignored;
        };
        if self.slots[slot].state != TileState::Hidden {
            return FlipOutcome::Ignored;
        }

        self.slots[slot].state = TileState::Flipped;
        let tile = &self.slots[slot];
        let reveal = TileReveal {
            position,
            text: tile.text.clone(),
            audio: tile
                .audio
                .as_ref()
                .filter(|_| self.audio_mode.permits(tile.side))
                .cloned(),
        };

        match self.attempt {
            Attempt::OneUp { first } => {
                self.attempt = Attempt::Resolving {
                    first,
                    second: position,
                };
                FlipOutcome::Second(reveal)
            }
            _ => {
                self.attempt = Attempt::OneUp { first: position };
                FlipOutcome::First(reveal)
            }
        }
    }

    /// Resolve the current two-tile attempt.
    ///
    /// The host calls this as a deferred follow-up once
    /// [`FlipOutcome::Second`] was returned. Returns `None` when nothing is
    /// pending.
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        let Attempt::Resolving { first, second } = self.attempt else {
            return None;
        };
        self.attempt = Attempt::Idle;

        let a = self.layout[first];
        let b = self.layout[second];

        // A repeated position must never count as a match, even though
        // `flip` already rejects tiles that are not hidden.
        if first != second && self.slots[a].pair_key == self.slots[b].pair_key {
            self.slots[a].state = TileState::Solved;
            self.slots[b].state = TileState::Solved;
            self.solved_count += 1;
            if self.solved_count == self.slots.len() / 2 {
                self.complete = true;
            }
            Some(Resolution::Matched {
                positions: [first, second],
                solved_count: self.solved_count,
                complete: self.complete,
            })
        } else {
            self.slots[a].state = TileState::Hidden;
            self.slots[b].state = TileState::Hidden;
            Some(Resolution::Mismatched {
                positions: [first, second],
            })
        }
    }

    pub fn board_size(&self) -> usize {
        self.layout.len()
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    /// Whether every pair has been matched. Monotonic within one deal.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of tiles currently face up (0, 1 or 2).
    pub fn flipped_count(&self) -> usize {
        match self.attempt {
            Attempt::Idle => 0,
            Attempt::OneUp { .. } => 1,
            Attempt::Resolving { .. } => 2,
        }
    }

    /// Tile at a board position, for rendering.
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.layout.get(position).map(|&slot| &self.slots[slot])
    }

    /// Tiles in board-position order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.layout.iter().map(|&slot| &self.slots[slot])
    }

    pub fn audio_mode(&self) -> AudioMode {
        self.audio_mode
    }

    /// Change the playback setting for subsequent flips on this board.
    pub fn set_audio_mode(&mut self, mode: AudioMode) {
        self.audio_mode = mode;
    }
}
