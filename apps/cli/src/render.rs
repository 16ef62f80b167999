//! Text rendering for the terminal host.

use wordmatch_core::{MatchGame, Resolution, TileReveal, TileState};

/// Tiles per rendered row; a 20-tile board comes out as a 4x5 grid.
const COLUMNS: usize = 4;

pub const COMPLETE_BANNER: &str = "\
*****************************
*      puzzle complete!     *
*****************************";

/// Render the board as a grid. Hidden tiles show their 1-based position;
/// flipped tiles show their face in angle brackets; solved tiles show the
/// bare face.
pub fn board(game: &MatchGame) -> String {
    let mut out = String::new();
    for (i, tile) in game.tiles().enumerate() {
        let cell = match tile.state {
            TileState::Hidden => format!("[{:>2}]", i + 1),
            TileState::Flipped => format!("<{}>", tile.text),
            TileState::Solved => tile.text.clone(),
        };
        out.push_str(&format!("{:<16}", cell));
        if (i + 1) % COLUMNS == 0 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// One line for a freshly revealed tile, plus the playback hint when the
/// audio mode asked for one.
pub fn reveal(reveal: &TileReveal) -> String {
    let mut out = format!("tile {}: {}", reveal.position + 1, reveal.text);
    if let Some(audio) = &reveal.audio {
        out.push_str(&format!("  (would play {audio})"));
    }
    out
}

pub fn resolution(resolution: &Resolution, total_pairs: usize) -> String {
    match resolution {
        Resolution::Matched {
            solved_count,
            complete,
            ..
        } => {
            if *complete {
                format!("match! {solved_count}/{total_pairs} solved\n{COMPLETE_BANNER}")
            } else {
                format!("match! {solved_count}/{total_pairs} solved")
            }
        }
        Resolution::Mismatched { .. } => "no match".to_string(),
    }
}
