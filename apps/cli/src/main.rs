//! wordmatch: a terminal word-matching puzzle.
//!
//! One logical control thread: player input and deferred match resolution
//! are multiplexed onto the same loop, so the state machine never needs a
//! lock and a pending resolution never blocks input handling.

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordmatch_cli::command::{Command, HELP_TEXT};
use wordmatch_cli::{loader, prefs, render};
use wordmatch_core::{FlipOutcome, MatchSession, RESOLVE_DELAY};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("wordpairs"));

    let catalog = loader::load_catalog(&data_root)?;
    tracing::info!(
        "loaded {} word lists from {}",
        catalog.len(),
        data_root.display()
    );

    let prefs_path = prefs::default_path();
    let stored = prefs::load(&prefs_path);

    let mut session = MatchSession::new(catalog);
    session.set_audio_mode(stored.audio_mode);

    let mut language = pick_language(&session, &stored.language);
    let mut category = first_category(&session, &language);

    if language.is_empty() {
        tracing::warn!("no word lists found under {}", data_root.display());
    } else {
        deal(&mut session, &language, &category);
    }

    // Resolution timers land here so match checks run on the same control
    // loop as player input.
    let (resolve_tx, mut resolve_rx) = mpsc::channel::<()>(4);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP_TEXT);
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Languages => {
                        println!("{}", session.list_languages().join(", "));
                    }
                    Command::Categories => {
                        println!("{}", session.list_categories(&language).join(", "));
                    }
                    Command::SetLanguage(name) => {
                        if session.list_languages().contains(&name.as_str()) {
                            language = name;
                            category = first_category(&session, &language);
                            println!("language: {} (category: {})", language, category);
                        } else {
                            println!("unknown language: {}", name);
                        }
                    }
                    Command::SetCategory(name) => {
                        if session.list_categories(&language).contains(&name.as_str()) {
                            category = name;
                            println!("category: {}", category);
                        } else {
                            println!("unknown category: {}", name);
                        }
                    }
                    Command::NewPuzzle => deal(&mut session, &language, &category),
                    Command::Surprise => {
                        let pick = session.pick_random_category(&language).map(String::from);
                        match pick {
                            Some(name) => {
                                category = name;
                                deal(&mut session, &language, &category);
                            }
                            None => println!("no categories for {}", language),
                        }
                    }
                    Command::Flip(number) => {
                        match number.checked_sub(1).map(|pos| session.flip(pos)) {
                            None | Some(FlipOutcome::Ignored) => println!("(no effect)"),
                            Some(FlipOutcome::First(reveal)) => {
                                println!("{}", render::reveal(&reveal));
                            }
                            Some(FlipOutcome::Second(reveal)) => {
                                println!("{}", render::reveal(&reveal));
                                // Deferred resolution: the player sees both
                                // faces for RESOLVE_DELAY while the guard
                                // rejects further flips.
                                let tx = resolve_tx.clone();
                                tokio::spawn(async move {
                                    tokio::time::sleep(RESOLVE_DELAY).await;
                                    let _ = tx.send(()).await;
                                });
                            }
                        }
                    }
                    Command::Board => print_board(&session),
                    Command::SetAudio(mode) => {
                        session.set_audio_mode(mode);
                        println!("audio: {}", mode.as_str());
                    }
                    Command::Help => println!("{}", HELP_TEXT),
                    Command::Quit => break,
                    Command::Unknown(input) => {
                        println!("unrecognized: {} (try `help`)", input);
                    }
                }
            }
            Some(()) = resolve_rx.recv() => {
                if let Some(resolution) = session.resolve_pending() {
                    let total_pairs = session.game().map_or(0, |g| g.board_size() / 2);
                    println!("{}", render::resolution(&resolution, total_pairs));
                    print_board(&session);
                }
            }
        }
    }

    let saved = prefs::Preferences {
        language,
        audio_mode: session.audio_mode(),
    };
    prefs::save(&prefs_path, &saved)?;
    tracing::info!("preferences saved to {}", prefs_path.display());
    Ok(())
}

/// Stored language if it is still available, else the first loaded one.
fn pick_language(session: &MatchSession, stored: &str) -> String {
    let languages = session.list_languages();
    if languages.contains(&stored) {
        stored.to_string()
    } else {
        languages.first().map(|s| s.to_string()).unwrap_or_default()
    }
}

fn first_category(session: &MatchSession, language: &str) -> String {
    session
        .list_categories(language)
        .first()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn deal(session: &mut MatchSession, language: &str, category: &str) {
    match session.deal_new_board(language, category) {
        Ok(()) => {
            tracing::info!("dealt a new board for {}/{}", language, category);
            print_board(session);
        }
        Err(err) => {
            tracing::warn!("{}; board unchanged", err);
            println!("couldn't deal {}/{}: {}", language, category, err);
        }
    }
}

fn print_board(session: &MatchSession) {
    if let Some(game) = session.game() {
        print!("{}", render::board(game));
    }
}
