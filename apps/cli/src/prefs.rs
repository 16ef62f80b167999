//! Preferences file: plain `key=value` lines.
//!
//! Only two settings persist across runs: the chosen language and the
//! audio mode. The category is picked fresh each session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wordmatch_core::AudioMode;

const LANGUAGE_KEY: &str = "language";
const AUDIO_KEY: &str = "audio";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: String,
    pub audio_mode: AudioMode,
}

/// Preferences path under the platform data directory.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordmatch")
        .join("preferences.txt")
}

/// Load preferences, falling back to defaults when the file is missing.
/// Unknown keys, malformed lines and unrecognized audio modes are ignored.
pub fn load(path: &Path) -> Preferences {
    let mut prefs = Preferences::default();
    let Ok(content) = fs::read_to_string(path) else {
        return prefs;
    };

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key.trim() {
            LANGUAGE_KEY => prefs.language = value.trim().to_string(),
            AUDIO_KEY => {
                if let Some(mode) = AudioMode::from_str(value.trim()) {
                    prefs.audio_mode = mode;
                }
            }
            _ => {}
        }
    }
    prefs
}

/// Save preferences, creating the parent directory when needed.
pub fn save(path: &Path, prefs: &Preferences) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = format!(
        "{}={}\n{}={}\n",
        LANGUAGE_KEY,
        prefs.language,
        AUDIO_KEY,
        prefs.audio_mode.as_str()
    );
    fs::write(path, content)
}
