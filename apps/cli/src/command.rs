//! Player command parsing for the terminal host.

use wordmatch_core::AudioMode;

/// One line of player input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Languages,
    Categories,
    SetLanguage(String),
    SetCategory(String),
    NewPuzzle,
    /// Deal with a randomly picked category for the current language.
    Surprise,
    /// 1-based board position, as shown on the rendered board.
    Flip(usize),
    Board,
    SetAudio(AudioMode),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match (word, rest) {
            ("languages", "") => Self::Languages,
            ("categories", "") => Self::Categories,
            ("lang", name) if !name.is_empty() => Self::SetLanguage(name.to_string()),
            ("cat", name) if !name.is_empty() => Self::SetCategory(name.to_string()),
            ("new", "") => Self::NewPuzzle,
            ("surprise", "") => Self::Surprise,
            ("flip", n) => match n.parse::<usize>() {
                Ok(position) => Self::Flip(position),
                Err(_) => Self::Unknown(input.to_string()),
            },
            ("board", "") => Self::Board,
            ("audio", mode) => match AudioMode::from_str(mode) {
                Some(mode) => Self::SetAudio(mode),
                None => Self::Unknown(input.to_string()),
            },
            ("help", "") => Self::Help,
            ("quit", "") | ("exit", "") => Self::Quit,
            _ => Self::Unknown(input.to_string()),
        }
    }
}

pub const HELP_TEXT: &str = "\
commands:
  languages          list available languages
  categories         list categories for the current language
  lang <name>        switch language
  cat <name>         switch category
  new                deal a new puzzle
  surprise           deal a new puzzle with a random category
  flip <position>    flip the tile at a board position
  board              redraw the board
  audio <mode>       set audio mode: none, all, left, right
  help               show this text
  quit               save preferences and exit";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(Command::parse("languages"), Command::Languages);
        assert_eq!(Command::parse("new"), Command::NewPuzzle);
        assert_eq!(Command::parse("surprise"), Command::Surprise);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn parse_flip_position() {
        assert_eq!(Command::parse("flip 7"), Command::Flip(7));
        assert_eq!(Command::parse("  flip 20 "), Command::Flip(20));
    }

    #[test]
    fn parse_flip_without_number_is_unknown() {
        assert_eq!(
            Command::parse("flip seven"),
            Command::Unknown("flip seven".to_string())
        );
    }

    #[test]
    fn parse_language_keeps_multiword_names() {
        assert_eq!(
            Command::parse("lang Swiss German"),
            Command::SetLanguage("Swiss German".to_string())
        );
        assert_eq!(
            Command::parse("cat Sports and Games"),
            Command::SetCategory("Sports and Games".to_string())
        );
    }

    #[test]
    fn parse_audio_modes() {
        assert_eq!(
            Command::parse("audio left"),
            Command::SetAudio(AudioMode::LeftOnly)
        );
        assert_eq!(
            Command::parse("audio off"),
            Command::Unknown("audio off".to_string())
        );
    }

    #[test]
    fn parse_unknown_input() {
        assert_eq!(Command::parse("shuffle"), Command::Unknown("shuffle".to_string()));
    }
}
