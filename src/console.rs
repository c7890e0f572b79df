//! Text console for a local two-player match.
//!
//! The console speaks a small line protocol in the style of GTP: each
//! command may carry a numeric id, and each response is `=` (success) or
//! `?` (failure) followed by the id and a message, then a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `boardsize <n>` - Start over on an `n x n` board
//! - `stones <n>` - Start over with `n` stones per player
//! - `clear_board` - Start over with the current settings
//! - `play <color> <x> <y>` - Place a stone
//! - `play <color> pass` - Pass
//! - `turn` - Color to move
//! - `showboard` - Print the board
//! - `state` - Print the JSON snapshot
//! - `score` - Print the current score

use std::io::{self, BufRead, Write};

use crate::board::{Color, Move};
use crate::game::{Action, GameConfig, GameState};

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "play",
    "quit",
    "score",
    "showboard",
    "state",
    "stones",
    "turn",
    "version",
];

/// Console session state.
pub struct Console {
    config: GameConfig,
    state: GameState,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Console {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::with_config(config),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop on arbitrary streams until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn reset(&mut self) {
        self.state = GameState::with_config(self.config);
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => match args.first().map(|a| a.parse::<usize>()) {
                None => (false, "missing argument".to_string()),
                Some(Ok(size)) if size > 0 => {
                    self.config.board_size = size;
                    self.reset();
                    (true, String::new())
                }
                Some(_) => (false, "unacceptable size".to_string()),
            },

            "stones" => match args.first().map(|a| a.parse::<u32>()) {
                None => (false, "missing argument".to_string()),
                Some(Ok(stones)) => {
                    self.config.stones_per_player = stones;
                    self.reset();
                    (true, String::new())
                }
                Some(Err(_)) => (false, "invalid stone count".to_string()),
            },

            "clear_board" => {
                self.reset();
                (true, String::new())
            }

            "play" => match self.parse_play(args) {
                Ok(action) => match self.state.act(action) {
                    Ok(captured) => (true, captured.to_string()),
                    Err(e) => (false, e.to_string()),
                },
                Err(msg) => (false, msg.to_string()),
            },

            "turn" => (true, self.state.active_player().to_string()),

            "showboard" => (true, format!("\n{}", self.state.board())),

            "state" => match self.state.snapshot().to_json() {
                Ok(json) => (true, json),
                Err(e) => (false, e.to_string()),
            },

            "score" => {
                let s = self.state.score();
                (true, format!("Black {} White {}", s.black, s.white))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn parse_play(&self, args: &[&str]) -> Result<Action, &'static str> {
        let color = match args.first() {
            Some(c) => Color::parse(c),
            None => return Err("missing arguments"),
        };
        if color == Color::None {
            return Err("invalid color");
        }
        match args[1..] {
            [vertex] if vertex.eq_ignore_ascii_case("pass") => Ok(Action::Pass(color)),
            [x, y] => match (x.parse::<i32>(), y.parse::<i32>()) {
                (Ok(x), Ok(y)) => Ok(Action::Move(Move::new(color, x, y))),
                _ => Err("invalid coordinates"),
            },
            _ => Err("missing arguments"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(size: usize, stones: u32) -> Console {
        Console::new(GameConfig {
            board_size: size,
            stones_per_player: stones,
        })
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = Console::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = Console::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut c = Console::default();
        assert_eq!(c.execute("name", &[]), (true, "gobotgo".to_string()));
    }

    #[test]
    fn test_known_command() {
        let mut c = Console::default();
        assert_eq!(c.execute("known_command", &["play"]), (true, "true".to_string()));
        assert_eq!(c.execute("known_command", &["genmove"]), (true, "false".to_string()));
    }

    #[test]
    fn test_boardsize_resets() {
        let mut c = console(5, 10);
        assert!(c.execute("play", &["black", "0", "0"]).0);
        assert!(c.execute("boardsize", &["3"]).0);
        assert_eq!(c.state().size(), 3);
        assert_eq!(c.state().active_player(), Color::Black);
        assert!(!c.execute("boardsize", &["0"]).0);
    }

    #[test]
    fn test_play_reports_rules() {
        let mut c = console(5, 10);
        assert_eq!(c.execute("play", &["white", "0", "0"]), (false, "Not your turn".to_string()));
        assert_eq!(c.execute("play", &["black", "0", "0"]), (true, "0".to_string()));
        assert_eq!(
            c.execute("play", &["white", "0", "0"]),
            (false, "Intersection is not empty".to_string())
        );
        assert_eq!(c.execute("play", &["purple", "1", "1"]).1, "invalid color");
        assert_eq!(c.execute("play", &["white", "a", "1"]).1, "invalid coordinates");
        assert_eq!(c.execute("play", &["white"]).1, "missing arguments");
    }

    #[test]
    fn test_double_pass_over_console() {
        let mut c = console(5, 10);
        assert!(c.execute("play", &["black", "pass"]).0);
        assert_eq!(c.execute("play", &["white", "PASS"]), (false, "Game Over".to_string()));
        assert!(c.state().is_over());
    }

    #[test]
    fn test_run_with_streams() {
        let mut c = console(2, 10);
        let input = b"1 play black 0 1\n# comment\n\nplay white 1 1\nscore\nquit\nname\n";
        let mut output = Vec::new();
        c.run_with(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "=1 0\n\n= 0\n\n= Black 1 White 1\n\n= \n\n");
    }
}
