//! Line-oriented text protocol in the style of GTP.
//!
//! Each request is one line, optionally prefixed by a numeric id. Each
//! response starts with `=` on success or `?` on failure, followed by the id
//! (if any), the response text, and a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new game
//! - `setboard <color> <cells>` - Load 64 cells of `X`/`O`/`.` with `<color>` to move
//! - `depth <n>` - Set the search depth for `genmove`
//! - `play <color> <vertex>` - Play a move such as `d3`
//! - `genmove <color>` - Search, play and return a move
//! - `legal_moves <color>` - List legal vertices
//! - `showboard`, `score`, `winner`
//!
//! ## Example
//!
//! ```ignore
//! use othello_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::board::{Board, Player, parse_coord, str_coord};
use crate::constants::DEFAULT_DEPTH;
use crate::error::GameError;
use crate::game::Game;
use crate::search::Searcher;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "depth",
    "genmove",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "setboard",
    "showboard",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    /// Current game
    game: Game,
    /// Searcher reused across `genmove` requests
    searcher: Searcher,
    /// Search depth in plies
    depth: u32,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    /// Create an engine searching at the default depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies per move.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            game: Game::new(),
            searcher: Searcher::default(),
            depth: depth.max(1),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            debug!(%command, success, "command handled");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")
                .context("failed to write response")?;
            output.flush().context("failed to flush response")?;

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

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "othello-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game = Game::new();
                (true, String::new())
            }

            "depth" => match args.first().map(|s| s.parse::<u32>()) {
                Some(Ok(depth)) if depth > 0 => {
                    self.depth = depth;
                    (true, String::new())
                }
                Some(_) => (false, "invalid depth".to_string()),
                None => (true, self.depth.to_string()),
            },

            "setboard" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let loaded = args[0]
                    .parse::<Player>()
                    .and_then(|player| Ok((player, args[1..].concat().parse::<Board>()?)));
                respond(loaded.map(|(player, board)| {
                    self.game = Game::from_board(board, player);
                    String::new()
                }))
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                respond(self.play(args[0], args[1]))
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                respond(self.genmove(color))
            }

            "legal_moves" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                respond(color.parse::<Player>().map(|player| {
                    self.game
                        .legal_moves(player)
                        .into_iter()
                        .map(str_coord)
                        .collect::<Vec<_>>()
                        .join(" ")
                }))
            }

            "showboard" => (true, self.showboard()),

            "score" => {
                let (black, white) = self.game.score();
                (true, format!("black {black} white {white}"))
            }

            "winner" => match self.game.winner() {
                Some(outcome) => (true, outcome.to_string()),
                None => (true, "none".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn play(&mut self, color: &str, vertex: &str) -> Result<String, GameError> {
        let player = color.parse::<Player>()?;
        let pt = parse_coord(vertex)?;
        self.game.make_move(pt, player)?;
        Ok(String::new())
    }

    fn genmove(&mut self, color: &str) -> Result<String, GameError> {
        let player = color.parse::<Player>()?;
        let result = self.game.analyze(&mut self.searcher, player, self.depth)?;
        let pt = result
            .best_move
            .ok_or(GameError::NoLegalMove { player })?;
        self.game.make_move(pt, player)?;
        Ok(str_coord(pt))
    }

    fn showboard(&self) -> String {
        let board = self.game.board();
        let mut out = String::from("\n  a b c d e f g h\n");
        for (row, line) in board.to_string().lines().enumerate() {
            out.push_str(&format!("{} {}\n", row + 1, line.trim_end()));
        }
        let (black, white) = self.game.score();
        out.push_str(&format!("black {black} white {white}"));
        out
    }
}

/// Map a command result onto the protocol's (success, text) pair.
fn respond(result: Result<String, GameError>) -> (bool, String) {
    match result {
        Ok(text) => (true, text),
        Err(err) => (false, err.to_string()),
    }
}
