//! Tic-Tac-Toe data structures.
//!
//! 3x3 board, Human (X) always moves first, three in a row wins.

use crate::scoreboard::Scoreboard;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Board width/height.
pub const BOARD_SIDE: usize = 3;

/// Cells indexed 0..8, row-major. None = empty.
pub type Board = [Option<Player>; BOARD_CELLS];

/// The mark occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Player::Human => "X",
            Player::Ai => "O",
        }
    }
}

/// Classification of a board. Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    HumanWins,
    AiWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning outcome for a given mark.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWins,
            Player::Ai => Outcome::AiWins,
        }
    }
}

/// Opponent strength. Picks the move-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Short description shown in the info panel.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Easy => "Plays at random",
            Self::Medium => "Wins or blocks",
            Self::Hard => "Never loses",
        }
    }

    /// Next difficulty in the selector, wrapping around.
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|d| d == self).unwrap_or(0);
        Self::from_index((index + 1) % Self::ALL.len())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

/// Where the driver is in a game. Derived by `TicTacToeGame::phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerToMove,
    OpponentThinking,
    Terminal,
}

/// A deferred opponent move. Only applies while `epoch` matches the game's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledMove {
    /// Game epoch at scheduling time; a reset bumps the game's epoch
    pub epoch: u64,
    /// Ticks elapsed since scheduling
    pub ticks_waited: u32,
    /// Ticks to wait before the move is chosen and applied
    pub ticks_needed: u32,
    /// Seed for the cosmetic "thinking" label
    pub message_seed: u64,
}

impl ScheduledMove {
    pub fn is_due(&self) -> bool {
        self.ticks_waited >= self.ticks_needed
    }
}

/// One game session: board, turn, difficulty, pending opponent move and tally.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    pub board: Board,
    /// Cell under the cursor (0..8)
    pub cursor: usize,
    /// Whose turn it is
    pub current_player: Player,
    /// Difficulty level; read when the opponent's move is chosen
    pub difficulty: Difficulty,
    /// Opponent move waiting for its thinking delay
    pub pending_move: Option<ScheduledMove>,
    /// Bumped on every reset; cancels stale scheduled moves
    pub epoch: u64,
    /// Thinking delay in ticks for newly scheduled moves
    pub think_ticks: u32,
    /// Move history for display
    pub move_history: Vec<(usize, Player)>,
    /// Last move position for highlighting
    pub last_move: Option<usize>,
    /// Win/loss/draw tally across games
    pub score: Scoreboard,
    /// Set once the finished game has been counted in `score`
    pub result_recorded: bool,
}

impl TicTacToeGame {
    pub fn new(difficulty: Difficulty, think_ticks: u32) -> Self {
        Self {
            board: [None; BOARD_CELLS],
            cursor: 4, // Center
            current_player: Player::Human,
            difficulty,
            pending_move: None,
            epoch: 0,
            think_ticks,
            move_history: Vec::new(),
            last_move: None,
            score: Scoreboard::default(),
            result_recorded: false,
        }
    }

    /// Outcome of the current board, recomputed on every call.
    pub fn outcome(&self) -> Outcome {
        super::logic::evaluate(&self.board)
    }

    pub fn phase(&self) -> Phase {
        if self.outcome().is_terminal() {
            Phase::Terminal
        } else if self.current_player == Player::Ai || self.pending_move.is_some() {
            Phase::OpponentThinking
        } else {
            Phase::PlayerToMove
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.phase() == Phase::OpponentThinking
    }

    /// Check if a cell index is on the board and empty
    pub fn is_valid_move(&self, index: usize) -> bool {
        index < BOARD_CELLS && self.board[index].is_none()
    }

    /// Write the current player's mark. Fails on occupied cells and finished games.
    pub fn place_mark(&mut self, index: usize) -> bool {
        if !self.is_valid_move(index) || self.outcome().is_terminal() {
            return false;
        }
        self.board[index] = Some(self.current_player);
        self.move_history.push((index, self.current_player));
        self.last_move = Some(index);
        true
    }

    /// Switch to the other player's turn
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Move cursor in a direction, clamped to the board
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let side = BOARD_SIDE as i32;
        let row = (self.cursor / BOARD_SIDE) as i32;
        let col = (self.cursor % BOARD_SIDE) as i32;
        let new_row = (row + d_row).clamp(0, side - 1) as usize;
        let new_col = (col + d_col).clamp(0, side - 1) as usize;
        self.cursor = new_row * BOARD_SIDE + new_col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = TicTacToeGame::new(Difficulty::Easy, 10);
        assert_eq!(game.cursor, 4);
        assert_eq!(game.current_player, Player::Human);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.phase(), Phase::PlayerToMove);
        assert!(game.board.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_place_mark() {
        let mut game = TicTacToeGame::new(Difficulty::Easy, 10);
        assert!(game.place_mark(0));
        assert_eq!(game.board[0], Some(Player::Human));
        assert_eq!(game.last_move, Some(0));
        assert!(!game.place_mark(0)); // Can't place on occupied
        assert!(!game.place_mark(9)); // Off the board
    }

    #[test]
    fn test_place_mark_rejected_after_game_over() {
        let mut game = TicTacToeGame::new(Difficulty::Easy, 10);
        game.board[0] = Some(Player::Human);
        game.board[1] = Some(Player::Human);
        game.board[2] = Some(Player::Human);
        assert!(!game.place_mark(5));
        assert_eq!(game.board[5], None);
    }

    #[test]
    fn test_move_cursor() {
        let mut game = TicTacToeGame::new(Difficulty::Easy, 10);
        game.move_cursor(-1, 0); // Up
        assert_eq!(game.cursor, 1);
        game.move_cursor(0, -1); // Left
        assert_eq!(game.cursor, 0);
        game.move_cursor(-1, -1); // Should clamp
        assert_eq!(game.cursor, 0);
        game.move_cursor(5, 5);
        assert_eq!(game.cursor, 8);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Ai);
        assert_eq!(Player::Ai.opponent(), Player::Human);
    }

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_from_index_out_of_range() {
        assert_eq!(Difficulty::from_index(2), Difficulty::Hard);
        assert_eq!(Difficulty::from_index(99), Difficulty::Easy);
    }

    #[test]
    fn test_phase_thinking_when_ai_to_move() {
        let mut game = TicTacToeGame::new(Difficulty::Easy, 10);
        game.place_mark(4);
        game.switch_player();
        assert_eq!(game.phase(), Phase::OpponentThinking);
    }

    #[test]
    fn test_scheduled_move_due() {
        let mut scheduled = ScheduledMove {
            epoch: 0,
            ticks_waited: 0,
            ticks_needed: 2,
            message_seed: 0,
        };
        assert!(!scheduled.is_due());
        scheduled.ticks_waited = 2;
        assert!(scheduled.is_due());
    }
}
