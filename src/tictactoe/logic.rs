//! Tic-Tac-Toe rules and the turn driver.

use super::ai::select_move;
use super::{Board, Outcome, Phase, Player, ScheduledMove, TicTacToeGame, BOARD_CELLS};
use rand::Rng;

/// The 8 winning triples, in scan order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Input actions for the Tic-Tac-Toe game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    Up,
    Down,
    Left,
    Right,
    /// Place at the cursor
    Place,
    /// Place directly at a cell index
    PlaceAt(usize),
    CycleDifficulty,
    Reset,
    ClearScore,
    Other,
}

/// First completed triple in scan order, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        board[a].is_some() && board[a] == board[b] && board[a] == board[c]
    })
}

/// Classify a board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some([a, _, _]) = winning_line(board) {
        return match board[a] {
            Some(player) => Outcome::win_for(player),
            None => Outcome::InProgress,
        };
    }
    if is_board_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Empty cell indices in ascending order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    (0..BOARD_CELLS).filter(|&i| board[i].is_none()).collect()
}

/// Check if the board is full (draw condition when nobody has a line).
pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_some())
}

/// Process an input during an active game.
/// Returns true if the input changed anything.
pub fn process_input(game: &mut TicTacToeGame, input: TicTacToeInput) -> bool {
    // These work in every phase
    match input {
        TicTacToeInput::CycleDifficulty => {
            game.difficulty = game.difficulty.next();
            tracing::debug!(difficulty = %game.difficulty, "difficulty changed");
            return true;
        }
        TicTacToeInput::Reset => {
            reset(game);
            return true;
        }
        TicTacToeInput::ClearScore => {
            game.score.clear();
            return true;
        }
        _ => {}
    }

    // Board input only while it's the human's move
    if game.phase() != Phase::PlayerToMove {
        return false;
    }

    match input {
        TicTacToeInput::Up => game.move_cursor(-1, 0),
        TicTacToeInput::Down => game.move_cursor(1, 0),
        TicTacToeInput::Left => game.move_cursor(0, -1),
        TicTacToeInput::Right => game.move_cursor(0, 1),
        TicTacToeInput::Place => {
            let cursor = game.cursor;
            return process_human_move(game, cursor);
        }
        TicTacToeInput::PlaceAt(index) => {
            if index < BOARD_CELLS {
                game.cursor = index;
            }
            return process_human_move(game, index);
        }
        _ => return false,
    }
    true
}

/// Apply a human move at `index`. Occupied or out-of-range cells are ignored.
pub fn process_human_move(game: &mut TicTacToeGame, index: usize) -> bool {
    if game.phase() != Phase::PlayerToMove || game.current_player != Player::Human {
        return false;
    }
    if !game.place_mark(index) {
        return false;
    }
    tracing::debug!(cell = index, "human moved");

    if finish_if_over(game) {
        return true;
    }

    // Switch to AI turn
    game.switch_player();
    schedule_ai_move(game, rand::random());
    true
}

/// Queue the opponent's move behind the thinking delay.
pub fn schedule_ai_move(game: &mut TicTacToeGame, message_seed: u64) {
    game.pending_move = Some(ScheduledMove {
        epoch: game.epoch,
        ticks_waited: 0,
        ticks_needed: game.think_ticks,
        message_seed,
    });
}

/// Advance the opponent's thinking by one tick. Returns true if the AI moved.
pub fn process_ai_thinking<R: Rng>(game: &mut TicTacToeGame, rng: &mut R) -> bool {
    let Some(mut scheduled) = game.pending_move.take() else {
        return false;
    };

    if scheduled.epoch != game.epoch || game.outcome().is_terminal() {
        tracing::debug!(
            scheduled_epoch = scheduled.epoch,
            epoch = game.epoch,
            "discarded stale opponent move"
        );
        return false;
    }

    scheduled.ticks_waited += 1;
    if !scheduled.is_due() {
        game.pending_move = Some(scheduled);
        return false;
    }

    // Difficulty is read now, so a mid-game change applies to this move
    let choice = select_move(&game.board, game.difficulty, Player::Ai, rng);
    debug_assert!(choice.is_some(), "opponent asked to move on a full board");
    let Some(index) = choice else {
        return false;
    };

    game.place_mark(index);
    tracing::debug!(cell = index, difficulty = %game.difficulty, "ai moved");

    if !finish_if_over(game) {
        game.switch_player();
    }
    true
}

/// Record the result once the board is decided. Returns true if the game is over.
fn finish_if_over(game: &mut TicTacToeGame) -> bool {
    let outcome = game.outcome();
    if !outcome.is_terminal() {
        return false;
    }
    if !game.result_recorded {
        game.score.record(outcome);
        game.result_recorded = true;
        tracing::info!(
            outcome = ?outcome,
            moves = game.move_history.len(),
            difficulty = %game.difficulty,
            "game over"
        );
    }
    game.pending_move = None;
    true
}

/// Start over: empty board, human to move, pending opponent move cancelled.
/// The cross-game tally is kept.
pub fn reset(game: &mut TicTacToeGame) {
    game.epoch += 1;
    game.pending_move = None;
    game.board = [None; BOARD_CELLS];
    game.current_player = Player::Human;
    game.cursor = 4;
    game.move_history.clear();
    game.last_move = None;
    game.result_recorded = false;
    tracing::info!(epoch = game.epoch, difficulty = %game.difficulty, "new game");
}
