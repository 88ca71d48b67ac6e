//! Key handling for the game screen.

use crate::tictactoe::{process_input, TicTacToeGame, TicTacToeInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Score changed (cleared); persist it.
    NeedsSave,
    /// Player quit. State should be saved first.
    Quit,
}

/// Translate a key into a game input.
pub fn map_key(code: KeyCode) -> TicTacToeInput {
    match code {
        KeyCode::Up | KeyCode::Char('k') => TicTacToeInput::Up,
        KeyCode::Down | KeyCode::Char('j') => TicTacToeInput::Down,
        KeyCode::Left | KeyCode::Char('h') => TicTacToeInput::Left,
        KeyCode::Right | KeyCode::Char('l') => TicTacToeInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => TicTacToeInput::Place,
        // 1 = top-left ... 9 = bottom-right
        KeyCode::Char(c @ '1'..='9') => TicTacToeInput::PlaceAt(c as usize - '1' as usize),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Tab => TicTacToeInput::CycleDifficulty,
        KeyCode::Char('r') | KeyCode::Char('R') => TicTacToeInput::Reset,
        KeyCode::Char('c') | KeyCode::Char('C') => TicTacToeInput::ClearScore,
        _ => TicTacToeInput::Other,
    }
}

/// Handle a key on the game screen.
pub fn handle_game_input(key: KeyEvent, game: &mut TicTacToeGame) -> InputResult {
    // Windows terminals also report releases
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        _ => {}
    }

    let input = map_key(key.code);
    let handled = process_input(game, input);
    if handled && input == TicTacToeInput::ClearScore {
        InputResult::NeedsSave
    } else {
        InputResult::Continue
    }
}
