//! Spinner and "thinking" labels shown while the opponent picks a move.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Labels shown while the opponent is thinking. Purely cosmetic.
const THINKING_MESSAGES: [&str; 6] = [
    "Hmm...",
    "Calculating best move...",
    "Thinking carefully...",
    "Crunching numbers...",
    "Planning strategy...",
    "Deep thinking...",
];

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Returns the current spinner character based on system time.
/// The spinner cycles every 100ms, completing a full rotation every second.
pub fn spinner_char() -> char {
    SPINNER[((current_millis() / 100) % SPINNER.len() as u128) as usize]
}

/// Returns a thinking label for a seed. Stable for the same seed.
pub fn thinking_message(seed: u64) -> &'static str {
    THINKING_MESSAGES[(seed % THINKING_MESSAGES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_message_stable() {
        assert_eq!(thinking_message(3), thinking_message(3));
        assert_eq!(thinking_message(0), "Hmm...");
        assert_eq!(thinking_message(6), "Hmm...");
    }

    #[test]
    fn test_spinner_char_is_braille() {
        assert!(SPINNER.contains(&spinner_char()));
    }
}
