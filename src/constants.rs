// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;

// Input poll timeout for the terminal loop
pub const INPUT_POLL_MS: u64 = 50;

// How long the opponent "thinks" before moving (matches the web version's timer)
pub const DEFAULT_THINK_DELAY_MS: u64 = 1000;
