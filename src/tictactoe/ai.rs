//! Opponent move selection: random, one-ply heuristic and full minimax.

use super::logic::{empty_cells, evaluate};
use super::{Board, Difficulty, Outcome, Player};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;

/// Value of a won terminal position for the searching side.
const SCORE_WIN: i32 = 10;
/// Value of a lost terminal position for the searching side.
const SCORE_LOSS: i32 = -10;
const SCORE_DRAW: i32 = 0;

/// Pick a move for `me` using the strategy for `difficulty`.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(level = "debug", skip(board, rng))]
pub fn select_move<R: Rng>(
    board: &Board,
    difficulty: Difficulty,
    me: Player,
    rng: &mut R,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => heuristic_move(board, me, rng),
        Difficulty::Hard => best_move(board, me),
    }
}

/// Uniform random choice over the empty cells.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    empty_cells(board).choose(rng).copied()
}

/// Take an immediate win, else block the first immediate threat, else random.
///
/// Only one threat is ever blocked; forks go unnoticed.
pub fn heuristic_move<R: Rng>(board: &Board, me: Player, rng: &mut R) -> Option<usize> {
    if let Some(index) = find_winning_cell(board, me) {
        return Some(index);
    }
    if let Some(index) = find_winning_cell(board, me.opponent()) {
        return Some(index);
    }
    random_move(board, rng)
}

/// First empty cell (ascending) that completes a line for `player`.
pub fn find_winning_cell(board: &Board, player: Player) -> Option<usize> {
    let target = Outcome::win_for(player);
    let mut scratch = *board;
    for index in empty_cells(board) {
        scratch[index] = Some(player);
        let wins = evaluate(&scratch) == target;
        scratch[index] = None;
        if wins {
            return Some(index);
        }
    }
    None
}

/// Perfect play: the first move (ascending) holding the maximum minimax value.
pub fn best_move(board: &Board, me: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in minimax_scores(board, me) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Minimax value of every candidate move for `me`, in ascending cell order.
pub fn minimax_scores(board: &Board, me: Player) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    empty_cells(board)
        .into_iter()
        .map(|index| {
            scratch[index] = Some(me);
            let score = minimax(&mut scratch, me, false);
            scratch[index] = None;
            (index, score)
        })
        .collect()
}

/// Full-depth minimax from `me`'s point of view. Values are not depth-discounted.
fn minimax(board: &mut Board, me: Player, my_turn: bool) -> i32 {
    match evaluate(board) {
        Outcome::InProgress => {}
        Outcome::Draw => return SCORE_DRAW,
        outcome if outcome == Outcome::win_for(me) => return SCORE_WIN,
        _ => return SCORE_LOSS,
    }

    let mover = if my_turn { me } else { me.opponent() };
    let mut best = if my_turn { i32::MIN } else { i32::MAX };

    for index in empty_cells(board) {
        board[index] = Some(mover);
        let score = minimax(board, me, !my_turn);
        board[index] = None;
        best = if my_turn {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const H: Option<Player> = Some(Player::Human);
    const A: Option<Player> = Some(Player::Ai);
    const E: Option<Player> = None;

    #[test]
    fn test_hard_blocks_and_forks() {
        // X X . / O O . / . . .
        let board = [H, H, E, A, A, E, E, E, E];
        assert_eq!(best_move(&board, Player::Ai), Some(2));
    }

    #[test]
    fn test_hard_scores_unblocked_moves_as_losses() {
        let board = [H, H, E, A, A, E, E, E, E];
        let scores = minimax_scores(&board, Player::Ai);
        for (index, score) in scores {
            match index {
                2 | 5 => assert_eq!(score, SCORE_WIN, "cell {}", index),
                _ => assert_eq!(score, SCORE_LOSS, "cell {}", index),
            }
        }
    }

    #[test]
    fn test_hard_takes_immediate_win() {
        // O O . / X X . / X . .
        let board = [A, A, E, H, H, E, H, E, E];
        assert_eq!(best_move(&board, Player::Ai), Some(2));
    }

    #[test]
    fn test_hard_answers_corner_opening_with_center() {
        let board = [H, E, E, E, E, E, E, E, E];
        assert_eq!(best_move(&board, Player::Ai), Some(4));
    }

    #[test]
    fn test_hard_plays_for_human_side() {
        // Human to move: O O . / X X . / . . .
        let board = [A, A, E, H, H, E, E, E, E];
        assert_eq!(best_move(&board, Player::Human), Some(2));
    }

    #[test]
    fn test_medium_blocks_open_pair() {
        let board = [H, H, E, E, E, E, E, E, E];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(heuristic_move(&board, Player::Ai, &mut rng), Some(2));
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        // X X . / O O . / X . .
        let board = [H, H, E, A, A, E, H, E, E];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(heuristic_move(&board, Player::Ai, &mut rng), Some(5));
    }

    #[test]
    fn test_medium_blocks_lowest_threat_only() {
        // Two Human threats (2 and 6); the first in ascending order is blocked
        // X X . / X O . / . . O
        let board = [H, H, E, H, A, E, E, E, A];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(heuristic_move(&board, Player::Ai, &mut rng), Some(2));
    }

    #[test]
    fn test_medium_falls_back_to_random_empty_cell() {
        let board = [H, E, E, E, E, E, E, E, E];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let index = heuristic_move(&board, Player::Ai, &mut rng).unwrap();
            assert!(index > 0 && index < 9);
        }
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let board = [H, A, H, E, A, E, E, H, E];
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let index = random_move(&board, &mut rng).unwrap();
            assert!(board[index].is_none());
        }
    }

    #[test]
    fn test_easy_is_roughly_uniform() {
        let board = [E; 9];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 9];
        for _ in 0..1000 {
            let index = select_move(&board, Difficulty::Easy, Player::Ai, &mut rng).unwrap();
            counts[index] += 1;
        }
        // Expected ~111 per cell, std dev ~10; allow five standard deviations
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (61..=161).contains(count),
                "cell {} chosen {} times",
                index,
                count
            );
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = [H, A, H, H, A, A, A, H, H];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for difficulty in Difficulty::ALL {
            assert_eq!(select_move(&board, difficulty, Player::Ai, &mut rng), None);
        }
    }

    #[test]
    fn test_find_winning_cell_none() {
        let board = [H, E, E, E, A, E, E, E, E];
        assert_eq!(find_winning_cell(&board, Player::Human), None);
        assert_eq!(find_winning_cell(&board, Player::Ai), None);
    }
}
