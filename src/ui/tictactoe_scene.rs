//! Tic-Tac-Toe game UI rendering.

use super::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_status_bar, render_thinking_status_bar, GameResultType,
};
use super::throbber::thinking_message;
use crate::tictactoe::{winning_line, Outcome, Phase, Player, TicTacToeGame, BOARD_SIDE};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Characters per cell, including padding.
const CELL_WIDTH: usize = 5;

const HUMAN_COLOR: Color = Color::White;
const AI_COLOR: Color = Color::LightRed;
const WIN_COLOR: Color = Color::Green;

/// Render the Tic-Tac-Toe game scene.
pub fn render_tictactoe_scene(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let layout = create_game_layout(frame, area, " Tic-Tac-Toe ", Color::Cyan, 9, 24);

    render_board(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.phase() == Phase::Terminal {
        render_result_banner(frame, layout.content, game.outcome());
    }
}

fn render_board(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let board_width = (CELL_WIDTH * BOARD_SIDE + BOARD_SIDE - 1) as u16;
    let board_height = (BOARD_SIDE * 2 - 1) as u16;
    let y_offset = area.y + (area.height.saturating_sub(board_height)) / 2;
    let x_offset = area.x + (area.width.saturating_sub(board_width)) / 2;

    let line = winning_line(&game.board);
    let show_cursor = game.phase() == Phase::PlayerToMove;
    let grid_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    for row in 0..BOARD_SIDE {
        let mut spans = Vec::new();
        for col in 0..BOARD_SIDE {
            let index = row * BOARD_SIDE + col;
            let is_cursor = show_cursor && game.cursor == index;
            let is_winning = line.is_some_and(|cells| cells.contains(&index));
            let is_last_move = game.last_move == Some(index);

            let (symbol, mut style) = match game.board[index] {
                Some(player) => {
                    let color = if is_winning {
                        WIN_COLOR
                    } else if player == Player::Human {
                        HUMAN_COLOR
                    } else {
                        AI_COLOR
                    };
                    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                    if is_last_move && !is_winning {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    (player.symbol().to_string(), style)
                }
                // Empty cells show their number key
                None => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
            };
            if is_cursor {
                style = style.bg(Color::DarkGray).fg(Color::Yellow);
            }

            spans.push(Span::styled(
                format!("{:^width$}", symbol, width = CELL_WIDTH),
                style,
            ));
            if col < BOARD_SIDE - 1 {
                spans.push(Span::styled("│", grid_style));
            }
        }
        lines.push(Line::from(spans));

        if row < BOARD_SIDE - 1 {
            let segment = "─".repeat(CELL_WIDTH);
            let separator = vec![segment; BOARD_SIDE].join("┼");
            lines.push(Line::from(Span::styled(separator, grid_style)));
        }
    }

    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(
            x_offset,
            y_offset,
            board_width.min(area.width),
            board_height.min(area.height),
        ),
    );
}

/// Render the status bar below the board.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    match game.phase() {
        Phase::OpponentThinking => {
            let seed = game.pending_move.map(|m| m.message_seed).unwrap_or(0);
            render_thinking_status_bar(
                frame,
                area,
                thinking_message(seed),
                &[("[D]", "Difficulty"), ("[R]", "Restart"), ("[Q]", "Quit")],
            );
        }
        Phase::Terminal => {
            render_status_bar(
                frame,
                area,
                "Game over",
                Color::Gray,
                &[("[R]", "Play again"), ("[D]", "Difficulty"), ("[Q]", "Quit")],
            );
        }
        Phase::PlayerToMove => {
            render_status_bar(
                frame,
                area,
                "Your turn",
                Color::White,
                &[
                    ("[Arrows/1-9]", "Move"),
                    ("[Enter]", "Place"),
                    ("[D]", "Difficulty"),
                    ("[R]", "Restart"),
                ],
            );
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let inner = render_info_panel_frame(frame, area);
    let score = &game.score;

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines: Vec<Line> = vec![
        heading("RULES"),
        Line::from(Span::styled(
            "Three in a row wins.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("You: ", Style::default().fg(Color::White)),
            Span::styled(
                Player::Human.symbol(),
                Style::default().fg(HUMAN_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  AI: ", Style::default().fg(Color::Gray)),
            Span::styled(
                Player::Ai.symbol(),
                Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        info_line("Difficulty: ", game.difficulty.name().to_string(), Color::Cyan),
        Line::from(Span::styled(
            game.difficulty.description(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        heading("SCORE"),
        info_line("Wins:   ", score.wins.to_string(), Color::Green),
        info_line("Losses: ", score.losses.to_string(), Color::Red),
        info_line("Draws:  ", score.draws.to_string(), Color::Yellow),
    ];

    if let Some(percent) = score.unbeaten_percent() {
        lines.push(info_line("Unbeaten: ", format!("{}%", percent), Color::Cyan));
    }
    lines.push(Line::from(Span::styled(
        "[C] clear score",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result_banner(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let (result_type, title, message) = match outcome {
        Outcome::HumanWins => (GameResultType::Win, "VICTORY!", "Three in a row!"),
        Outcome::AiWins => (GameResultType::Loss, "DEFEAT", "The opponent got three in a row."),
        Outcome::Draw => (GameResultType::Draw, "DRAW", "The board is full."),
        Outcome::InProgress => return,
    };
    render_game_over_banner(
        frame,
        area,
        result_type,
        title,
        message,
        "[R] Play again  [Q] Quit",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{process_human_move, Difficulty};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(game: &TicTacToeGame) -> String {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_tictactoe_scene(frame, area, game);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_marks_and_difficulty() {
        let mut game = TicTacToeGame::new(Difficulty::Medium, 10);
        process_human_move(&mut game, 4);
        let screen = render_to_string(&game);
        assert!(screen.contains("Tic-Tac-Toe"));
        assert!(screen.contains('X'));
        assert!(screen.contains("Medium"));
    }

    #[test]
    fn test_renders_result_banner() {
        let mut game = TicTacToeGame::new(Difficulty::Easy, 0);
        game.board = [
            Some(Player::Human),
            Some(Player::Human),
            None,
            Some(Player::Ai),
            Some(Player::Ai),
            None,
            None,
            None,
            None,
        ];
        process_human_move(&mut game, 2);
        let screen = render_to_string(&game);
        assert!(screen.contains("VICTORY!"));
    }
}
