pub mod game_common;
pub mod throbber;
pub mod tictactoe_scene;

use crate::build_info;
use crate::tictactoe::TicTacToeGame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Largest area the game scene grows to.
const MAX_SCENE_WIDTH: u16 = 70;
const MAX_SCENE_HEIGHT: u16 = 20;

/// Main UI drawing function: centered game scene plus a one-line footer.
pub fn draw_ui(frame: &mut Frame, game: &TicTacToeGame) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Game scene
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let scene_area = centered(v_chunks[0], MAX_SCENE_WIDTH, MAX_SCENE_HEIGHT);
    tictactoe_scene::render_tictactoe_scene(frame, scene_area, game);
    draw_footer(frame, v_chunks[1]);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(format!(
        "[Q] Quit   {}",
        build_info::version_line()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// A rect of at most `width` x `height`, centered inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered(area, 70, 20);
        assert_eq!(rect, Rect::new(15, 10, 70, 20));
    }

    #[test]
    fn test_centered_shrinks_to_small_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered(area, 70, 20);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }
}
