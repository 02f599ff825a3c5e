use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, MODES};
use crate::game::Side;

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mode = MODES
        .iter()
        .find(|m| m.multiplayer == game.multiplayer() && m.color_mode == game.color_mode())
        .map(|m| m.name)
        .unwrap_or("");

    let status = if !game.is_on() {
        Span::styled("Menu", Style::default().fg(Color::Rgb(120, 120, 140)))
    } else if game.ball.in_play {
        Span::styled(
            format!("Speed {}", game.ball.speed_x),
            Style::default().fg(Color::Rgb(80, 200, 255)),
        )
    } else {
        Span::styled(
            "SPACE to serve",
            Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD),
        )
    };

    let right_name = if game.multiplayer() { "P2" } else { "AI" };
    let line = Line::from(vec![
        Span::styled(
            format!(" P1 {} ", game.scores.score(Side::Left)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("-", Style::default().fg(Color::Rgb(120, 120, 140))),
        Span::styled(
            format!(" {} {} ", game.scores.score(Side::Right), right_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            if game.is_on() { mode } else { "" },
            Style::default().fg(Color::Rgb(200, 120, 255)),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("First to {}", game.scores.win_score()),
            Style::default().fg(Color::Rgb(140, 140, 140)),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        status,
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .border_type(BorderType::Rounded)
        .title(format!(" 🏓 RWG Pong {} ", game.title()))
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Paragraph::new(line).block(block), area);
}
