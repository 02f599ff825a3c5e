pub mod digits;
pub mod field;
pub mod header;
pub mod menu;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(0),    // Field
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    header::render_header(frame, app, chunks[0]);
    field::render_field(frame, app, chunks[1]);
    render_help_bar(frame, app, chunks[2]);

    if !app.game.is_on() {
        menu::render_menu(frame, app, chunks[1]);
    }

    // Controls overlay renders on top of everything
    if app.show_help {
        menu::render_controls(frame, frame.area());
    }
}

fn render_help_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(Color::Rgb(80, 200, 255));
    let text = Style::default().fg(Color::DarkGray);
    let sep = Style::default().fg(Color::Rgb(60, 60, 60));

    let mut spans = vec![
        Span::styled(" W/S ", key),
        Span::styled("P1 ", text),
    ];
    if app.game.multiplayer() {
        spans.push(Span::styled("│ ", sep));
        spans.push(Span::styled("↑/↓ ", key));
        spans.push(Span::styled("P2 ", text));
    }
    if app.game.color_mode() {
        spans.push(Span::styled("│ ", sep));
        spans.push(Span::styled("A/D ", key));
        if app.game.multiplayer() {
            spans.push(Span::styled("←/→ ", key));
        }
        spans.push(Span::styled("Color ", text));
    }
    spans.extend([
        Span::styled("│ ", sep),
        Span::styled("SPACE ", key),
        Span::styled("Serve ", text),
        Span::styled("│ ", sep),
        Span::styled("F1 ", key),
        Span::styled("Help ", text),
        Span::styled("│ ", sep),
        Span::styled("F2 ", key),
        Span::styled(if app.scanlines { "Scanlines on " } else { "Scanlines off " }, text),
        Span::styled("│ ", sep),
        Span::styled("Esc ", key),
        Span::styled("Menu", text),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
