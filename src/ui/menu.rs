use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, CONTROLS, MODES};

const BANNER: &str = r#"
 ██████╗  ██████╗ ███╗   ██╗ ██████╗
 ██╔══██╗██╔═══██╗████╗  ██║██╔════╝
 ██████╔╝██║   ██║██╔██╗ ██║██║  ███╗
 ██╔═══╝ ██║   ██║██║╚██╗██║██║   ██║
 ██║     ╚██████╔╝██║ ╚████║╚██████╔╝
 ╚═╝      ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝"#;

// Ball colors cycled through the banner accent
const ACCENTS: [Color; 3] = [
    Color::Rgb(255, 255, 255),
    Color::Rgb(255, 80, 80),
    Color::Rgb(80, 255, 80),
];

fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Mode selection popup shown over the field while no match is running.
pub fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered(area, 44, 19);
    if popup.width == 0 || popup.height == 0 {
        return;
    }
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = BANNER
        .lines()
        .skip(1)
        .enumerate()
        .map(|(i, l)| {
            Line::from(Span::styled(
                l,
                Style::default().fg(ACCENTS[i % ACCENTS.len()]).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));

    if let Some(winner) = app.last_winner {
        lines.push(Line::from(Span::styled(
            format!("  🏆 {winner} wins! {}", app.game.title()),
            Style::default().fg(Color::Rgb(0, 255, 0)).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for mode in MODES.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", mode.key),
                Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(mode.name, Style::default().fg(Color::Rgb(180, 180, 200))),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  F1", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" controls  ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("Esc", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" quit", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// F1 overlay listing every control.
pub fn render_controls(frame: &mut Frame, area: Rect) {
    let height = CONTROLS.lines().count() as u16 + 2;
    let popup = centered(area, 56, height);
    if popup.width == 0 || popup.height == 0 {
        return;
    }
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 200, 255)))
        .title(" Controls (F1 to close) ")
        .title_style(Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = CONTROLS
        .lines()
        .skip(1)
        .map(|l| {
            let style = if l.ends_with(':') {
                Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(180, 180, 200))
            };
            Line::from(Span::styled(format!(" {l}"), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
