mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::clock::Clock;
use crate::types::{CountdownLength, Phase};
use help::keybinds_lines;
use helpers::{clamp_name, format_seconds};
use theme::Palette;

const NAME_WIDTH: usize = 32;

/// Renders the entire UI for a single frame.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let palette = Palette::for_theme(app.theme());
    let phase = app.session.phase();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    frame.render_widget(header(app, &palette), layout[0]);
    frame.render_widget(body(app, phase, &palette), layout[1]);
    render_countdown(frame, layout[2], app, phase, &palette);

    let footer = Paragraph::new(Text::from(keybinds_lines(
        phase,
        app.session.can_start(),
        &palette,
    )))
    .alignment(Alignment::Left)
    .block(framed(&palette));
    frame.render_widget(footer, layout[3]);
}

fn framed(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.secondary).bg(palette.background))
}

fn header<C: Clock>(app: &App<C>, palette: &Palette) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            "  motiv  ",
            Style::default().fg(Color::Black).bg(palette.primary),
        ),
        Span::raw(" "),
        Span::styled(
            "motivation timer",
            Style::default()
                .fg(palette.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.theme().as_str()), Style::default().fg(palette.dim)),
    ]);
    Paragraph::new(Text::from(line))
        .alignment(Alignment::Left)
        .block(framed(palette))
}

fn body<C: Clock>(app: &App<C>, phase: Phase, palette: &Palette) -> Paragraph<'static> {
    let session = &app.session;
    let mut lines = Vec::new();

    if session.completed_count() > 0 {
        lines.push(Line::from(vec![
            Span::styled("  Completed timers: ", Style::default().fg(palette.dim)),
            Span::styled(
                session.completed_count().to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if !session.saved_name().is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  Last finished by: ", Style::default().fg(palette.dim)),
                Span::styled(
                    clamp_name(session.saved_name(), NAME_WIDTH),
                    Style::default().fg(palette.text),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    match phase {
        Phase::Completed => {
            let phrase = app.phrase.clone().unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!("  {phrase}"),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "  * * *",
                Style::default().fg(palette.accent),
            )));
        }
        Phase::Idle | Phase::Running => {
            let name_style = if phase == Phase::Running {
                Style::default().fg(palette.dim)
            } else {
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD)
            };
            let cursor = if phase == Phase::Idle { "_" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("  Name: ", Style::default().fg(palette.dim)),
                Span::styled(
                    format!("{}{cursor}", clamp_name(session.name(), NAME_WIDTH)),
                    name_style,
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Duration",
                Style::default().fg(palette.dim),
            )));
            for length in CountdownLength::ALL {
                lines.push(duration_line(length, session.length(), phase, palette));
            }
        }
    }

    Paragraph::new(Text::from(lines))
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Left)
        .block(framed(palette))
}

fn duration_line(
    length: CountdownLength,
    selected: CountdownLength,
    phase: Phase,
    palette: &Palette,
) -> Line<'static> {
    let is_selected = length == selected;
    let marker_style = if is_selected && phase == Phase::Idle {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let label_style = if is_selected {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    Line::from(vec![
        Span::styled(if is_selected { "  > " } else { "    " }, marker_style),
        Span::styled(length.to_string(), label_style),
    ])
}

fn render_countdown<C: Clock>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    phase: Phase,
    palette: &Palette,
) {
    let session = &app.session;
    if phase != Phase::Running {
        frame.render_widget(framed(palette), area);
        return;
    }
    let ratio = (session.progress_percentage() / 100.0).clamp(0.0, 1.0);
    let title = format!(
        " {}, {}s left ",
        clamp_name(session.name(), NAME_WIDTH),
        session.remaining()
    );
    let gauge = Gauge::default()
        .block(framed(palette).title(title))
        .gauge_style(Style::default().fg(palette.active).bg(palette.background))
        .ratio(ratio)
        .label(format_seconds(session.remaining()));
    frame.render_widget(gauge, area);
}
