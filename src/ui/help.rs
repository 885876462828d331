use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::Palette;
use crate::types::Phase;

/// Key hints for the actions valid in `phase`.
pub fn keybinds_lines(phase: Phase, can_start: bool, palette: &Palette) -> Vec<Line<'static>> {
    let mut binds: Vec<(&str, &str)> = Vec::new();
    match phase {
        Phase::Idle => {
            binds.push(("type", "name"));
            binds.push(("up/down", "duration"));
            if can_start {
                binds.push(("enter", "start"));
            }
        }
        Phase::Running => {}
        Phase::Completed => binds.push(("enter", "try again")),
    }
    binds.push(("F5", "reset"));
    binds.push(("F2", "theme"));
    binds.push(("esc", "quit"));

    let mut spans = Vec::new();
    for (index, (key, action)) in binds.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", Style::default().fg(palette.dim)));
        }
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(palette.dim),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if phase == Phase::Idle && !can_start {
        lines.push(Line::from(Span::styled(
            "Enter your name to start",
            Style::default().fg(palette.warn),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn flat(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn start_hint_only_when_startable() {
        let palette = Palette::for_theme(Theme::Light);
        let blocked = flat(&keybinds_lines(Phase::Idle, false, &palette));
        assert!(!blocked.contains("enter start"));
        assert!(blocked.contains("Enter your name to start"));
        let ready = flat(&keybinds_lines(Phase::Idle, true, &palette));
        assert!(ready.contains("enter start"));
    }

    #[test]
    fn try_again_only_when_completed() {
        let palette = Palette::for_theme(Theme::Dark);
        assert!(flat(&keybinds_lines(Phase::Completed, false, &palette)).contains("try again"));
        let running = flat(&keybinds_lines(Phase::Running, false, &palette));
        assert!(!running.contains("try again"));
        assert!(running.contains("F5 reset"));
    }
}
