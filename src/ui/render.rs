//! Draws a [`View`] with ratatui.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::types::Phase;

use super::input::{KEY_HINTS, RESET_KEY};
use super::view::{LengthControl, View};

/// Draws the whole panel into the frame.
pub fn render(frame: &mut Frame, view: &View) {
    let [header, lengths, timer, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, view, header);

    let [break_area, session_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lengths);
    render_length_control(frame, &view.break_control, break_area);
    render_length_control(frame, &view.session_control, session_area);

    render_timer(frame, view, timer);

    let legend = Paragraph::new(KEY_HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(legend, hints);
}

fn render_header(frame: &mut Frame, view: &View, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(view.logo, Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled(view.title, Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered());
    frame.render_widget(title, area);
}

fn render_length_control(frame: &mut Frame, control: &LengthControl, area: Rect) {
    let style = if control.enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(format!("[{}] - ", control.decrement_key), style),
        Span::styled(
            format!("{:>2}", control.minutes),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" + [{}]", control.increment_key), style),
    ]);

    let panel = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(control.label));
    frame.render_widget(panel, area);
}

fn render_timer(frame: &mut Frame, view: &View, area: Rect) {
    let accent = match view.phase {
        Phase::Session => Color::Green,
        Phase::Break => Color::Cyan,
    };

    let lines = vec![
        Line::from(Span::styled(view.timer_label, Style::default().fg(accent))),
        Line::from(Span::styled(
            view.time_left.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("[space] {}", view.start_stop_label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::raw(format!("[{}] {}", RESET_KEY, view.reset_label)),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimerState;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(view: &View) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_default_panel() {
        let screen = draw(&View::from_state(&TimerState::default()));

        assert!(screen.contains("Pomodoro Timer"));
        assert!(screen.contains("Break Length"));
        assert!(screen.contains("Session Length"));
        assert!(screen.contains("Session"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_renders_lengths() {
        let state = TimerState {
            session_length: 42,
            break_length: 7,
            ..TimerState::default()
        };

        let screen = draw(&View::from_state(&state));

        assert!(screen.contains("42"));
        assert!(screen.contains(" 7"));
    }

    #[test]
    fn test_renders_running_break() {
        let state = TimerState {
            is_running: true,
            phase: crate::types::Phase::Break,
            time_left: 299,
            ..TimerState::default()
        };

        let screen = draw(&View::from_state(&state));

        assert!(screen.contains("Break"));
        assert!(screen.contains("04:59"));
        assert!(screen.contains("Pause"));
        assert!(!screen.contains("Start"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let view = View::from_state(&TimerState::default());
        terminal.draw(|frame| render(frame, &view)).unwrap();
    }
}
