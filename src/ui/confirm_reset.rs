// ui/confirm_reset.rs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::*,
};

use super::{Component, TrackerScreen, center_rect};
use crate::{app::Action, context::Context};

// Asks before wiping every attribute, log entry and task. Drawn over the screen it came from.
#[derive(Debug)]
pub struct ConfirmReset {
    previous: TrackerScreen,
}

impl ConfirmReset {
    pub fn new(previous: TrackerScreen) -> Self {
        Self { previous }
    }
}

impl Component for ConfirmReset {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ResetAll),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(
                Action::SwitchComponent(Box::new(std::mem::take(&mut self.previous))),
            ),
            _ => None,
        }
    }

    fn render(&self, area: Rect, buffer: &mut Buffer, context: &Context) {
        self.previous.render(area, buffer, context);

        let popup = center_rect(area, Constraint::Length(52), Constraint::Length(6));
        Clear.render(popup, buffer);

        let text = vec![
            Line::from("Clear all attributes, tasks and log entries?"),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from("y: clear   n / Esc: cancel").style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Clear data "),
            )
            .render(popup, buffer);
    }
}
