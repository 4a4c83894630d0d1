// ui/tracker_screen.rs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::{
    Component, ConfirmReset,
    constants::{ACTION_COLUMNS, KEY_HINTS, TITLE},
};
use crate::{
    app::Action, attribute::Attribute, catalog::ActionDef, context::Context, journal::LogEntry,
};

// The pane that receives movement and selection keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Actions,
    Tasks,
    Log,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Actions => Pane::Tasks,
            Pane::Tasks => Pane::Log,
            Pane::Log => Pane::Actions,
        }
    }

    fn previous(self) -> Self {
        match self {
            Pane::Actions => Pane::Log,
            Pane::Tasks => Pane::Actions,
            Pane::Log => Pane::Tasks,
        }
    }
}

#[derive(Debug, Default)]
pub struct TrackerScreen {
    focus: Pane,
    selected_action: usize,
    selected_task: usize,
    selected_log: usize,
}

fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

impl Component for TrackerScreen {
    fn on_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::SwitchComponent(Box::new(ConfirmReset::new(
                std::mem::take(self),
            )))),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                None
            }
            _ => match self.focus {
                Pane::Actions => self.on_actions_key(key, context),
                Pane::Tasks => self.on_tasks_key(key, context),
                Pane::Log => self.on_log_key(key, context),
            },
        }
    }

    fn render(&self, area: Rect, buffer: &mut Buffer, context: &Context) {
        let [header, attributes, middle, log, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);
        let [actions, side] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(middle);
        let [tooltip, tasks] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(side);

        self.render_header(buffer, header);
        self.render_attributes(buffer, attributes, context);
        self.render_actions(buffer, actions, context);
        self.render_tooltip(buffer, tooltip, context);
        self.render_tasks(buffer, tasks, context);
        self.render_log(buffer, log, context);
        self.render_status(buffer, status, context);
    }
}

impl TrackerScreen {
    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn selected_action(&self) -> usize {
        self.selected_action
    }

    fn on_actions_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        let actions = context.tracker.catalog().actions();
        let last = actions.len().saturating_sub(1);
        self.selected_action = clamp(self.selected_action, actions.len());
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_action = self.selected_action.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_action = (self.selected_action + 1).min(last);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_action >= ACTION_COLUMNS {
                    self.selected_action -= ACTION_COLUMNS;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_action + ACTION_COLUMNS <= last {
                    self.selected_action += ACTION_COLUMNS;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => actions
                .get(self.selected_action)
                .map(|action| Action::ApplyAction(action.name.clone())),
            _ => None,
        }
    }

    fn on_tasks_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        let tasks = context.tracker.catalog().daily_tasks();
        self.selected_task = clamp(self.selected_task, tasks.len());
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_task = self.selected_task.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_task = clamp(self.selected_task + 1, tasks.len());
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => tasks
                .get(self.selected_task)
                .map(|task| Action::ToggleTask(task.clone())),
            _ => None,
        }
    }

    fn on_log_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        let len = context.tracker.logs().len();
        self.selected_log = clamp(self.selected_log, len);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_log = self.selected_log.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_log = clamp(self.selected_log + 1, len);
                None
            }
            KeyCode::Home => {
                self.selected_log = 0;
                None
            }
            KeyCode::End => {
                self.selected_log = len.saturating_sub(1);
                None
            }
            KeyCode::Char('d') | KeyCode::Delete if len > 0 => {
                Some(Action::DeleteLogEntry(self.selected_log))
            }
            _ => None,
        }
    }

    fn pane_block(&self, title: &str, pane: Pane) -> Block<'static> {
        Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if self.focus == pane {
                Color::Yellow
            } else {
                Color::White
            }))
            .title(format!(" {} ", title))
    }

    fn render_header(&self, buffer: &mut Buffer, area: Rect) {
        let header = Paragraph::new(format!("{}v{}", TITLE, env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        header.render(area, buffer);
    }

    fn render_attributes(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .title(" Attributes ");
        let inner = block.inner(area);
        block.render(area, buffer);

        let attributes = context.tracker.attributes();
        let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);
        for ((attribute, value), row) in attributes.iter().zip(rows.iter()) {
            let [label, bar, number] = Layout::horizontal([
                Constraint::Length(14),
                Constraint::Min(10),
                Constraint::Length(7),
            ])
            .areas(*row);

            Paragraph::new(attribute.to_string())
                .alignment(Alignment::Right)
                .render(label, buffer);
            Gauge::default()
                .gauge_style(Style::default().fg(bar_color(attribute)).bg(Color::DarkGray))
                .ratio(attributes.ratio(attribute, context.settings.bar_max))
                .label("")
                .render(bar, buffer);
            Paragraph::new(value.to_string())
                .alignment(Alignment::Right)
                .render(number, buffer);
        }
    }

    fn render_actions(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let tracker = context.tracker;
        let focused = self.focus == Pane::Actions;
        let selected = clamp(self.selected_action, tracker.catalog().actions().len());

        let rows: Vec<Row> = tracker
            .catalog()
            .actions()
            .chunks(ACTION_COLUMNS)
            .enumerate()
            .map(|(row, actions)| {
                let cells = actions.iter().enumerate().map(|(column, action)| {
                    let index = row * ACTION_COLUMNS + column;
                    let style = action_style(action, tracker.can_apply(action));
                    let style = match (index == selected, focused) {
                        (true, true) => style.add_modifier(Modifier::REVERSED | Modifier::BOLD),
                        (true, false) => style.add_modifier(Modifier::BOLD),
                        _ => style,
                    };
                    Cell::from(action.name.clone()).style(style)
                });
                Row::new(cells).bottom_margin(1)
            })
            .collect();

        let widths = [Constraint::Ratio(1, ACTION_COLUMNS as u32); ACTION_COLUMNS];
        let table = Table::new(rows, widths)
            .column_spacing(1)
            .block(self.pane_block("Actions", Pane::Actions));
        Widget::render(table, area, buffer);
    }

    // The selected action's effects, shown beside the grid.
    fn render_tooltip(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let actions = context.tracker.catalog().actions();
        let Some(action) = actions.get(clamp(self.selected_action, actions.len())) else {
            self.pane_block("Effects", Pane::Actions).render(area, buffer);
            return;
        };

        let mut lines: Vec<Line> = action
            .effect
            .tooltip_lines()
            .into_iter()
            .map(Line::from)
            .collect();
        match action.max_applications {
            Some(1) => lines.push(Line::from("Once per session").style(Color::DarkGray)),
            Some(limit) => {
                lines.push(Line::from(format!("Up to {} times", limit)).style(Color::DarkGray))
            }
            None => {}
        }
        if !context.tracker.can_apply(action) {
            lines.push(Line::from("Unavailable").style(Color::Red));
        }

        let block = Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .title(format!(" {} ", action.name));
        Paragraph::new(lines).block(block).render(area, buffer);
    }

    fn render_tasks(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let tasks = context.tracker.catalog().daily_tasks();
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                if context.tracker.is_task_completed(task) {
                    ListItem::new(Line::from(vec![
                        Span::styled("[x] ", Style::default().fg(Color::Green)),
                        Span::styled(
                            task.clone(),
                            Style::default().add_modifier(Modifier::CROSSED_OUT),
                        ),
                    ]))
                } else {
                    ListItem::new(format!("[ ] {}", task))
                }
            })
            .collect();

        let list = List::new(items)
            .block(self.pane_block("Daily tasks", Pane::Tasks))
            .highlight_style(focus_highlight(self.focus == Pane::Tasks));
        let mut state =
            ListState::default().with_selected(Some(clamp(self.selected_task, tasks.len())));
        StatefulWidget::render(list, area, buffer, &mut state);
    }

    fn render_log(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let logs = context.tracker.logs();
        let items: Vec<ListItem> = logs.iter().map(log_line).map(ListItem::new).collect();

        let list = List::new(items)
            .block(self.pane_block("Log", Pane::Log))
            .highlight_style(focus_highlight(self.focus == Pane::Log))
            .highlight_symbol("> ");
        let selected = (!logs.is_empty()).then(|| clamp(self.selected_log, logs.len()));
        let mut state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, area, buffer, &mut state);
    }

    fn render_status(&self, buffer: &mut Buffer, area: Rect, context: &Context) {
        let (message, color) = match context.status {
            Some(status) => (status, Color::Yellow),
            None => (KEY_HINTS, Color::DarkGray),
        };
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .render(area, buffer);
    }
}

fn bar_color(attribute: Attribute) -> Color {
    match attribute {
        Attribute::Health => Color::Red,
        Attribute::Stamina => Color::Green,
        Attribute::Strength => Color::Yellow,
        Attribute::Intelligence => Color::Blue,
    }
}

fn action_style(action: &ActionDef, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if action.negative {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn focus_highlight(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn log_line(entry: &LogEntry) -> Line<'static> {
    match entry {
        LogEntry::Action {
            action,
            time,
            effects,
        } => Line::from(vec![
            Span::raw(format!("[{}] {}", time, action)),
            Span::styled(
                format!("  {}", effects),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        LogEntry::Task { task, time } => Line::from(vec![
            Span::raw(format!("[{}] ", time)),
            Span::styled(task.clone(), Style::default().fg(Color::Green)),
        ]),
    }
}
