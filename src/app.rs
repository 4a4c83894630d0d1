// /app.rs
use crate::context::Context;
use crate::engine::Tracker;
use crate::error::{Result, TrackerError};
use crate::settings::Settings;
use crate::tui::{Tui, TuiEvent};
use crate::ui::{Component, TrackerScreen};

use crossterm::event::{KeyEvent, KeyEventKind};

pub enum Action {
    Quit,
    ApplyAction(String),
    ToggleTask(String),
    DeleteLogEntry(usize),
    ResetAll,
    SwitchComponent(Box<dyn Component>),
}

pub struct App {
    // Application state and control flow
    running: bool,
    component: Box<dyn Component>,

    // --- Global information
    settings: Settings,
    status: Option<String>,

    // --- Tracker state
    tracker: Tracker,
}

impl App {
    pub fn new(tracker: Tracker, settings: Settings) -> Self {
        Self {
            running: true,
            component: Box::new(TrackerScreen::default()),
            settings,
            status: None,
            tracker,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // Asynchronous function to continuously run and update the application.
    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(4.0) // 4 ticks per second
            .frame_rate(30.0); // 30 frames per second

        tui.enter()?; // Starts event handler, enters raw mode, enters alternate screen

        loop {
            tui.draw(|frame| {
                let context = Context {
                    tracker: &self.tracker,
                    settings: &self.settings,
                    status: self.status.as_deref(),
                };
                self.component
                    .render(frame.area(), frame.buffer_mut(), &context)
            })?;

            if let Some(event) = tui.next().await {
                // `tui.next().await` blocks till next event
                self.handle_tui_event(event)?;
            };

            if !self.running {
                break;
            }
        }

        tui.exit()?; // stops event handler, exits raw mode, exits alternate screen
        Ok(())
    }

    fn handle_tui_event(&mut self, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.on_key(key_event)?
            }
            TuiEvent::Key(_) => {}
            TuiEvent::Init => {}
            TuiEvent::Error => log::warn!("Failed to read a terminal event"),
            TuiEvent::Tick => {}
            TuiEvent::Render => {}
            TuiEvent::FocusGained => {}
            TuiEvent::FocusLost => {}
            TuiEvent::Resize(_, _) => {}
        }
        Ok(())
    }

    pub fn on_key(&mut self, key_event: KeyEvent) -> Result<()> {
        let context = Context {
            tracker: &self.tracker,
            settings: &self.settings,
            status: self.status.as_deref(),
        };
        if let Some(action) = self.component.on_key(key_event, &context) {
            self.handle_action(action)?
        };
        Ok(())
    }

    /// Run one action against the tracker. Storage failures are returned to
    /// the caller; everything else ends up in the status line.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        let outcome = match action {
            Action::Quit => {
                self.running = false;
                return Ok(());
            }
            Action::SwitchComponent(component) => {
                self.component = component;
                return Ok(());
            }
            Action::ApplyAction(name) => self.tracker.apply_action(&name).map(|applied| {
                if applied {
                    format!("{} done", name)
                } else {
                    format!("{} is not available right now", name)
                }
            }),
            Action::ToggleTask(task) => self.tracker.toggle_task(&task).map(|completed| {
                if completed {
                    format!("{} completed", task)
                } else {
                    format!("{} unchecked", task)
                }
            }),
            Action::DeleteLogEntry(index) => self
                .tracker
                .delete_log_entry(index)
                .map(|removed| match removed {
                    Some(entry) => format!("Removed {} from the log", entry.label()),
                    None => "Nothing to delete".to_string(),
                }),
            Action::ResetAll => {
                self.component = Box::new(TrackerScreen::default());
                self.tracker
                    .reset_all()
                    .map(|()| "All data cleared".to_string())
            }
        };

        match outcome {
            Ok(message) => self.status = Some(message),
            Err(e @ (TrackerError::UnknownAction(_) | TrackerError::UnknownTask(_))) => {
                log::warn!("{}", e);
                self.status = Some(e.to_string());
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
