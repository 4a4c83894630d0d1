// engine.rs

use std::fmt;

use crate::attribute::AttributeSet;
use crate::catalog::{ActionDef, Catalog};
use crate::clock::{Clock, LocalClock};
use crate::error::{Result, TrackerError};
use crate::journal::LogEntry;
use crate::state::TrackerState;
use crate::storage::StateStore;

/// What happened to the state after an operation.
#[derive(Debug, Clone, Copy)]
pub enum StateChange<'a> {
    Updated(&'a TrackerState),
    Cleared,
}

/// Notified after every mutating operation. Errors abort the operation's
/// caller but the in-memory change has already happened.
pub trait StateObserver {
    fn on_state_changed(&mut self, change: StateChange<'_>) -> Result<()>;
}

/// Writes the state to a [`StateStore`] whenever it changes.
pub struct Persistence<S: StateStore> {
    store: S,
}

impl<S: StateStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: StateStore> StateObserver for Persistence<S> {
    fn on_state_changed(&mut self, change: StateChange<'_>) -> Result<()> {
        match change {
            StateChange::Updated(state) => self.store.save(state),
            StateChange::Cleared => self.store.clear(),
        }
    }
}

/// Owns the tracker state and is the only place it is mutated.
pub struct Tracker {
    state: TrackerState,
    catalog: Catalog,
    clock: Box<dyn Clock>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .field("clock", &self.clock)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Tracker {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, TrackerState::default())
    }

    pub fn with_state(catalog: Catalog, state: TrackerState) -> Self {
        Self {
            state,
            catalog,
            clock: Box::new(LocalClock),
            observers: Vec::new(),
        }
    }

    /// Read the saved state once and keep `store` updated from then on.
    /// A record that cannot be read is logged and replaced by the defaults.
    pub fn load<S: StateStore + 'static>(catalog: Catalog, store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                log::info!("Loaded saved state with {} log entries", state.logs.len());
                state
            }
            Ok(None) => {
                log::info!("No saved state found, starting from baseline");
                TrackerState::default()
            }
            Err(e) => {
                log::error!("Error parsing saved data: {}", e);
                TrackerState::default()
            }
        };
        let mut tracker = Self::with_state(catalog, state);
        tracker.subscribe(Persistence::new(store));
        tracker
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.state.attributes
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.state.logs
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_task_completed(&self, task: &str) -> bool {
        self.state.is_task_completed(task)
    }

    pub fn can_apply(&self, action: &ActionDef) -> bool {
        self.state.can_apply(action)
    }

    /// Apply the named catalog action. Returns `false` without touching the
    /// state when the action is currently refused.
    pub fn apply_action(&mut self, name: &str) -> Result<bool> {
        let action = self
            .catalog
            .action(name)
            .ok_or_else(|| TrackerError::UnknownAction(name.to_string()))?;

        if self.state.apply_action(action, self.clock.now()).is_none() {
            log::info!("Refused action '{}'", name);
            return Ok(false);
        }
        log::debug!("Applied '{}': {:?}", name, self.state.attributes);
        self.notify_updated()?;
        Ok(true)
    }

    /// Toggle a daily task. Returns whether it is now completed.
    pub fn toggle_task(&mut self, task: &str) -> Result<bool> {
        if !self.catalog.has_task(task) {
            return Err(TrackerError::UnknownTask(task.to_string()));
        }
        let completed = self.state.toggle_task(task, self.clock.now());
        log::debug!("Task '{}' completed: {}", task, completed);
        self.notify_updated()?;
        Ok(completed)
    }

    /// Delete the journal entry at `index` (0 is the newest), undoing its
    /// effect. Out of range indices are ignored.
    pub fn delete_log_entry(&mut self, index: usize) -> Result<Option<LogEntry>> {
        let Some(entry) = self.state.delete_log_entry(index) else {
            log::debug!("Ignored delete of log entry {}", index);
            return Ok(None);
        };
        log::debug!("Deleted log entry {}: {}", index, entry.label());
        self.notify_updated()?;
        Ok(Some(entry))
    }

    // Back to baseline with an empty journal and no completed tasks; the saved record is erased.
    pub fn reset_all(&mut self) -> Result<()> {
        self.state.reset();
        log::info!("Tracker reset to baseline");
        for observer in self.observers.iter_mut() {
            observer.on_state_changed(StateChange::Cleared)?;
        }
        Ok(())
    }

    fn notify_updated(&mut self) -> Result<()> {
        let change = StateChange::Updated(&self.state);
        for observer in self.observers.iter_mut() {
            observer.on_state_changed(change)?;
        }
        Ok(())
    }
}
