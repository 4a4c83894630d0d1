pub mod app;
pub mod attribute;
pub mod catalog;
pub mod clock;
pub mod context;
pub mod effect;
pub mod engine;
pub mod error;
pub mod journal;
pub mod logging;
pub mod settings;
pub mod state;
pub mod storage;
pub mod tui;
pub mod ui;

// Re-export commonly used items for easier access
pub use attribute::{Attribute, AttributeSet};
pub use catalog::{ActionDef, Catalog};
pub use effect::Effect;
pub use engine::{Persistence, StateChange, StateObserver, Tracker};
pub use error::{Result, TrackerError};
pub use journal::LogEntry;
pub use state::TrackerState;
pub use storage::{JsonFileStore, MemoryStore, StateStore};
