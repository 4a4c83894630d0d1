// ui/mod.rs

mod component;
mod confirm_reset;
mod constants;
mod draw;
mod tracker_screen;

pub use component::Component;
pub use confirm_reset::ConfirmReset;
pub use draw::center_rect;
pub use tracker_screen::{Pane, TrackerScreen};
