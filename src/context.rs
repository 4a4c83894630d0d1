use crate::{engine::Tracker, settings::Settings};

// Read-only view handed to components for key handling and rendering.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub tracker: &'a Tracker,
    pub settings: &'a Settings,
    pub status: Option<&'a str>,
}
