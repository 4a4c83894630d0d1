// ui/draw.rs

use ratatui::layout::{Constraint, Flex, Layout, Rect};

// Center a rectangle of the given size inside `area`.
pub fn center_rect(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}
