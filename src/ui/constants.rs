// ui/constants.rs

pub const TITLE: &str = " Attribute Overview ";
pub const ACTION_COLUMNS: usize = 4;
pub const KEY_HINTS: &str =
    "Tab: switch pane | ←↓↑→ or hjkl: move | Enter: select | d: delete log entry | c: clear data | q: quit";
