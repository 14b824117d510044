// plain SGR sequences, see https://misc.flogisoft.com/bash/tip_colors_and_formatting
pub const RESET: &str = "\x1B[0m";

pub const BLACK: &str = "\x1B[30m";
pub const RED: &str = "\x1B[31m";
pub const GREEN: &str = "\x1B[32m";
pub const CYAN: &str = "\x1B[36m";

pub const RED_BG: &str = "\x1B[41m";
pub const GREEN_BG: &str = "\x1B[42m";

/// Color sequences for each role of a colored diff.
///
/// `left_*` is used for lines removed from the old file, `right_*` for lines
/// added in the new one. Context colors paint text shared by both sides,
/// changed colors paint text only one side has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub info: String,
    pub left_context: String,
    pub left_changed: String,
    pub right_context: String,
    pub right_changed: String,
    pub reset: String,
}

impl Palette {
    pub fn new() -> Palette {
        Palette {
            info: CYAN.to_string(),
            left_context: RED.to_string(),
            left_changed: format!("{}{}", RED_BG, BLACK),
            right_context: GREEN.to_string(),
            right_changed: format!("{}{}", GREEN_BG, BLACK),
            reset: RESET.to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}
