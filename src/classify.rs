use regex::Regex;

use crate::detect;
use crate::types::{DiffStyle, Role, Side};

lazy_static! {
    static ref RE_TRD_SEPARATOR: Regex = Regex::new(r"^-+$").unwrap();
}

/// Tag a line with its role under the given style.
///
/// Range headers are checked first. Anything without a recognised marker
/// is `Plain`, including unified context lines (leading space).
pub fn classify(line: &str, style: DiffStyle) -> Role {
    if detect::is_range_header(line, style) {
        return Role::RangeHeader;
    }

    match style {
        DiffStyle::Unknown => Role::Plain,
        DiffStyle::Traditional => {
            if line.starts_with('<') {
                Role::Left
            } else if line.starts_with('>') {
                Role::Right
            } else if RE_TRD_SEPARATOR.is_match(line) {
                Role::Separator
            } else {
                Role::Plain
            }
        }
        DiffStyle::Unified => {
            if line.starts_with('-') {
                Role::Left
            } else if line.starts_with('+') {
                Role::Right
            } else {
                Role::Plain
            }
        }
    }
}

/// The marker put in front of a rendered line.
pub fn header(side: Side, style: DiffStyle) -> &'static str {
    match (style, side) {
        (DiffStyle::Traditional, Side::Left) => "< ",
        (DiffStyle::Traditional, Side::Right) => "> ",
        (DiffStyle::Unified, Side::Left) => "-",
        (DiffStyle::Unified, Side::Right) => "+",
        (DiffStyle::Unknown, _) => "",
    }
}

/// Remove the side header from a buffered line: `"< "`/`"> "` in
/// traditional style, `-`/`+` in unified style.
///
/// Only lines classified as `side` reach here. A traditional line whose
/// marker is not followed by a space keeps its marker.
pub fn strip_marker(line: &str, side: Side, style: DiffStyle) -> &str {
    let h = header(side, style);
    line.strip_prefix(h).unwrap_or(line)
}
