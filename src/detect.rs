use regex::Regex;

use crate::types::DiffStyle;

lazy_static! {
    // e.g. `1c1`, `1,2c1,2`, `0a1,3`, `4,5d3`
    static ref RE_TRD_RANGE: Regex = Regex::new(r"^[\d,]*(a|c|d)[\d,]*$").unwrap();
    // e.g. `@@ -1,5 +1,5 @@`
    static ref RE_UNI_RANGE: Regex = Regex::new(r"^@@[\s\d\-\+,]+@@$").unwrap();
}

pub fn is_traditional_range(line: &str) -> bool {
    RE_TRD_RANGE.is_match(line)
}

pub fn is_unified_range(line: &str) -> bool {
    RE_UNI_RANGE.is_match(line)
}

/// The style whose range header `line` is, if any.
pub fn range_header_style(line: &str) -> Option<DiffStyle> {
    if is_traditional_range(line) {
        Some(DiffStyle::Traditional)
    } else if is_unified_range(line) {
        Some(DiffStyle::Unified)
    } else {
        None
    }
}

/// Does `line` open a hunk for the given style?
pub fn is_range_header(line: &str, style: DiffStyle) -> bool {
    match style {
        DiffStyle::Traditional => is_traditional_range(line),
        DiffStyle::Unified => is_unified_range(line),
        DiffStyle::Unknown => false,
    }
}

/// Decide the diff style of a whole input.
///
/// The first range header wins. Without any range header, the first line
/// starting with a change marker decides: `<`/`>` for traditional diffs,
/// `-`/`+` for unified ones.
pub fn detect_style<S: AsRef<str>>(lines: &[S]) -> DiffStyle {
    for line in lines {
        if let Some(style) = range_header_style(line.as_ref()) {
            return style;
        }
    }

    for line in lines {
        match line.as_ref().chars().next() {
            Some('<') | Some('>') => return DiffStyle::Traditional,
            Some('-') | Some('+') => return DiffStyle::Unified,
            _ => {}
        }
    }

    DiffStyle::Unknown
}
