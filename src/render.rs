use std::time::Duration;

use similar::{Algorithm, ChangeTag, TextDiff};

use crate::classify;
use crate::palette::Palette;
use crate::types::{DiffStyle, EditOp, EditSegment, Side};

pub const LINE_BREAK: char = '\n';

/// Anything that can compute an edit script between two strings.
pub trait DiffEngine {
    fn diff(&self, a: &str, b: &str) -> Vec<EditSegment>;
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Character level Myers diff backed by `similar`.
///
/// Past the timeout the search gives up on finding a minimal script and
/// reports the remaining text as deleted and inserted.
#[derive(Clone, Copy, Debug)]
pub struct MyersEngine {
    timeout: Option<Duration>,
}

impl MyersEngine {
    /// A zero `timeout` means no deadline at all.
    pub fn with_timeout(timeout: Duration) -> MyersEngine {
        MyersEngine {
            timeout: if timeout.is_zero() { None } else { Some(timeout) },
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for MyersEngine {
    fn default() -> Self {
        MyersEngine::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl DiffEngine for MyersEngine {
    fn diff(&self, a: &str, b: &str) -> Vec<EditSegment> {
        let mut config = TextDiff::configure();
        config.algorithm(Algorithm::Myers);
        if let Some(timeout) = self.timeout {
            config.timeout(timeout);
        }
        let diff = config.diff_chars(a, b);

        let mut segments: Vec<EditSegment> = Vec::new();
        for change in diff.iter_all_changes() {
            let op = match change.tag() {
                ChangeTag::Equal => EditOp::Equal,
                ChangeTag::Delete => EditOp::Delete,
                ChangeTag::Insert => EditOp::Insert,
            };
            let value = change.value();
            match segments.last_mut() {
                Some(last) if last.op == op => last.text.push_str(value),
                _ => segments.push(EditSegment::new(op, value)),
            }
        }
        segments
    }
}

/// Wrap `text` in `color`, closing and re-opening it around every line break
/// so each line carries its own color state once the block is split.
pub fn paint(text: &str, color: &str, reset: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let line_break = format!("{}{}{}", reset, LINE_BREAK, color);
    format!("{}{}{}", color, text.replace(LINE_BREAK, &line_break), reset)
}

fn split_into_lines(header: &str, color: &str, reset: &str, block: &str) -> Vec<String> {
    block
        .split(LINE_BREAK)
        .map(|x| format!("{}{}{}{}", color, header, reset, x))
        .collect()
}

/// Word-diff the left and right lines of one hunk as two whole blocks.
///
/// Lines come in without their markers and go out with colored headers.
/// Each side yields as many lines as it was given; a side with no lines
/// yields none.
pub fn render<E: DiffEngine, S: AsRef<str>>(
    engine: &E,
    palette: &Palette,
    style: DiffStyle,
    left: &[S],
    right: &[S],
) -> (Vec<String>, Vec<String>) {
    let left_text = join_lines(left);
    let right_text = join_lines(right);

    let mut left_str = String::new();
    let mut right_str = String::new();
    for seg in engine.diff(&left_text, &right_text) {
        match seg.op {
            EditOp::Delete => {
                left_str.push_str(&paint(&seg.text, &palette.left_changed, &palette.reset));
            }
            EditOp::Insert => {
                right_str.push_str(&paint(&seg.text, &palette.right_changed, &palette.reset));
            }
            EditOp::Equal => {
                left_str.push_str(&paint(&seg.text, &palette.left_context, &palette.reset));
                right_str.push_str(&paint(&seg.text, &palette.right_context, &palette.reset));
            }
        }
    }

    let left_lines = if left.is_empty() {
        Vec::new()
    } else {
        let header = classify::header(Side::Left, style);
        split_into_lines(header, &palette.left_context, &palette.reset, &left_str)
    };
    let right_lines = if right.is_empty() {
        Vec::new()
    } else {
        let header = classify::header(Side::Right, style);
        split_into_lines(header, &palette.right_context, &palette.reset, &right_str)
    };

    (left_lines, right_lines)
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(LINE_BREAK);
        }
        text.push_str(line.as_ref());
    }
    text
}
