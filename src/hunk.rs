use std::mem;

use crate::classify;
use crate::palette::Palette;
use crate::render::{self, DiffEngine};
use crate::types::{DiffStyle, Role, Side};

/// Lines of the hunk currently being collected.
#[derive(Clone, Debug, Default)]
pub struct HunkBuffer {
    left: Vec<String>,
    center: Vec<String>,
    right: Vec<String>,
}

impl HunkBuffer {
    pub fn new() -> HunkBuffer {
        HunkBuffer::default()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.center.is_empty() && self.right.is_empty()
    }

    /// Route a buffered line to its sequence. Headers and plain lines are
    /// never buffered.
    pub fn append(&mut self, role: Role, line: &str) {
        match role {
            Role::Left => self.left.push(line.to_string()),
            Role::Right => self.right.push(line.to_string()),
            Role::Separator => self.center.push(line.to_string()),
            Role::RangeHeader | Role::Plain => {
                log!("hunk: refused to buffer {:?} line: {:?}", role, line);
            }
        }
    }

    /// Render the buffered hunk and leave the buffer empty.
    ///
    /// Output order is colored left lines, the separator lines as they
    /// came in, then colored right lines.
    pub fn flush<E: DiffEngine>(
        &mut self,
        engine: &E,
        palette: &Palette,
        style: DiffStyle,
    ) -> Vec<String> {
        let left = mem::take(&mut self.left);
        let center = mem::take(&mut self.center);
        let right = mem::take(&mut self.right);

        if left.is_empty() && right.is_empty() {
            return center;
        }

        log!(
            "hunk: flush {} left, {} center, {} right",
            left.len(),
            center.len(),
            right.len()
        );

        let left: Vec<&str> = left
            .iter()
            .map(|x| classify::strip_marker(x, Side::Left, style))
            .collect();
        let right: Vec<&str> = right
            .iter()
            .map(|x| classify::strip_marker(x, Side::Right, style))
            .collect();

        let (mut output, colored_right) = render::render(engine, palette, style, &left, &right);
        output.extend(center);
        output.extend(colored_right);
        output
    }
}
