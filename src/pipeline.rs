use std::cell::OnceCell;

use crate::classify;
use crate::detect;
use crate::hunk::HunkBuffer;
use crate::palette::Palette;
use crate::render::{DiffEngine, MyersEngine};
use crate::types::{Detection, DiffStyle, Role};

/// Turns the lines of one diff into colored output lines.
///
/// A `Colorizer` is good for one run: the diff style is fixed the first
/// time it is known and never changes afterwards.
pub struct Colorizer<E: DiffEngine = MyersEngine> {
    engine: E,
    palette: Palette,
    detection: Detection,
    style: OnceCell<DiffStyle>,
    buffer: HunkBuffer,
}

impl Colorizer<MyersEngine> {
    pub fn new() -> Colorizer<MyersEngine> {
        Colorizer::with_engine(MyersEngine::default())
    }
}

impl Default for Colorizer<MyersEngine> {
    fn default() -> Self {
        Colorizer::new()
    }
}

impl<E: DiffEngine> Colorizer<E> {
    pub fn with_engine(engine: E) -> Colorizer<E> {
        Colorizer {
            engine,
            palette: Palette::default(),
            detection: Detection::PreScan,
            style: OnceCell::new(),
            buffer: HunkBuffer::new(),
        }
    }

    pub fn detection(mut self, detection: Detection) -> Self {
        self.detection = detection;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn style(&self) -> DiffStyle {
        self.style.get().copied().unwrap_or(DiffStyle::Unknown)
    }

    /// Fix the style before any line is pushed. Returns false if it was
    /// already fixed.
    pub fn set_style(&self, style: DiffStyle) -> bool {
        let fixed = self.style.set(style).is_ok();
        if fixed {
            log!("pipeline: diff style {:?}", style);
        }
        fixed
    }

    /// Color a complete input.
    pub fn color<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        if self.detection == Detection::PreScan && self.style.get().is_none() {
            self.set_style(detect::detect_style(lines));
        }

        let mut output = Vec::with_capacity(lines.len());
        for line in lines {
            self.push_line(line.as_ref(), &mut output);
        }
        self.finish(&mut output);
        output
    }

    /// Feed one line, appending whatever became ready to `output`.
    pub fn push_line(&mut self, line: &str, output: &mut Vec<String>) {
        if self.style.get().is_none() {
            if let Some(style) = detect::range_header_style(line) {
                self.set_style(style);
            }
        }

        let style = self.style();
        match classify::classify(line, style) {
            Role::RangeHeader => {
                self.flush_into(output);
                output.push(format!("{}{}{}", self.palette.info, line, self.palette.reset));
            }
            Role::Plain => {
                self.flush_into(output);
                output.push(line.to_string());
            }
            role => self.buffer.append(role, line),
        }
    }

    /// Drain the trailing hunk at end of input.
    pub fn finish(&mut self, output: &mut Vec<String>) {
        self.flush_into(output);
    }

    fn flush_into(&mut self, output: &mut Vec<String>) {
        if self.buffer.is_empty() {
            return;
        }
        let style = self.style();
        output.extend(self.buffer.flush(&self.engine, &self.palette, style));
    }
}
