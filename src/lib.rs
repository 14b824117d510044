//! diffc colors `diff` output for the terminal, highlighting the exact
//! characters that changed inside each modified line.
//!
//! Both traditional (`1c1`, `<`, `---`, `>`) and unified (`@@ -1 +1 @@`,
//! `-`, `+`) diffs are understood. Anything else passes through untouched.
//!
//! **Use diffc as a library**
//!
//! ```no_run
//! let diff = ["1c1", "< check this dokument.", "---", "> check this document."];
//! for line in diffc::colorize(&diff) {
//!     println!("{}", line);
//! }
//! ```
//!
//! The lower level [`Colorizer`] takes a custom palette, diff engine or
//! detection mode, and can be fed one line at a time.
//!
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod tlog;
#[macro_use]
pub mod tools;

pub mod classify;
pub mod config;
pub mod detect;
pub mod hunk;
pub mod input;
pub mod palette;
pub mod pipeline;
pub mod render;
pub mod signals;
pub mod types;

pub use config::Config;
pub use palette::Palette;
pub use pipeline::Colorizer;
pub use render::{DiffEngine, MyersEngine};
pub use types::{Detection, DiffStyle, EditOp, EditSegment, Role};

/// Color a whole diff with the default palette and engine.
pub fn colorize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    Colorizer::new().color(lines)
}
