/// `eprintln!` that never panics when stderr is gone.
#[macro_export]
macro_rules! println_stderr {
    ($fmt:expr) => ({
        use std::io::Write as _;
        if let Err(e) = writeln!(&mut ::std::io::stderr(), $fmt) {
            $crate::log!("write to stderr failed: {:?}", e);
        }
    });
    ($fmt:expr, $($arg:tt)*) => ({
        use std::io::Write as _;
        if let Err(e) = writeln!(&mut ::std::io::stderr(), $fmt, $($arg)*) {
            $crate::log!("write to stderr failed: {:?}", e);
        }
    });
}

use std::io::{self, Write};

/// Write output lines, each followed by a newline.
///
/// A reader that went away (e.g. `diffc ... | head`) is not an error.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        match writeln!(out, "{}", line) {
            Ok(_) => {}
            Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e),
        }
    }
    match out.flush() {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
