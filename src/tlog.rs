use std::fmt;

use time::OffsetDateTime;

/// Wall clock time of a log entry, local when the offset is known.
pub struct Stamp(OffsetDateTime);

impl Stamp {
    pub fn now() -> Stamp {
        Stamp(OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()))
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            t.year(),
            u8::from(t.month()),
            t.day(),
            t.hour(),
            t.minute(),
            t.second(),
            t.millisecond()
        )
    }
}

pub fn getpid() -> i32 {
    unsafe { libc::getpid() }
}

/// Write one `[stamp][pid] message` line to `path`.
pub fn append(path: &str, msg: &str) {
    use std::io::Write;

    let line = format!("[{}][{}] {}", Stamp::now(), getpid(), msg);
    let line = if line.ends_with('\n') { line } else { line + "\n" };
    match std::fs::OpenOptions::new().append(true).create(true).open(path) {
        Ok(mut file) => {
            if file.write_all(line.as_bytes()).is_err() {
                eprintln!("diffc: tlog: write_all error");
            }
        }
        Err(_) => eprintln!("diffc: tlog: open file error"),
    }
}

/// Log to the file named by `DIFFC_LOG_FILE`; a no-op when it is unset.
#[macro_export]
macro_rules! log {
    ($fmt:expr) => ({
        if let Ok(log_file) = std::env::var($crate::config::ENV_LOG_FILE) {
            if !log_file.is_empty() {
                $crate::tlog::append(&log_file, $fmt);
            }
        }
    });

    ($fmt:expr, $($arg:tt)*) => ({
        let msg = format!($fmt, $($arg)*);
        $crate::log!(&msg);
    });
}
