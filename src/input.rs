use std::fs::File;
use std::io::{self, Read};
use std::os::fd::{AsRawFd, OwnedFd};
use std::process::{Command, Stdio};

use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::unistd::pipe;

/// Split raw bytes into lines, dropping line endings.
pub fn to_lines(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    text.lines()
        .map(|x| x.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
        .collect()
}

fn set_cloexec(fd: &OwnedFd) -> io::Result<()> {
    fcntl(fd.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC)).map_err(io::Error::from)?;
    Ok(())
}

/// Read all of stdin.
pub fn read_stdin() -> io::Result<Vec<String>> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;
    log!("input: read {} bytes from stdin", buffer.len());
    Ok(to_lines(&buffer))
}

/// Run `cmd` with `args` and capture stdout and stderr as one stream.
///
/// Both are attached to the same pipe, so their lines keep the order the
/// command wrote them in. The exit status is only logged: diff tools exit
/// with 1 when they found differences.
pub fn run_diff(cmd: &str, args: &[String]) -> io::Result<Vec<String>> {
    let (fd_read, fd_write) = pipe().map_err(io::Error::from)?;
    set_cloexec(&fd_read)?;
    set_cloexec(&fd_write)?;
    let fd_write_err = fd_write.try_clone()?;

    let mut child = {
        let mut command = Command::new(cmd);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(fd_write))
            .stderr(Stdio::from(fd_write_err));
        // `command` holds the write ends and must be gone before reading
        command.spawn()?
    };
    log!("input: spawned {} {:?} as pid {}", cmd, args, child.id());

    let mut buffer = Vec::new();
    File::from(fd_read).read_to_end(&mut buffer)?;

    match child.wait() {
        Ok(status) => {
            log!("input: {} exited with {}", cmd, status);
        }
        Err(e) => {
            log!("input: wait {} failed: {:?}", cmd, e);
        }
    }

    Ok(to_lines(&buffer))
}

/// Lines to color for the given CLI args.
///
/// A command that cannot be started yields the message a shell would
/// have written into the merged stream.
pub fn acquire(cmd: &str, args: &[String]) -> io::Result<Vec<String>> {
    if args.is_empty() {
        return read_stdin();
    }

    match run_diff(cmd, args) {
        Ok(lines) => Ok(lines),
        Err(e) => {
            log!("input: cannot run {}: {:?}", cmd, e);
            Ok(vec![format!("diffc: {}: {}", cmd, e)])
        }
    }
}
