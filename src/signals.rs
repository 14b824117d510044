use nix::sys::signal;

pub const EXIT_INTERRUPTED: i32 = 130;

const MSG_INTERRUPTED: &[u8] = b"\ndiffc: interrupted\n";

extern "C" fn handle_sigint(_sig: i32) {
    // only async-signal-safe calls in here
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            MSG_INTERRUPTED.as_ptr() as *const libc::c_void,
            MSG_INTERRUPTED.len(),
        );
        libc::_exit(EXIT_INTERRUPTED);
    }
}

/// Turn Ctrl-C while waiting on input into a short message and a clean
/// exit status.
pub fn setup_sigint_handler() {
    let sigset = signal::SigSet::empty();
    let handler = signal::SigHandler::Handler(handle_sigint);
    let flags = signal::SaFlags::empty();
    let sa = signal::SigAction::new(handler, flags, sigset);
    unsafe {
        match signal::sigaction(signal::SIGINT, &sa) {
            Ok(_) => {}
            Err(e) => {
                log!("sigaction error: {:?}", e);
            }
        }
    }
}
