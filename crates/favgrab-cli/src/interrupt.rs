//! SIGINT handling: abort the whole run immediately with exit code 1.
//!
//! Already-finalized icons stay valid; writes are whole-file atomic, so an
//! interrupted run cannot leave a truncated file behind.

#[cfg(unix)]
pub fn install() {
    let handler: extern "C" fn(libc::c_int) = handle_sigint;
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(unix)]
extern "C" fn handle_sigint(_sig: libc::c_int) {
    // Only async-signal-safe calls here: raw write, then _exit.
    const MSG: &[u8] = b"\ninterrupted\n";
    unsafe {
        libc::write(libc::STDERR_FILENO, MSG.as_ptr().cast(), MSG.len());
        libc::_exit(1);
    }
}

#[cfg(not(unix))]
pub fn install() {}
