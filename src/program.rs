//! Program body.
//!
//! [`run`] writes the two greeting lines to standard output. Writes go
//! straight to the file descriptor through rustix, so a failed write comes
//! back as an [`Errno`] for the caller to propagate instead of a panic.

use rustix::fd::AsFd;
use rustix::io::{self, Errno};

use crate::greeting;

/// Write all of `bytes` to `fd`.
///
/// Short writes are continued and `EINTR` is retried. Any other error is
/// returned as is.
pub fn write_all<Fd: AsFd>(fd: Fd, bytes: &[u8]) -> io::Result<()> {
    let fd = fd.as_fd();
    let mut remaining = bytes;
    while !remaining.is_empty() {
        match io::write(fd, remaining) {
            Ok(0) => return Err(Errno::IO),
            Ok(n) => remaining = &remaining[n..],
            Err(Errno::INTR) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Write the greeting to `fd`.
pub fn run_to<Fd: AsFd>(fd: Fd) -> io::Result<()> {
    log::trace!(target: "sailor::program", "Program started");

    let out = greeting::render();
    write_all(fd, out.as_bytes())?;
    log::trace!(target: "sailor::program", "Wrote {} bytes", out.len());

    log::trace!(target: "sailor::program", "Program finished");
    Ok(())
}

/// Write the greeting to standard output.
pub fn run() -> io::Result<()> {
    run_to(rustix::stdio::stdout())
}
