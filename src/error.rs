// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation ran before `initialize` succeeded.
    NotInitialized,
    /// Only returned under `TruncationPolicy::Reject`.
    NameTooLong { len: usize, capacity: usize },
    /// The platform has no kernel short-name field. Non-fatal.
    KernelNameUnsupported,
    /// The kernel refused the short-name update. Non-fatal.
    PermissionDenied { errno: i32 },
    /// The argument region could not be located at initialization.
    ArgvUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "process title has not been initialized"),
            Error::NameTooLong { len, capacity } => write!(
                f,
                "name is {len} bytes but the argument region only holds {capacity}"
            ),
            Error::KernelNameUnsupported => {
                write!(f, "kernel short name is not supported on this platform")
            }
            Error::PermissionDenied { errno } => {
                write!(f, "kernel rejected short name update (errno {errno})")
            }
            Error::ArgvUnavailable(reason) => {
                write!(f, "argument vector unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(linux_like)]
impl From<rustix::io::Errno> for Error {
    fn from(errno: rustix::io::Errno) -> Self {
        use rustix::io::Errno;

        match errno {
            Errno::NOSYS | Errno::INVAL | Errno::OPNOTSUPP => Error::KernelNameUnsupported,
            other => Error::PermissionDenied {
                errno: other.raw_os_error(),
            },
        }
    }
}

#[cfg(linux_like)]
impl From<procfs::ProcError> for Error {
    fn from(err: procfs::ProcError) -> Self {
        Error::ArgvUnavailable(format!("reading /proc/self/stat: {err}"))
    }
}
