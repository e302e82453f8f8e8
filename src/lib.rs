// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

//! Rename the running process as seen by process-listing tools.
//!
//! Two places hold a process's name. `ps` and `/proc/<pid>/cmdline` show the
//! memory that held `argv` at launch; `top` and `/proc/<pid>/comm` show a
//! 16-byte kernel field. [`set_name`] rewrites both.
//!
//! ```no_run
//! procname::initialize()?;
//! let status = procname::set_name("worker-1")?;
//! assert_eq!(procname::get_name()?, "worker-1");
//! # let _ = status;
//! # Ok::<(), procname::Error>(())
//! ```
//!
//! # Caveats
//!
//! - The argument region keeps the size it had at exec. Longer names are
//!   truncated, or rejected under [`TruncationPolicy::Reject`].
//! - A name ends at its first NUL. Bytes after it are dropped, never written.
//! - Code that copied the arguments before the rename keeps the old values.
//!   `std::env::args()` reads `argv` on every call and sees the new one.
//! - The kernel short name belongs to the calling thread; call from the main
//!   thread to change `/proc/<pid>/comm`.
//! - The crate serializes its own calls. Anything else in the process that
//!   reads `argv` directly must be kept from running concurrently with
//!   [`set_name`].

pub mod conf;
pub mod core;
pub mod defs;
pub mod error;
pub mod sys;
pub mod utils;

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

pub use crate::{
    conf::config::{Config, TruncationPolicy},
    core::{ProcessTitle, Status},
    error::{Error, Result},
};

static TITLE: OnceLock<Mutex<ProcessTitle>> = OnceLock::new();

/// Captures the argument region with the default [`Config`].
pub fn initialize() -> Result<()> {
    initialize_with(Config::default())
}

/// Captures the argument region. Once this has succeeded, later calls do
/// nothing and the first config stays in effect.
pub fn initialize_with(config: Config) -> Result<()> {
    if TITLE.get().is_some() {
        return Ok(());
    }

    let buffer = sys::argv::discover()?;
    let kernel = sys::prctl::platform_setter();

    let mut fresh = false;
    TITLE.get_or_init(|| {
        fresh = true;
        tracing::info!(
            target: defs::LOG_TARGET,
            "process title initialized, capacity {} bytes",
            buffer.capacity()
        );
        Mutex::new(ProcessTitle::new(buffer, kernel, config))
    });
    if !fresh {
        tracing::debug!(target: defs::LOG_TARGET, "process title already initialized");
    }

    Ok(())
}

fn title() -> Result<MutexGuard<'static, ProcessTitle>> {
    let cell = TITLE.get().ok_or(Error::NotInitialized)?;
    Ok(cell.lock().unwrap_or_else(PoisonError::into_inner))
}

pub fn is_available() -> bool {
    TITLE.get().is_some()
}

/// The current title up to its first NUL, with invalid UTF-8 replaced.
pub fn get_name() -> Result<String> {
    Ok(title()?.name())
}

pub fn get_name_bytes() -> Result<Vec<u8>> {
    Ok(title()?.name_bytes())
}

/// Rewrites the argument region and the calling thread's kernel name.
///
/// A kernel that cannot or will not take the short name is reported through
/// [`Status`], not as an error.
pub fn set_name(name: impl AsRef<[u8]>) -> Result<Status> {
    title()?.set_name(name.as_ref())
}

/// Longest name that fits without truncation.
pub fn capacity() -> Result<usize> {
    Ok(title()?.capacity())
}

/// The calling thread's kernel short name.
pub fn kernel_name() -> Result<String> {
    title()?.kernel_name()
}
