// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

//! Locating the memory that backs the process command line.
//!
//! On glibc the loader hands `(argc, argv, envp)` to every `.init_array`
//! entry, so the vector is captured before `main` and before anything else
//! gets a chance to copy it. Other Linux-like targets read the region bounds
//! the kernel itself uses for `/proc/<pid>/cmdline` from `/proc/self/stat`.

use std::ffi::CStr;
#[cfg(linux_like)]
use std::ptr::NonNull;

use libc::c_char;

use crate::{
    core::buffer::TitleBuffer,
    defs,
    error::{Error, Result},
};

#[cfg(glibc_init_array)]
mod capture {
    use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

    use libc::{c_char, c_int};

    static ARGC: AtomicUsize = AtomicUsize::new(0);
    static BASE: AtomicPtr<u8> = AtomicPtr::new(std::ptr::null_mut());
    static SPAN: AtomicUsize = AtomicUsize::new(0);

    #[used]
    #[unsafe(link_section = ".init_array.00099")]
    static ARGV_INIT_ARRAY: extern "C" fn(c_int, *const *const c_char, *const *const c_char) =
        capture_args;

    extern "C" fn capture_args(
        argc: c_int,
        argv: *const *const c_char,
        _envp: *const *const c_char,
    ) {
        let argc = argc.max(0) as usize;
        // SAFETY: the glibc loader passes argv[0..argc] as valid strings.
        let Some((base, span)) = (unsafe { super::snapshot(argc, argv) }) else {
            return;
        };
        ARGC.store(argc, Ordering::Relaxed);
        SPAN.store(span, Ordering::Relaxed);
        BASE.store(base, Ordering::Release);
    }

    /// `(argc, argv[0], span)` as they were when the loader ran us.
    pub fn captured() -> (usize, *mut u8, usize) {
        // Referencing the entry keeps its object file in the final link.
        let _ = std::hint::black_box(ARGV_INIT_ARRAY);
        let base = BASE.load(Ordering::Acquire);
        (
            ARGC.load(Ordering::Relaxed),
            base,
            SPAN.load(Ordering::Relaxed),
        )
    }
}

/// Length of the run of arguments laid out back to back from `argv[0]`,
/// terminators included. Stops at the first argument that is not adjacent to
/// the previous one.
///
/// # Safety
///
/// `argv` must point to `argc` valid pointers to NUL-terminated strings.
pub unsafe fn contiguous_span(argc: usize, argv: *const *const c_char) -> usize {
    let mut span = 0;
    let mut expected: *const c_char = std::ptr::null();

    for i in 0..argc {
        // SAFETY: i < argc, guaranteed by the caller.
        let arg = unsafe { *argv.add(i) };
        if arg.is_null() || (i > 0 && arg != expected) {
            break;
        }
        // SAFETY: non-null entries are NUL-terminated strings.
        let len = unsafe { CStr::from_ptr(arg) }.to_bytes_with_nul().len();
        span += len;
        // SAFETY: one past the terminator of the same string.
        expected = unsafe { arg.add(len) };
    }

    span
}

/// Address of `argv[0]` and the contiguous span behind it, read once.
/// `None` for an empty or null vector.
///
/// # Safety
///
/// Same contract as [`contiguous_span`].
pub unsafe fn snapshot(argc: usize, argv: *const *const c_char) -> Option<(*mut u8, usize)> {
    if argv.is_null() || argc == 0 {
        return None;
    }
    // SAFETY: argc > 0, guaranteed valid by the caller.
    let first = unsafe { *argv };
    if first.is_null() {
        return None;
    }
    // SAFETY: forwarded from the caller.
    let span = unsafe { contiguous_span(argc, argv) };
    Some((first as *mut u8, span))
}

#[cfg(glibc_init_array)]
fn from_init_array() -> Result<TitleBuffer> {
    let (argc, first, span) = capture::captured();
    let base = NonNull::new(first).ok_or_else(|| {
        Error::ArgvUnavailable("loader did not pass an argument vector".to_string())
    })?;

    tracing::debug!(
        target: defs::LOG_TARGET,
        "captured argv: argc={}, contiguous region {} bytes",
        argc,
        span
    );

    // SAFETY: argument strings live on the initial stack for the whole
    // process lifetime and are writable.
    unsafe { TitleBuffer::from_raw_parts(base, span) }
        .ok_or_else(|| Error::ArgvUnavailable("empty argument region".to_string()))
}

#[cfg(linux_like)]
fn from_procfs() -> Result<TitleBuffer> {
    let stat = procfs::process::Process::myself()?.stat()?;

    let (Some(start), Some(end)) = (stat.arg_start, stat.arg_end) else {
        return Err(Error::ArgvUnavailable(
            "kernel does not report arg_start/arg_end".to_string(),
        ));
    };
    if end <= start {
        return Err(Error::ArgvUnavailable(format!(
            "empty argument region {start:#x}..{end:#x}"
        )));
    }

    let base = NonNull::new(start as usize as *mut u8)
        .ok_or_else(|| Error::ArgvUnavailable("arg_start is zero".to_string()))?;
    let len = (end - start) as usize;

    tracing::debug!(
        target: defs::LOG_TARGET,
        "argument region from /proc/self/stat: {:#x}..{:#x}",
        start,
        end
    );

    // SAFETY: arg_start..arg_end is this process's own writable argument
    // area, fixed at exec.
    unsafe { TitleBuffer::from_raw_parts(base, len) }
        .ok_or_else(|| Error::ArgvUnavailable("empty argument region".to_string()))
}

pub fn discover() -> Result<TitleBuffer> {
    #[cfg(glibc_init_array)]
    {
        match from_init_array() {
            Ok(buffer) => return Ok(buffer),
            Err(e) => tracing::warn!(
                target: defs::LOG_TARGET,
                "init_array capture failed, trying /proc: {}",
                e
            ),
        }
    }

    #[cfg(linux_like)]
    {
        from_procfs()
    }

    #[cfg(not(linux_like))]
    {
        Err(Error::ArgvUnavailable(
            "no argument vector source on this platform".to_string(),
        ))
    }
}
