// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

#[cfg(linux_like)]
use std::ffi::CString;

#[cfg(not(linux_like))]
use crate::core::kernel::NoKernelName;
use crate::core::kernel::KernelNameSetter;
#[cfg(linux_like)]
use crate::error::{Error, Result};

/// `PR_SET_NAME` / `PR_GET_NAME` on the calling thread.
#[cfg(linux_like)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadName;

#[cfg(linux_like)]
impl KernelNameSetter for ThreadName {
    fn set_name(&self, name: &[u8]) -> Result<()> {
        let c_name = CString::new(name).map_err(|_| Error::KernelNameUnsupported)?;
        rustix::thread::set_name(&c_name)?;
        Ok(())
    }

    fn name(&self) -> Result<Vec<u8>> {
        Ok(rustix::thread::name()?.into_bytes())
    }
}

#[cfg(linux_like)]
pub fn platform_setter() -> Box<dyn KernelNameSetter> {
    Box::new(ThreadName)
}

#[cfg(not(linux_like))]
pub fn platform_setter() -> Box<dyn KernelNameSetter> {
    Box::new(NoKernelName)
}

#[cfg(all(test, linux_like))]
mod tests {
    use super::*;

    #[test]
    fn round_trips_on_current_thread() {
        let handle = std::thread::spawn(|| {
            ThreadName.set_name(b"pn-test").unwrap();
            ThreadName.name().unwrap()
        });
        assert_eq!(handle.join().unwrap(), b"pn-test");
    }

    #[test]
    fn interior_nul_is_refused() {
        assert_eq!(
            ThreadName.set_name(b"a\0b"),
            Err(Error::KernelNameUnsupported)
        );
    }
}
