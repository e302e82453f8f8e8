// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

use crate::{
    defs,
    error::{Error, Result},
};

/// Access to the kernel's fixed-width thread name.
pub trait KernelNameSetter: Send {
    /// `name` is already cut to the kernel field width and holds no NUL.
    fn set_name(&self, name: &[u8]) -> Result<()>;

    fn name(&self) -> Result<Vec<u8>>;
}

/// Fallback for platforms without a kernel short name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoKernelName;

impl KernelNameSetter for NoKernelName {
    fn set_name(&self, _name: &[u8]) -> Result<()> {
        Err(Error::KernelNameUnsupported)
    }

    fn name(&self) -> Result<Vec<u8>> {
        Err(Error::KernelNameUnsupported)
    }
}

/// `name` up to its first NUL.
pub fn visible(name: &[u8]) -> &[u8] {
    name.iter()
        .position(|&b| b == 0)
        .map_or(name, |end| &name[..end])
}

/// The part of `name` the kernel field can show: up to the first NUL, at
/// most `KERNEL_NAME_MAX` bytes.
pub fn short_name(name: &[u8]) -> &[u8] {
    let visible = visible(name);
    &visible[..visible.len().min(defs::KERNEL_NAME_MAX)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_cuts_to_field_width() {
        assert_eq!(short_name(b"worker-1"), b"worker-1");
        assert_eq!(short_name(b"0123456789abcdefgh"), b"0123456789abcde");
    }

    #[test]
    fn short_name_stops_at_nul() {
        assert_eq!(short_name(b"ab\0cd"), b"ab");
        assert_eq!(short_name(b"\0"), b"");
    }

    #[test]
    fn fallback_reports_unsupported() {
        assert_eq!(NoKernelName.set_name(b"x"), Err(Error::KernelNameUnsupported));
        assert_eq!(NoKernelName.name(), Err(Error::KernelNameUnsupported));
    }
}
