// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

//! Non-owning view over the memory that held the process arguments at launch.

use std::ptr::NonNull;

/// The writable region backing `argv`.
///
/// Address and length are fixed when the view is created; writes never leave
/// `[base, base + len)`. The final byte is reserved for a NUL so the name is
/// always terminated inside the region.
#[derive(Debug)]
pub struct TitleBuffer {
    base: NonNull<u8>,
    len: usize,
}

// SAFETY: the region belongs to the process image and lives until exit.
// All access goes through `&self`/`&mut self`, so moving the view to another
// thread is fine; callers serialize mutation.
unsafe impl Send for TitleBuffer {}

impl TitleBuffer {
    /// # Safety
    ///
    /// `base` must point to `len` bytes that stay valid and writable for the
    /// rest of the process and are not accessed through Rust references
    /// elsewhere while this view exists.
    pub unsafe fn from_raw_parts(base: NonNull<u8>, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self { base, len })
    }

    /// Wraps a leaked allocation. Used for regions the crate owns itself.
    pub fn from_static(region: &'static mut [u8]) -> Option<Self> {
        let len = region.len();
        let base = NonNull::new(region.as_mut_ptr())?;
        // SAFETY: a leaked mutable slice is valid for 'static and unaliased.
        unsafe { Self::from_raw_parts(base, len) }
    }

    /// Bytes available for a name, the reserved terminator excluded.
    pub fn capacity(&self) -> usize {
        self.len - 1
    }

    /// Current contents up to the first NUL.
    pub fn read(&self) -> Vec<u8> {
        let region = self.as_slice();
        let end = region.iter().position(|&b| b == 0).unwrap_or(region.len());
        region[..end].to_vec()
    }

    /// Copies `name` to the start of the region and zeroes everything after it.
    ///
    /// `name` must already fit in `capacity()`; the caller applies the
    /// truncation policy.
    pub fn write(&mut self, name: &[u8]) {
        assert!(name.len() <= self.capacity());

        let region = self.as_mut_slice();
        let (head, tail) = region.split_at_mut(name.len());
        head.copy_from_slice(name);
        tail.fill(0);
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &[u8] {
        self.as_slice()
    }

    fn as_slice(&self) -> &[u8] {
        // SAFETY: guaranteed by the constructor contract.
        unsafe { std::slice::from_raw_parts(self.base.as_ptr(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: guaranteed by the constructor contract; `&mut self` is unique.
        unsafe { std::slice::from_raw_parts_mut(self.base.as_ptr(), self.len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaked(contents: &[u8]) -> TitleBuffer {
        let region: &'static mut [u8] = Box::leak(contents.to_vec().into_boxed_slice());
        TitleBuffer::from_static(region).unwrap()
    }

    #[test]
    fn reads_first_argument_only() {
        let buf = leaked(b"/usr/bin/app\0--flag\0");
        assert_eq!(buf.read(), b"/usr/bin/app");
        assert_eq!(buf.capacity(), 19);
    }

    #[test]
    fn shorter_name_does_not_leave_residue() {
        let mut buf = leaked(b"aaaaaaaaaa\0");
        buf.write(b"bb");
        assert_eq!(buf.read(), b"bb");
        assert!(buf.as_slice()[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn full_capacity_keeps_terminator() {
        let mut buf = leaked(b"abc\0de\0");
        buf.write(b"xyzwvu");
        assert_eq!(buf.read(), b"xyzwvu");
        assert_eq!(buf.as_slice()[6], 0);
    }

    #[test]
    fn empty_region_is_rejected() {
        let region: &'static mut [u8] = Box::leak(Vec::new().into_boxed_slice());
        assert!(TitleBuffer::from_static(region).is_none());
    }

    #[test]
    #[should_panic]
    fn oversized_write_panics_instead_of_overflowing() {
        let mut buf = leaked(b"ab\0");
        buf.write(b"abc");
    }
}
