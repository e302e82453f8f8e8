// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

use serde::Serialize;

use crate::{
    conf::config::{Config, TruncationPolicy},
    core::{
        buffer::TitleBuffer,
        kernel::{self, KernelNameSetter},
    },
    defs,
    error::{Error, Result},
};

/// Outcome of a successful `set_name`. The argument region is always
/// rewritten; the variants describe what happened to the kernel short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    FullySet,
    ArgvSetKernelNameUnsupported,
    ArgvSetKernelNameDenied,
    ArgvSetKernelNameSkipped,
}

impl Status {
    pub fn is_fully_set(self) -> bool {
        self == Status::FullySet
    }
}

pub struct ProcessTitle {
    buffer: TitleBuffer,
    kernel: Box<dyn KernelNameSetter>,
    config: Config,
}

impl ProcessTitle {
    pub fn new(buffer: TitleBuffer, kernel: Box<dyn KernelNameSetter>, config: Config) -> Self {
        Self {
            buffer,
            kernel,
            config,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn name_bytes(&self) -> Vec<u8> {
        self.buffer.read()
    }

    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.buffer.read()).into_owned()
    }

    pub fn kernel_name(&self) -> Result<String> {
        let raw = self.kernel.name()?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Rewrites the argument region and then the kernel short name.
    ///
    /// The name ends at its first NUL; anything after it is dropped and the
    /// region past the visible name is zero-filled.
    pub fn set_name(&mut self, name: &[u8]) -> Result<Status> {
        let capacity = self.buffer.capacity();
        let name = kernel::visible(name);

        let name = if name.len() > capacity {
            match self.config.truncation {
                TruncationPolicy::Reject => {
                    return Err(Error::NameTooLong {
                        len: name.len(),
                        capacity,
                    });
                }
                TruncationPolicy::Truncate => {
                    tracing::warn!(
                        target: defs::LOG_TARGET,
                        "title truncated from {} to {} bytes",
                        name.len(),
                        capacity
                    );
                    &name[..capacity]
                }
            }
        } else {
            name
        };

        self.buffer.write(name);

        if self.config.log_renames {
            tracing::debug!(
                target: defs::LOG_TARGET,
                "argv title set to {:?}",
                String::from_utf8_lossy(name)
            );
        } else {
            tracing::trace!(target: defs::LOG_TARGET, "argv title updated");
        }

        if !self.config.update_kernel_name {
            return Ok(Status::ArgvSetKernelNameSkipped);
        }

        let status = match self.kernel.set_name(kernel::short_name(name)) {
            Ok(()) => Status::FullySet,
            Err(Error::PermissionDenied { errno }) => {
                tracing::warn!(
                    target: defs::LOG_TARGET,
                    "kernel refused short name update (errno {})",
                    errno
                );
                Status::ArgvSetKernelNameDenied
            }
            Err(e) => {
                tracing::debug!(target: defs::LOG_TARGET, "kernel short name skipped: {}", e);
                Status::ArgvSetKernelNameUnsupported
            }
        };

        Ok(status)
    }
}
