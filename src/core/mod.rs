// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

pub mod buffer;
pub mod kernel;
pub mod title;

pub use self::{
    buffer::TitleBuffer,
    kernel::{KernelNameSetter, NoKernelName},
    title::{ProcessTitle, Status},
};
